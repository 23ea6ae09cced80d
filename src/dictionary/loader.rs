//! Dictionary loading
//!
//! Reads a newline-delimited UTF-8 word list, one word per line.

use super::Dictionary;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// File missing, unreadable, or not valid UTF-8.
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File was read but held no words.
    #[error("word list {path} contains no words")]
    Empty { path: PathBuf },
}

/// Parse word list text
///
/// # Examples
/// ```
/// use spelling_bee::dictionary::parse;
///
/// let dict = parse("katt\n\n  Tak \r\nmat\n");
/// assert_eq!(dict.words(), &["katt", "tak", "mat"]);
/// ```
#[must_use]
pub fn parse(text: &str) -> Dictionary {
    Dictionary::from_words(text.lines())
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError::Read` if the file cannot be read, and
/// `DictionaryError::Empty` if it contains no words.
///
/// # Examples
/// ```no_run
/// use spelling_bee::dictionary::load_from_file;
///
/// let dict = load_from_file("data/swedish_words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    debug!("Reading word list from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dict = parse(&content);
    if dict.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(
        "Loaded {} words ({} playable) from {}",
        dict.len(),
        dict.playable_count(),
        path.display()
    );
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "spelling_bee_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let dict = parse("KATT\n tak\t\nÄLG\n");
        assert_eq!(dict.words(), &["katt", "tak", "älg"]);
    }

    #[test]
    fn parse_filters_blank_lines() {
        let dict = parse("\n\nkatt\n\n\n");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("words", "katt\ntak\nmat\n");
        let dict = load_from_file(&path).unwrap();
        assert_eq!(dict.len(), 3);
        fs::remove_file(path).ok();
    }

    #[test]
    fn load_from_file_missing() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(DictionaryError::Read { .. })));
    }

    #[test]
    fn load_from_file_blank_is_empty_error() {
        let path = temp_file("blank", "\n  \n\n");
        let result = load_from_file(&path);
        assert!(matches!(result, Err(DictionaryError::Empty { .. })));
        fs::remove_file(path).ok();
    }
}
