//! Display arrangement of a puzzle's tiles
//!
//! The arrangement is only a view of a [`Puzzle`]: seven tiles with the
//! central letter pinned to [`CENTRAL_SLOT`]. Shuffling moves the other six.

use super::letters::{Puzzle, SET_SIZE};
use rand::Rng;
use rand::seq::SliceRandom;

/// Tile index that always holds the central letter
pub const CENTRAL_SLOT: usize = 3;

/// Ordered tiles for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    tiles: [char; SET_SIZE],
}

impl Arrangement {
    /// Lay out a puzzle's letters, central letter in the middle slot
    ///
    /// The outer letters keep the order of the puzzle's letter set.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        let central = puzzle.central();
        let mut tiles = [central; SET_SIZE];
        let outer = puzzle
            .letters()
            .letters()
            .iter()
            .copied()
            .filter(|&c| c != central);

        for (slot, letter) in Self::outer_slots().zip(outer) {
            tiles[slot] = letter;
        }

        Self { tiles }
    }

    /// Shuffle the outer tiles, leaving the central one in place
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut outer: Vec<char> = Self::outer_slots().map(|slot| self.tiles[slot]).collect();
        outer.shuffle(rng);
        for (slot, letter) in Self::outer_slots().zip(outer) {
            self.tiles[slot] = letter;
        }
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[char; SET_SIZE] {
        &self.tiles
    }

    /// Letter on a tile, if the index is in range
    #[inline]
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<char> {
        self.tiles.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub const fn central(&self) -> char {
        self.tiles[CENTRAL_SLOT]
    }

    fn outer_slots() -> impl Iterator<Item = usize> {
        (0..SET_SIZE).filter(|&slot| slot != CENTRAL_SLOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(tiles: &[char]) -> Vec<char> {
        let mut v = tiles.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn central_letter_in_middle() {
        let puzzle = Puzzle::parse("KATROSE", 'R').unwrap();
        let arrangement = Arrangement::new(&puzzle);
        assert_eq!(arrangement.tiles(), &['K', 'A', 'T', 'R', 'O', 'S', 'E']);
        assert_eq!(arrangement.central(), 'R');

        let puzzle = Puzzle::parse("KATROSE", 'K').unwrap();
        let arrangement = Arrangement::new(&puzzle);
        assert_eq!(arrangement.tiles(), &['A', 'T', 'R', 'K', 'O', 'S', 'E']);
    }

    #[test]
    fn tile_out_of_range() {
        let puzzle = Puzzle::parse("KATROSE", 'A').unwrap();
        let arrangement = Arrangement::new(&puzzle);
        assert_eq!(arrangement.tile(0), Some('K'));
        assert_eq!(arrangement.tile(7), None);
    }

    proptest! {
        #[test]
        fn shuffle_keeps_letters_and_central(seed in any::<u64>(), central_idx in 0usize..7) {
            let letters = ['K', 'A', 'T', 'R', 'O', 'S', 'E'];
            let puzzle = Puzzle::parse("KATROSE", letters[central_idx]).unwrap();
            let mut arrangement = Arrangement::new(&puzzle);
            let before = sorted(arrangement.tiles());

            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..5 {
                arrangement.shuffle(&mut rng);
                prop_assert_eq!(sorted(arrangement.tiles()), before.clone());
                prop_assert_eq!(arrangement.tiles()[CENTRAL_SLOT], letters[central_idx]);
            }
        }
    }
}
