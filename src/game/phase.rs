//! Game lifecycle around a session

use super::session::{Action, Session, SubmitOutcome};
use rand::Rng;

/// Where the game is in its lifecycle
///
/// Actions only reach the session once a puzzle exists.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Waiting for the dictionary and the first puzzle
    Loading,
    Ready(Box<Session>),
    /// Loading or generation failed; holds the reason for display
    Failed(String),
}

impl Phase {
    /// Forward an action to the session, if there is one
    pub fn apply<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> Option<SubmitOutcome> {
        match self {
            Self::Ready(session) => session.apply(action, rng),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Ready(session) => Some(&**session),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
