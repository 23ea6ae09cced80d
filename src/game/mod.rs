//! Game state: sessions, lifecycle and the background loader

mod phase;
mod session;
pub mod worker;

pub use phase::Phase;
pub use session::{Action, Session, SubmitOutcome};
pub use worker::{LoadOutcome, LoadRequest, Loader, SetupError};
