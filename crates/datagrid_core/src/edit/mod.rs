//! Cell editing.

mod session;

pub use session::{ActiveEdit, CommitOutcome, EditSession, EditState, PriorEditResolution};
