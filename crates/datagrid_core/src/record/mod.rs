//! Record identities and storage.

mod id;
mod store;

pub use id::IdGenerator;
pub use store::{InsertPosition, RecordStore, StoredRecord};
