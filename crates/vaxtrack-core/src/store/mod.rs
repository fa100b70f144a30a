//! Storage collaborator boundary.
//!
//! The record store is external to this core: classification and reporting
//! operate on read-only snapshots, and all mutation goes through inventory
//! operations, which hand the result back here to persist. The [`Store`]
//! trait is the whole contract; [`MemoryStore`] is the in-memory
//! implementation used by tests and embedders without a real backend.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{AdministrationEvent, Lot, Receipt, Vaccine};

/// Opaque failure from the storage collaborator.
///
/// The core surfaces these unchanged; it never retries or interprets them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("storage lock poisoned: {0}")]
    LockPoisoned(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Contract the external record store must satisfy.
///
/// `save_*` calls assign an identifier when the incoming record's id is 0,
/// and insert-or-update by id otherwise. Listing calls return snapshots;
/// mutating a returned record has no effect until it is saved back.
pub trait Store {
    /// All catalog entries.
    fn list_vaccines(&self) -> StorageResult<Vec<Vaccine>>;

    /// All inventory lots.
    fn list_lots(&self) -> StorageResult<Vec<Lot>>;

    /// All dose administration events.
    fn list_administration_events(&self) -> StorageResult<Vec<AdministrationEvent>>;

    /// Look up a single lot by id.
    fn get_lot(&self, id: u32) -> StorageResult<Option<Lot>>;

    /// Persist a shipment receipt, returning it with its assigned id.
    fn save_receipt(&mut self, receipt: Receipt) -> StorageResult<Receipt>;

    /// Insert or update a lot by id, returning the stored record.
    fn save_lot(&mut self, lot: Lot) -> StorageResult<Lot>;

    /// Persist an administration event, returning it with its assigned id.
    fn save_administration_event(
        &mut self,
        event: AdministrationEvent,
    ) -> StorageResult<AdministrationEvent>;
}
