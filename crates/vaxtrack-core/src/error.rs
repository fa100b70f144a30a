//! Error taxonomy for inventory operations.

use thiserror::Error;

use crate::store::StorageError;

/// Errors surfaced by inventory operations.
///
/// All three kinds propagate to the immediate caller unhandled; the core
/// performs no retries and no rollback beyond the receipt-then-lot write
/// order. Each carries enough detail (field name, missing id) for the
/// presentation layer to render a meaningful message.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A caller-correctable precondition failed; `field` names the
    /// offending input.
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// A referenced record does not exist in storage.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },

    /// Opaque failure from the storage collaborator, not interpreted here.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl InventoryError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn lot_not_found(id: u32) -> Self {
        Self::NotFound { entity: "lot", id }
    }
}

/// Shorthand result for operations that can fail with [`InventoryError`].
pub type InventoryResult<T> = Result<T, InventoryError>;
