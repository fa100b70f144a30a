//! Vaccine catalog model.

use serde::{Deserialize, Serialize};

/// A vaccine product in the catalog.
///
/// Catalog entries are treated as immutable once a lot references them;
/// catalog maintenance itself happens outside this core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vaccine {
    /// Unique positive identifier, assigned by storage
    pub id: u32,
    /// Brand name shown to users (e.g., "FluShield")
    pub commercial_name: String,
    /// Generic/scientific name (e.g., "influenza quadrivalent")
    pub generic_name: String,
}

impl Vaccine {
    /// Create a catalog entry. An id of 0 means "unassigned"; storage
    /// fills in the real identifier on save.
    pub fn new(commercial_name: String, generic_name: String) -> Self {
        Self {
            id: 0,
            commercial_name,
            generic_name,
        }
    }
}
