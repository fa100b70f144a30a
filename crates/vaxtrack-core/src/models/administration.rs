//! Dose administration model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record of doses given to patients from one lot.
///
/// Recording one decrements the referenced lot's quantity on hand by the
/// same amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdministrationEvent {
    /// Unique positive identifier, assigned by storage
    pub id: u32,
    /// Lot the doses were drawn from
    pub lot_id: u32,
    /// Doses given (always at least 1)
    pub doses_administered: u32,
    /// Day the doses were given
    pub administration_date: NaiveDate,
}

impl AdministrationEvent {
    /// Create an event with an unassigned id (storage fills it in on save).
    pub fn new(lot_id: u32, doses_administered: u32, administration_date: NaiveDate) -> Self {
        Self {
            id: 0,
            lot_id,
            doses_administered,
            administration_date,
        }
    }
}
