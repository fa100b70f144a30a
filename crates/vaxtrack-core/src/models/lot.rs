//! Inventory lot model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A received, trackable quantity of one vaccine product sharing a lot
/// number and expiration date.
///
/// `quantity_on_hand` is unsigned, so the "never negative" invariant is
/// carried by the type. Expiration is a calendar date compared at day
/// granularity, never a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lot {
    /// Unique positive identifier, assigned by storage
    pub id: u32,
    /// Catalog entry this lot belongs to
    pub vaccine_id: u32,
    /// Manufacturer lot number (unique per vaccine by convention,
    /// not globally enforced)
    pub lot_number: String,
    /// Last day the lot may be used
    pub expiration_date: NaiveDate,
    /// Current undispensed doses
    pub quantity_on_hand: u32,
    /// Day the shipment arrived
    pub received_date: NaiveDate,
}

impl Lot {
    /// Create a lot with an unassigned id (storage fills it in on save).
    pub fn new(
        vaccine_id: u32,
        lot_number: String,
        expiration_date: NaiveDate,
        quantity_on_hand: u32,
        received_date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            vaccine_id,
            lot_number,
            expiration_date,
            quantity_on_hand,
            received_date,
        }
    }

    /// Whether any doses remain.
    pub fn in_stock(&self) -> bool {
        self.quantity_on_hand > 0
    }
}
