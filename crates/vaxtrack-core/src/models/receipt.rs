//! Shipment receipt model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable record of one received shipment, including the inspection
/// pass/fail split.
///
/// Invariants (enforced by inventory operations before a receipt is
/// persisted):
/// - `doses_passed_inspection + doses_failed_inspection == quantity_received`
/// - `quantity_received <= quantity_sent`
/// - `discrepancy_reason` is present iff `quantity_sent != quantity_received`
///
/// A receipt produces exactly one [`Lot`](super::Lot), stocked with the
/// doses that passed inspection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    /// Unique positive identifier, assigned by storage
    pub id: u32,
    /// Catalog entry the shipment belongs to
    pub vaccine_id: u32,
    /// Manufacturer lot number
    pub lot_number: String,
    /// Doses the supplier shipped
    pub quantity_sent: u32,
    /// Doses that actually arrived
    pub quantity_received: u32,
    /// Doses that passed quality inspection
    pub doses_passed_inspection: u32,
    /// Doses that failed quality inspection (derived: received - passed)
    pub doses_failed_inspection: u32,
    /// Explanation for a sent/received mismatch
    pub discrepancy_reason: Option<String>,
    /// Day the shipment arrived
    pub received_date: NaiveDate,
}

impl Receipt {
    /// Whether the shipment arrived short (or over) of what was sent.
    pub fn has_discrepancy(&self) -> bool {
        self.quantity_sent != self.quantity_received
    }
}
