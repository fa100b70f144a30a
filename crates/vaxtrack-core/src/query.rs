//! Read-side filters over inventory snapshots.
//!
//! Pure helpers the presentation layer uses to narrow lot lists; none of
//! these mutate anything or touch storage.

use chrono::NaiveDate;

use crate::classify::{classify, Status};
use crate::models::{Lot, Vaccine};

/// Lots whose classification matches `status`, input order preserved.
pub fn filter_by_status(lots: &[Lot], status: Status, today: NaiveDate) -> Vec<&Lot> {
    lots.iter()
        .filter(|lot| classify(lot, today) == status)
        .collect()
}

/// Lots eligible for dose administration: doses remain and the lot is not
/// expired. Expiring lots stay eligible until their expiration date passes.
pub fn administrable_lots(lots: &[Lot], today: NaiveDate) -> Vec<&Lot> {
    lots.iter()
        .filter(|lot| lot.in_stock() && classify(lot, today) != Status::Expired)
        .collect()
}

/// Case-insensitive substring search over commercial name, generic name,
/// and lot number. Lots referencing a vaccine missing from the catalog
/// snapshot only match on their lot number.
pub fn search_lots<'a>(vaccines: &[Vaccine], lots: &'a [Lot], term: &str) -> Vec<&'a Lot> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return lots.iter().collect();
    }

    lots.iter()
        .filter(|lot| {
            if lot.lot_number.to_lowercase().contains(&term) {
                return true;
            }
            vaccines.iter().any(|v| {
                v.id == lot.vaccine_id
                    && (v.commercial_name.to_lowercase().contains(&term)
                        || v.generic_name.to_lowercase().contains(&term))
            })
        })
        .collect()
}
