//! Lot status classification.
//!
//! Pure functions that turn raw lot records into status labels, alert
//! banners, and the low-stock reorder list. Every time-sensitive function
//! takes an explicit `today` so date-window logic stays deterministic in
//! tests; nothing here reads the clock or touches storage.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Lot;

/// Lots expiring within this many days are flagged as expiring soon.
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

/// Lots at or below this many doses are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Maximum entries in the low-stock reorder list.
pub const LOW_STOCK_DISPLAY_LIMIT: usize = 5;

/// Derived status of a single lot.
///
/// A lot can be both past its expiration window and low on stock at the
/// same time; [`classify`] resolves the ambiguity with a fixed first-match
/// order, so expiry always wins over stock level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    /// Expiration date is in the past
    Expired,
    /// Expires within [`EXPIRING_WINDOW_DAYS`] days (today counts)
    Expiring,
    /// At or below [`LOW_STOCK_THRESHOLD`] doses
    LowStock,
    /// Nothing to flag
    Ok,
}

/// Alert severity for presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One dashboard alert: a non-empty status category and how many lots
/// fall into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub category: Status,
    pub severity: Severity,
    pub count: usize,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Status::Expired => write!(
                f,
                "{} vaccine lots have expired and need immediate attention.",
                self.count
            ),
            Status::Expiring => write!(
                f,
                "{} vaccine lots will expire within {} days.",
                self.count, EXPIRING_WINDOW_DAYS
            ),
            Status::LowStock => write!(
                f,
                "{} vaccine lots are running low on inventory.",
                self.count
            ),
            Status::Ok => write!(f, "{} vaccine lots are in good standing.", self.count),
        }
    }
}

/// Signed whole days until the lot expires. Negative once the expiration
/// date is in the past; zero means it expires today.
pub fn days_to_expiry(lot: &Lot, today: NaiveDate) -> i64 {
    lot.expiration_date.signed_duration_since(today).num_days()
}

/// Classify a single lot.
///
/// First match wins, in this order:
/// 1. already expired
/// 2. expiring within [`EXPIRING_WINDOW_DAYS`] days
/// 3. at or below [`LOW_STOCK_THRESHOLD`] doses
/// 4. ok
pub fn classify(lot: &Lot, today: NaiveDate) -> Status {
    let days = days_to_expiry(lot, today);
    if days < 0 {
        Status::Expired
    } else if days <= EXPIRING_WINDOW_DAYS {
        Status::Expiring
    } else if lot.quantity_on_hand <= LOW_STOCK_THRESHOLD {
        Status::LowStock
    } else {
        Status::Ok
    }
}

/// Build dashboard alerts for a set of lots.
///
/// One alert per non-empty category, in Expired, Expiring, LowStock order.
/// Expired is an error; the other two are warnings.
pub fn alerts_for(lots: &[Lot], today: NaiveDate) -> Vec<Alert> {
    let mut expired = 0;
    let mut expiring = 0;
    let mut low_stock = 0;

    for lot in lots {
        match classify(lot, today) {
            Status::Expired => expired += 1,
            Status::Expiring => expiring += 1,
            Status::LowStock => low_stock += 1,
            Status::Ok => {}
        }
    }

    let mut alerts = Vec::new();
    if expired > 0 {
        alerts.push(Alert {
            category: Status::Expired,
            severity: Severity::Error,
            count: expired,
        });
    }
    if expiring > 0 {
        alerts.push(Alert {
            category: Status::Expiring,
            severity: Severity::Warning,
            count: expiring,
        });
    }
    if low_stock > 0 {
        alerts.push(Alert {
            category: Status::LowStock,
            severity: Severity::Warning,
            count: low_stock,
        });
    }
    alerts
}

/// Lots at or below the low-stock threshold, neediest first.
///
/// Sorted ascending by quantity on hand (stable, so input order breaks
/// ties) and truncated to [`LOW_STOCK_DISPLAY_LIMIT`] entries.
pub fn low_stock_ranked(lots: &[Lot]) -> Vec<&Lot> {
    let mut ranked: Vec<&Lot> = lots
        .iter()
        .filter(|lot| lot.quantity_on_hand <= LOW_STOCK_THRESHOLD)
        .collect();
    ranked.sort_by_key(|lot| lot.quantity_on_hand);
    ranked.truncate(LOW_STOCK_DISPLAY_LIMIT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lot(quantity: u32, expiration: NaiveDate) -> Lot {
        Lot::new(
            1,
            "LOT-001".into(),
            expiration,
            quantity,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_to_expiry_signs() {
        let today = day(2025, 6, 15);

        let lot = make_lot(100, day(2025, 6, 20));
        assert_eq!(days_to_expiry(&lot, today), 5);

        let lot = make_lot(100, day(2025, 6, 15));
        assert_eq!(days_to_expiry(&lot, today), 0);

        let lot = make_lot(100, day(2025, 6, 10));
        assert_eq!(days_to_expiry(&lot, today), -5);
    }

    #[test]
    fn test_expired_wins_regardless_of_quantity() {
        let today = day(2025, 6, 15);
        let lot = make_lot(500, day(2025, 6, 14));
        assert_eq!(classify(&lot, today), Status::Expired);

        let lot = make_lot(0, day(2025, 6, 14));
        assert_eq!(classify(&lot, today), Status::Expired);
    }

    #[test]
    fn test_expiring_wins_over_low_stock() {
        let today = day(2025, 6, 15);
        // Both inside the window and at the stock threshold
        let lot = make_lot(5, day(2025, 7, 1));
        assert_eq!(classify(&lot, today), Status::Expiring);
    }

    #[test]
    fn test_expiring_window_boundaries() {
        let today = day(2025, 6, 15);

        // Expires today: still usable, counts as expiring
        let lot = make_lot(100, today);
        assert_eq!(classify(&lot, today), Status::Expiring);

        // Exactly 30 days out
        let lot = make_lot(100, day(2025, 7, 15));
        assert_eq!(classify(&lot, today), Status::Expiring);

        // 31 days out
        let lot = make_lot(100, day(2025, 7, 16));
        assert_eq!(classify(&lot, today), Status::Ok);
    }

    #[test]
    fn test_low_stock_threshold_boundary() {
        let today = day(2025, 6, 15);
        let far_out = day(2026, 6, 15);

        let lot = make_lot(10, far_out);
        assert_eq!(classify(&lot, today), Status::LowStock);

        let lot = make_lot(11, far_out);
        assert_eq!(classify(&lot, today), Status::Ok);
    }

    #[test]
    fn test_alerts_order_and_skipping() {
        let today = day(2025, 6, 15);
        let lots = vec![
            make_lot(100, day(2025, 6, 1)),  // expired
            make_lot(100, day(2025, 6, 2)),  // expired
            make_lot(100, day(2025, 6, 20)), // expiring
        ];

        let alerts = alerts_for(&lots, today);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].category, Status::Expired);
        assert_eq!(alerts[0].severity, Severity::Error);
        assert_eq!(alerts[0].count, 2);
        assert_eq!(alerts[1].category, Status::Expiring);
        assert_eq!(alerts[1].severity, Severity::Warning);
        assert_eq!(alerts[1].count, 1);
    }

    #[test]
    fn test_no_alerts_when_everything_ok() {
        let today = day(2025, 6, 15);
        let lots = vec![make_lot(100, day(2026, 6, 15))];
        assert!(alerts_for(&lots, today).is_empty());
    }

    #[test]
    fn test_alert_messages() {
        let alert = Alert {
            category: Status::Expired,
            severity: Severity::Error,
            count: 3,
        };
        assert_eq!(
            alert.to_string(),
            "3 vaccine lots have expired and need immediate attention."
        );
    }

    #[test]
    fn test_low_stock_ranked_sorts_and_truncates() {
        let far_out = day(2026, 6, 15);
        let lots = vec![
            make_lot(8, far_out),
            make_lot(3, far_out),
            make_lot(50, far_out), // above threshold, excluded
            make_lot(10, far_out),
            make_lot(1, far_out),
            make_lot(6, far_out),
            make_lot(2, far_out),
        ];

        let ranked = low_stock_ranked(&lots);
        assert_eq!(ranked.len(), LOW_STOCK_DISPLAY_LIMIT);
        let quantities: Vec<u32> = ranked.iter().map(|l| l.quantity_on_hand).collect();
        assert_eq!(quantities, vec![1, 2, 3, 6, 8]);
    }

    #[test]
    fn test_low_stock_ranked_stable_on_ties() {
        let far_out = day(2026, 6, 15);
        let mut first = make_lot(4, far_out);
        first.lot_number = "A".into();
        let mut second = make_lot(4, far_out);
        second.lot_number = "B".into();

        let lots = vec![first, second];
        let ranked = low_stock_ranked(&lots);
        assert_eq!(ranked[0].lot_number, "A");
        assert_eq!(ranked[1].lot_number, "B");
    }
}
