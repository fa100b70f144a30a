//! Monthly reporting and per-vaccine rollups.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, Status};
use crate::models::{AdministrationEvent, Lot, Vaccine};

/// Stock and usage summary for one reporting month.
///
/// `monthly_administered` is scoped to the month window; the remaining
/// fields are current-state counts over all lots, independent of the
/// reporting month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Total doses on hand across all lots
    pub total_inventory: u64,
    /// Number of lots in inventory
    pub total_lots: usize,
    /// Doses administered within the month window (inclusive)
    pub monthly_administered: u64,
    /// Lots currently classified as expiring soon
    pub expiring_soon: usize,
    /// Lots currently classified as expired
    pub expired: usize,
    /// Lots currently classified as low stock
    pub low_stock: usize,
}

/// Per-vaccine rollup row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaccineUsage {
    /// Commercial name of the vaccine
    pub vaccine_name: String,
    /// Lots of this vaccine in inventory
    pub lot_count: usize,
    /// Total doses on hand across those lots
    pub total_doses: u64,
    /// Lots classified as expiring soon
    pub expiring_soon: usize,
    /// Lots classified as expired
    pub expired: usize,
}

/// First and last day of a calendar month, or `None` for an invalid
/// year/month pair.
pub fn month_window(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next_month.pred_opt()?))
}

/// Compute the summary for one reporting month.
pub fn monthly_summary(
    lots: &[Lot],
    events: &[AdministrationEvent],
    month_start: NaiveDate,
    month_end: NaiveDate,
    today: NaiveDate,
) -> MonthlySummary {
    let monthly_administered = events
        .iter()
        .filter(|e| e.administration_date >= month_start && e.administration_date <= month_end)
        .map(|e| u64::from(e.doses_administered))
        .sum();

    let mut expiring_soon = 0;
    let mut expired = 0;
    let mut low_stock = 0;
    for lot in lots {
        match classify(lot, today) {
            Status::Expiring => expiring_soon += 1,
            Status::Expired => expired += 1,
            Status::LowStock => low_stock += 1,
            Status::Ok => {}
        }
    }

    MonthlySummary {
        total_inventory: lots.iter().map(|l| u64::from(l.quantity_on_hand)).sum(),
        total_lots: lots.len(),
        monthly_administered,
        expiring_soon,
        expired,
        low_stock,
    }
}

/// Group lots by vaccine commercial name.
///
/// Output rows appear in the order each vaccine is first seen in `lots`.
/// A lot contributes to at most one of `expiring_soon`/`expired`, using
/// the same first-match order as [`classify`]. Lots whose vaccine is
/// missing from the catalog snapshot are skipped.
pub fn vaccine_breakdown(vaccines: &[Vaccine], lots: &[Lot], today: NaiveDate) -> Vec<VaccineUsage> {
    let mut rows: Vec<VaccineUsage> = Vec::new();

    for lot in lots {
        let Some(vaccine) = vaccines.iter().find(|v| v.id == lot.vaccine_id) else {
            continue;
        };

        let idx = match rows
            .iter()
            .position(|r| r.vaccine_name == vaccine.commercial_name)
        {
            Some(idx) => idx,
            None => {
                rows.push(VaccineUsage {
                    vaccine_name: vaccine.commercial_name.clone(),
                    lot_count: 0,
                    total_doses: 0,
                    expiring_soon: 0,
                    expired: 0,
                });
                rows.len() - 1
            }
        };

        let row = &mut rows[idx];
        row.lot_count += 1;
        row.total_doses += u64::from(lot.quantity_on_hand);
        match classify(lot, today) {
            Status::Expired => row.expired += 1,
            Status::Expiring => row.expiring_soon += 1,
            Status::LowStock | Status::Ok => {}
        }
    }

    rows
}

/// A fully assembled monthly report, ready for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Reporting month, formatted `YYYY-MM`
    pub month: String,
    /// When the report was generated (caller-supplied)
    pub generated_at: DateTime<Utc>,
    pub summary: MonthlySummary,
    pub breakdown: Vec<VaccineUsage>,
}

impl MonthlyReport {
    /// Assemble a report for the month containing `month_start`.
    pub fn build(
        vaccines: &[Vaccine],
        lots: &[Lot],
        events: &[AdministrationEvent],
        month_start: NaiveDate,
        month_end: NaiveDate,
        today: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            month: format!("{:04}-{:02}", month_start.year(), month_start.month()),
            generated_at,
            summary: monthly_summary(lots, events, month_start, month_end, today),
            breakdown: vaccine_breakdown(vaccines, lots, today),
        }
    }

    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export the vaccine breakdown as CSV.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str("vaccine_name,lot_count,total_doses,expiring_soon,expired\n");
        for row in &self.breakdown {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                escape_csv(&row.vaccine_name),
                row.lot_count,
                row.total_doses,
                row.expiring_soon,
                row.expired,
            ));
        }
        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
