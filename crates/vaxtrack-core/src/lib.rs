//! VaxTrack Core Library
//!
//! Vaccine stock management core: lot-level inventory tracking, shipment
//! receiving with inspection splits, dose administration, and monthly
//! reporting.
//!
//! # Architecture
//!
//! ```text
//! Presentation Layer (external)
//!         │ user input, coerced to domain types
//!         ▼
//! ┌───────────────────────┐     ┌──────────────────────┐
//! │  Inventory Operations │────▶│  Storage Collaborator│
//! │  (validate + mutate)  │     │  (Store trait)       │
//! └───────────┬───────────┘     └──────────┬───────────┘
//!             │                            │ read-only snapshots
//!             ▼                            ▼
//! ┌───────────────────────┐     ┌──────────────────────┐
//! │ Classification Engine │◀────│   Report Aggregator  │
//! │ (status, alerts)      │     │ (monthly rollups)    │
//! └───────────────────────┘     └──────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **No hidden clocks.** Every time-sensitive function takes an explicit
//! `today`, so expiration-window logic is deterministic and testable
//! without mocking global time.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Vaccine, Lot, Receipt, AdministrationEvent)
//! - [`classify`]: Lot status classification, alerts, low-stock ranking
//! - [`ops`]: Validated inventory state transitions
//! - [`report`]: Monthly summaries, per-vaccine rollups, report export
//! - [`query`]: Read-side lot filtering and search
//! - [`store`]: Storage collaborator trait and in-memory implementation

pub mod classify;
pub mod error;
pub mod models;
pub mod ops;
pub mod query;
pub mod report;
pub mod store;

// Re-export commonly used types
pub use classify::{
    alerts_for, classify, days_to_expiry, low_stock_ranked, Alert, Severity, Status,
    EXPIRING_WINDOW_DAYS, LOW_STOCK_DISPLAY_LIMIT, LOW_STOCK_THRESHOLD,
};
pub use error::{InventoryError, InventoryResult};
pub use models::{AdministrationEvent, Lot, Receipt, Vaccine};
pub use ops::{Inventory, NewShipment};
pub use report::{
    month_window, monthly_summary, vaccine_breakdown, MonthlyReport, MonthlySummary, VaccineUsage,
};
pub use store::{MemoryStore, StorageError, Store};
