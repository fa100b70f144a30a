//! Inventory operations.
//!
//! Validated state transitions over lot records: receiving a shipment
//! (with the inspection pass/fail split), recording administered doses,
//! and manual quantity corrections. Every operation validates its inputs
//! in full before asking storage to persist anything.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{InventoryError, InventoryResult};
use crate::models::{AdministrationEvent, Lot, Receipt, Vaccine};
use crate::store::{StorageError, Store};

/// A shipment being received, as entered by the caller.
///
/// `doses_failed_inspection` is never supplied; it is derived as
/// `quantity_received - doses_passed_inspection`.
#[derive(Debug, Clone)]
pub struct NewShipment {
    pub vaccine_id: u32,
    pub lot_number: String,
    pub quantity_sent: u32,
    pub quantity_received: u32,
    pub doses_passed_inspection: u32,
    pub expiration_date: NaiveDate,
    pub received_date: NaiveDate,
    /// Required when sent and received quantities differ
    pub discrepancy_reason: Option<String>,
}

/// Inventory operations over a storage collaborator.
///
/// The store sits behind a single mutex, so every read-modify-write is
/// serialized; in particular two operations targeting the same lot apply
/// in the order they acquire the lock, which closes the lost-update gap
/// for `quantity_on_hand`.
pub struct Inventory<S: Store> {
    store: Mutex<S>,
}

impl<S: Store> Inventory<S> {
    /// Wrap a storage collaborator.
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Consume the wrapper and hand the store back.
    pub fn into_store(self) -> Result<S, StorageError> {
        self.store
            .into_inner()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }

    fn store(&self) -> Result<MutexGuard<'_, S>, StorageError> {
        self.store
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }

    /// Receive a shipment: persist the receipt, then stock a new lot with
    /// the doses that passed inspection.
    ///
    /// The two writes are one logical unit. If the lot write fails after
    /// the receipt write succeeded, the error propagates and the receipt
    /// is left behind for the caller to reconcile; it must not be treated
    /// as final.
    pub fn receive_shipment(&self, shipment: NewShipment) -> InventoryResult<Lot> {
        if shipment.quantity_sent < 1 {
            return Err(InventoryError::validation(
                "quantity_sent",
                "must be at least 1",
            ));
        }
        if shipment.quantity_received > shipment.quantity_sent {
            return Err(InventoryError::validation(
                "quantity_received",
                format!(
                    "cannot exceed quantity sent ({} > {})",
                    shipment.quantity_received, shipment.quantity_sent
                ),
            ));
        }
        if shipment.doses_passed_inspection > shipment.quantity_received {
            return Err(InventoryError::validation(
                "doses_passed_inspection",
                format!(
                    "cannot exceed quantity received ({} > {})",
                    shipment.doses_passed_inspection, shipment.quantity_received
                ),
            ));
        }
        if shipment.expiration_date <= shipment.received_date {
            return Err(InventoryError::validation(
                "expiration_date",
                "must be after the received date",
            ));
        }

        let discrepancy_reason = shipment
            .discrepancy_reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_owned);
        if shipment.quantity_sent != shipment.quantity_received && discrepancy_reason.is_none() {
            return Err(InventoryError::validation(
                "discrepancy_reason",
                "required when sent and received quantities differ",
            ));
        }

        let doses_failed_inspection = shipment.quantity_received - shipment.doses_passed_inspection;

        let mut store = self.store()?;
        if !store
            .list_vaccines()?
            .iter()
            .any(|v| v.id == shipment.vaccine_id)
        {
            return Err(InventoryError::NotFound {
                entity: "vaccine",
                id: shipment.vaccine_id,
            });
        }

        let receipt = store.save_receipt(Receipt {
            id: 0,
            vaccine_id: shipment.vaccine_id,
            lot_number: shipment.lot_number.clone(),
            quantity_sent: shipment.quantity_sent,
            quantity_received: shipment.quantity_received,
            doses_passed_inspection: shipment.doses_passed_inspection,
            doses_failed_inspection,
            discrepancy_reason,
            received_date: shipment.received_date,
        })?;

        let lot = store
            .save_lot(Lot::new(
                shipment.vaccine_id,
                shipment.lot_number,
                shipment.expiration_date,
                shipment.doses_passed_inspection,
                shipment.received_date,
            ))
            .map_err(|e| {
                warn!(
                    receipt_id = receipt.id,
                    "lot write failed after receipt write; receipt needs reconciliation"
                );
                e
            })?;

        debug!(
            lot_id = lot.id,
            receipt_id = receipt.id,
            stocked = lot.quantity_on_hand,
            failed_inspection = doses_failed_inspection,
            "shipment received"
        );
        Ok(lot)
    }

    /// Record doses given to patients, decrementing the lot they were
    /// drawn from.
    pub fn record_administration(
        &self,
        lot_id: u32,
        doses_administered: u32,
        administration_date: NaiveDate,
    ) -> InventoryResult<Lot> {
        if doses_administered < 1 {
            return Err(InventoryError::validation(
                "doses_administered",
                "must be at least 1",
            ));
        }

        let mut store = self.store()?;
        let mut lot = store
            .get_lot(lot_id)?
            .ok_or_else(|| InventoryError::lot_not_found(lot_id))?;

        if doses_administered > lot.quantity_on_hand {
            return Err(InventoryError::validation(
                "doses_administered",
                format!(
                    "cannot exceed doses on hand ({} > {})",
                    doses_administered, lot.quantity_on_hand
                ),
            ));
        }

        let event = store.save_administration_event(AdministrationEvent::new(
            lot_id,
            doses_administered,
            administration_date,
        ))?;

        lot.quantity_on_hand -= doses_administered;
        let lot = store.save_lot(lot)?;

        debug!(
            lot_id,
            event_id = event.id,
            doses_administered,
            remaining = lot.quantity_on_hand,
            "administration recorded"
        );
        Ok(lot)
    }

    /// Overwrite a lot's doses on hand (manual stock correction).
    pub fn adjust_quantity(&self, lot_id: u32, new_quantity: u32) -> InventoryResult<Lot> {
        let mut store = self.store()?;
        let mut lot = store
            .get_lot(lot_id)?
            .ok_or_else(|| InventoryError::lot_not_found(lot_id))?;

        let previous = lot.quantity_on_hand;
        lot.quantity_on_hand = new_quantity;
        let lot = store.save_lot(lot)?;

        debug!(lot_id, previous, new_quantity, "quantity adjusted");
        Ok(lot)
    }

    /// Look up a single lot.
    pub fn lot(&self, lot_id: u32) -> InventoryResult<Lot> {
        self.store()?
            .get_lot(lot_id)?
            .ok_or_else(|| InventoryError::lot_not_found(lot_id))
    }

    /// Snapshot of the vaccine catalog.
    pub fn vaccines(&self) -> InventoryResult<Vec<Vaccine>> {
        Ok(self.store()?.list_vaccines()?)
    }

    /// Snapshot of all lots.
    pub fn lots(&self) -> InventoryResult<Vec<Lot>> {
        Ok(self.store()?.list_lots()?)
    }

    /// Snapshot of all administration events.
    pub fn administration_events(&self) -> InventoryResult<Vec<AdministrationEvent>> {
        Ok(self.store()?.list_administration_events()?)
    }
}
