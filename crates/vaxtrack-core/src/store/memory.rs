//! In-memory record store.

use crate::models::{AdministrationEvent, Lot, Receipt, Vaccine};

use super::{StorageResult, Store};

/// Vec-backed store with storage-assigned sequential ids.
///
/// New records (id 0) get `max(id) + 1` within their table. Reads hand out
/// clones, so callers can never mutate stored records without going back
/// through a save.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    vaccines: Vec<Vaccine>,
    lots: Vec<Lot>,
    receipts: Vec<Receipt>,
    administration_events: Vec<AdministrationEvent>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing records (fixture data or a
    /// snapshot from elsewhere). Ids are taken as-is.
    pub fn with_records(
        vaccines: Vec<Vaccine>,
        lots: Vec<Lot>,
        administration_events: Vec<AdministrationEvent>,
    ) -> Self {
        Self {
            vaccines,
            lots,
            receipts: Vec::new(),
            administration_events,
        }
    }

    /// Add a catalog entry, assigning an id when unset.
    pub fn add_vaccine(&mut self, mut vaccine: Vaccine) -> Vaccine {
        if vaccine.id == 0 {
            vaccine.id = next_id(self.vaccines.iter().map(|v| v.id));
        }
        self.vaccines.push(vaccine.clone());
        vaccine
    }

    /// All persisted receipts, in insertion order.
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}

impl Store for MemoryStore {
    fn list_vaccines(&self) -> StorageResult<Vec<Vaccine>> {
        Ok(self.vaccines.clone())
    }

    fn list_lots(&self) -> StorageResult<Vec<Lot>> {
        Ok(self.lots.clone())
    }

    fn list_administration_events(&self) -> StorageResult<Vec<AdministrationEvent>> {
        Ok(self.administration_events.clone())
    }

    fn get_lot(&self, id: u32) -> StorageResult<Option<Lot>> {
        Ok(self.lots.iter().find(|l| l.id == id).cloned())
    }

    fn save_receipt(&mut self, mut receipt: Receipt) -> StorageResult<Receipt> {
        if receipt.id == 0 {
            receipt.id = next_id(self.receipts.iter().map(|r| r.id));
        }
        self.receipts.push(receipt.clone());
        Ok(receipt)
    }

    fn save_lot(&mut self, mut lot: Lot) -> StorageResult<Lot> {
        if lot.id == 0 {
            lot.id = next_id(self.lots.iter().map(|l| l.id));
            self.lots.push(lot.clone());
            return Ok(lot);
        }

        match self.lots.iter_mut().find(|l| l.id == lot.id) {
            Some(existing) => *existing = lot.clone(),
            None => self.lots.push(lot.clone()),
        }
        Ok(lot)
    }

    fn save_administration_event(
        &mut self,
        mut event: AdministrationEvent,
    ) -> StorageResult<AdministrationEvent> {
        if event.id == 0 {
            event.id = next_id(self.administration_events.iter().map(|e| e.id));
        }
        self.administration_events.push(event.clone());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_save_lot_assigns_sequential_ids() {
        let mut store = MemoryStore::new();

        let a = store
            .save_lot(Lot::new(1, "A".into(), date(2026, 1, 1), 10, date(2025, 1, 1)))
            .unwrap();
        let b = store
            .save_lot(Lot::new(1, "B".into(), date(2026, 1, 1), 10, date(2025, 1, 1)))
            .unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_save_lot_updates_by_id() {
        let mut store = MemoryStore::new();
        let mut lot = store
            .save_lot(Lot::new(1, "A".into(), date(2026, 1, 1), 10, date(2025, 1, 1)))
            .unwrap();

        lot.quantity_on_hand = 3;
        store.save_lot(lot.clone()).unwrap();

        let stored = store.get_lot(lot.id).unwrap().unwrap();
        assert_eq!(stored.quantity_on_hand, 3);
        assert_eq!(store.list_lots().unwrap().len(), 1);
    }

    #[test]
    fn test_id_assignment_skips_seeded_ids() {
        let seeded = Lot {
            id: 7,
            vaccine_id: 1,
            lot_number: "SEED".into(),
            expiration_date: date(2026, 1, 1),
            quantity_on_hand: 10,
            received_date: date(2025, 1, 1),
        };
        let mut store = MemoryStore::with_records(Vec::new(), vec![seeded], Vec::new());

        let fresh = store
            .save_lot(Lot::new(1, "NEW".into(), date(2026, 1, 1), 10, date(2025, 1, 1)))
            .unwrap();
        assert_eq!(fresh.id, 8);
    }

    #[test]
    fn test_reads_are_snapshots() {
        let mut store = MemoryStore::new();
        store
            .save_lot(Lot::new(1, "A".into(), date(2026, 1, 1), 10, date(2025, 1, 1)))
            .unwrap();

        let mut snapshot = store.list_lots().unwrap();
        snapshot[0].quantity_on_hand = 0;

        assert_eq!(store.get_lot(1).unwrap().unwrap().quantity_on_hand, 10);
    }
}
