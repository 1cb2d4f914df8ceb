use crate::models::InventoryItem;
use crate::services::catalog::{normalize_code, Catalog};
use crate::utils::error::{Result, WarehouseError};
use std::sync::Arc;

/// An item selected for the move, not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedItem {
    /// The source inventory line
    pub item: InventoryItem,

    /// Quantity that will move
    pub quantity_to_move: u32,

    /// Serials recorded for this line
    pub scanned_serials: Vec<String>,
}

impl StagedItem {
    fn full(item: InventoryItem, serials: Vec<String>) -> Self {
        Self {
            quantity_to_move: item.quantity,
            item,
            scanned_serials: serials,
        }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Quantity held at the source
    pub fn available(&self) -> u32 {
        self.item.quantity
    }

    pub fn has_serials(&self) -> bool {
        !self.scanned_serials.is_empty()
    }
}

/// Result of a successful scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Blank input, nothing happened
    Ignored,

    /// A serial was recorded against its SKU
    SerialScanned { item_id: String, serial: String },

    /// A pallet or SKU was staged in full
    ItemStaged { item_id: String, kind: String },

    /// A batch was scanned; the caller must ask for a quantity
    QuantityRequired(InventoryItem),
}

/// Clamp raw quantity input to `[1, available]`
pub fn clamp_quantity(requested: u32, available: u32) -> u32 {
    requested.clamp(1, available.max(1))
}

/// Staging area for the unified picking screen
#[derive(Debug, Clone)]
pub struct PickingSession {
    catalog: Arc<Catalog>,
    source_locator: String,
    staged: Vec<StagedItem>,
}

impl PickingSession {
    pub fn new(catalog: Arc<Catalog>, source_locator: impl Into<String>) -> Self {
        Self {
            catalog,
            source_locator: normalize_code(&source_locator.into()),
            staged: Vec::new(),
        }
    }

    pub fn source_locator(&self) -> &str {
        &self.source_locator
    }

    pub fn source_inventory(&self) -> &[InventoryItem] {
        self.catalog.inventory_at(&self.source_locator)
    }

    pub fn staged(&self) -> &[StagedItem] {
        &self.staged
    }

    pub fn staged_item(&self, item_id: &str) -> Option<&StagedItem> {
        self.staged.iter().find(|s| s.id() == item_id)
    }

    fn staged_item_mut(&mut self, item_id: &str) -> Option<&mut StagedItem> {
        self.staged.iter_mut().find(|s| s.id() == item_id)
    }

    fn source_item(&self, item_id: &str) -> Option<InventoryItem> {
        self.source_inventory()
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
    }

    /// Sum of staged quantities
    pub fn total_picked(&self) -> u64 {
        self.staged.iter().map(|s| u64::from(s.quantity_to_move)).sum()
    }

    /// Confirming is only possible once something is picked
    pub fn can_confirm(&self) -> bool {
        self.total_picked() > 0
    }

    /// Handle a scanned code: serials first, then pallet/SKU/batch ids
    pub fn scan(&mut self, input: &str) -> Result<ScanOutcome> {
        let code = normalize_code(input);
        if code.is_empty() {
            return Ok(ScanOutcome::Ignored);
        }

        if let Some(serial) = self.catalog.find_serial(&code) {
            return self.scan_serial(&code, serial.id, &serial.sku_name);
        }

        let Some(item) = self
            .source_inventory()
            .iter()
            .find(|item| item.matches_code(&code))
            .cloned()
        else {
            tracing::warn!("Unknown code {} at {}", code, self.source_locator);
            return Err(WarehouseError::UnknownCode(code));
        };

        if self.staged_item(&item.id).is_some() {
            return Err(WarehouseError::AlreadyStaged {
                kind: item.kind.label().to_string(),
                code,
            });
        }

        if item.is_batch() {
            tracing::debug!("Batch {} needs a quantity", item.id);
            return Ok(ScanOutcome::QuantityRequired(item));
        }

        let serials = self.catalog.serials_of_item(&item);
        let outcome = ScanOutcome::ItemStaged {
            item_id: item.id.clone(),
            kind: item.kind.label().to_string(),
        };
        tracing::debug!("Staged {} {} in full", item.kind, item.id);
        self.staged.push(StagedItem::full(item, serials));
        Ok(outcome)
    }

    fn scan_serial(&mut self, code: &str, serial_id: String, sku_name: &str) -> Result<ScanOutcome> {
        let Some(parent) = self
            .source_inventory()
            .iter()
            .find(|item| item.name.as_deref() == Some(sku_name))
            .cloned()
        else {
            return Err(WarehouseError::SerialNotInLocator(code.to_string()));
        };

        match self.staged_item_mut(&parent.id) {
            Some(staged) => {
                if staged
                    .scanned_serials
                    .iter()
                    .any(|s| normalize_code(s) == code)
                {
                    return Err(WarehouseError::SerialAlreadyScanned(code.to_string()));
                }
                if staged.quantity_to_move >= staged.available() {
                    return Err(WarehouseError::QuantityExceeded {
                        item_id: parent.id,
                        available: staged.available(),
                    });
                }
                staged.quantity_to_move += 1;
                staged.scanned_serials.push(serial_id.clone());
            }
            None => {
                if parent.quantity == 0 {
                    return Err(WarehouseError::QuantityExceeded {
                        item_id: parent.id,
                        available: 0,
                    });
                }
                self.staged.push(StagedItem {
                    item: parent.clone(),
                    quantity_to_move: 1,
                    scanned_serials: vec![serial_id.clone()],
                });
            }
        }

        tracing::debug!("Serial {} recorded for {}", serial_id, parent.id);
        Ok(ScanOutcome::SerialScanned {
            item_id: parent.id,
            serial: serial_id,
        })
    }

    /// Stage every source item at full quantity, replacing the current staging
    pub fn pick_all(&mut self) -> Result<usize> {
        let inventory = self.source_inventory().to_vec();
        if inventory.is_empty() {
            return Err(WarehouseError::EmptyLocator(self.source_locator.clone()));
        }

        self.staged = inventory
            .into_iter()
            .map(|item| {
                let serials = self.catalog.serials_of_item(&item);
                StagedItem::full(item, serials)
            })
            .collect();

        tracing::debug!("Picked all {} items at {}", self.staged.len(), self.source_locator);
        Ok(self.staged.len())
    }

    /// Add a confirmed quantity of a source item (used for batches)
    pub fn add_quantity(&mut self, item_id: &str, quantity: u32) -> Result<u32> {
        let source = self
            .source_item(item_id)
            .ok_or_else(|| WarehouseError::UnknownCode(item_id.to_string()))?;

        if quantity == 0 || quantity > source.quantity {
            return Err(WarehouseError::InvalidQuantity {
                requested: quantity,
                available: source.quantity,
            });
        }

        let staged_quantity = match self.staged_item_mut(item_id) {
            Some(staged) => {
                staged.quantity_to_move = staged
                    .quantity_to_move
                    .saturating_add(quantity)
                    .min(staged.available());
                staged.quantity_to_move
            }
            None => {
                self.staged.push(StagedItem {
                    item: source,
                    quantity_to_move: quantity,
                    scanned_serials: Vec::new(),
                });
                quantity
            }
        };

        tracing::debug!("Staged {} of {}", quantity, item_id);
        Ok(staged_quantity)
    }

    /// Drop an item from the staging
    pub fn remove_item(&mut self, item_id: &str) -> Result<()> {
        let before = self.staged.len();
        self.staged.retain(|s| s.id() != item_id);
        if self.staged.len() == before {
            return Err(WarehouseError::ItemNotStaged(item_id.to_string()));
        }
        Ok(())
    }

    /// Remove one serial; returns `true` when the item left the staging
    pub fn remove_serial(&mut self, item_id: &str, serial: &str) -> Result<bool> {
        let staged = self
            .staged_item_mut(item_id)
            .ok_or_else(|| WarehouseError::ItemNotStaged(item_id.to_string()))?;

        staged.scanned_serials.retain(|s| s != serial);
        staged.quantity_to_move = staged.scanned_serials.len() as u32;

        if staged.quantity_to_move == 0 {
            self.staged.retain(|s| s.id() != item_id);
            tracing::debug!("Last serial removed, {} unstaged", item_id);
            return Ok(true);
        }
        Ok(false)
    }

    /// Serials of a staged item containing `query`, ignoring case
    pub fn filter_serials(&self, item_id: &str, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.staged_item(item_id)
            .map(|staged| {
                staged
                    .scanned_serials
                    .iter()
                    .filter(|s| s.to_lowercase().contains(&query))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Items that will move, with quantities replaced by staged quantities
    pub fn finalize(&self) -> Vec<InventoryItem> {
        self.staged
            .iter()
            .filter(|s| s.quantity_to_move > 0)
            .map(|s| InventoryItem {
                quantity: s.quantity_to_move,
                scanned_serials: if s.scanned_serials.is_empty() {
                    None
                } else {
                    Some(s.scanned_serials.clone())
                },
                ..s.item.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PickingSession {
        PickingSession::new(Arc::new(Catalog::builtin()), "a1-01")
    }

    #[test]
    fn test_source_is_normalized() {
        let s = session();
        assert_eq!(s.source_locator(), "A1-01");
        assert_eq!(s.source_inventory().len(), 5);
    }

    #[test]
    fn test_blank_scan_is_ignored() {
        let mut s = session();
        assert_eq!(s.scan("   ").unwrap(), ScanOutcome::Ignored);
        assert!(s.staged().is_empty());
    }

    #[test]
    fn test_scan_serial_stages_parent_with_one() {
        let mut s = session();
        let outcome = s.scan("sn-gs24-d4001").unwrap();
        assert_eq!(
            outcome,
            ScanOutcome::SerialScanned {
                item_id: "SKU-G-S24".to_string(),
                serial: "SN-GS24-D4001".to_string(),
            }
        );
        let staged = s.staged_item("SKU-G-S24").unwrap();
        assert_eq!(staged.quantity_to_move, 1);
        assert_eq!(staged.scanned_serials, vec!["SN-GS24-D4001"]);
    }

    #[test]
    fn test_scan_second_serial_increments() {
        let mut s = session();
        s.scan("SN-GS24-D4001").unwrap();
        s.scan("SN-GS24-D4002").unwrap();
        let staged = s.staged_item("SKU-G-S24").unwrap();
        assert_eq!(staged.quantity_to_move, 2);
        assert_eq!(staged.scanned_serials.len(), 2);
    }

    #[test]
    fn test_rescan_serial_rejected() {
        let mut s = session();
        s.scan("SN-GS24-D4001").unwrap();
        let err = s.scan("SN-GS24-D4001").unwrap_err();
        assert!(matches!(err, WarehouseError::SerialAlreadyScanned(_)));
        assert_eq!(s.total_picked(), 1);
    }

    #[test]
    fn test_serial_from_other_locator_rejected() {
        let mut s = session();
        let err = s.scan("SN-IP15-A1001").unwrap_err();
        assert!(matches!(err, WarehouseError::SerialNotInLocator(code) if code == "SN-IP15-A1001"));
    }

    #[test]
    fn test_scan_sku_stages_full_with_serials() {
        let mut s = session();
        s.scan("SKU-A-M3").unwrap();
        let staged = s.staged_item("SKU-A-M3").unwrap();
        assert_eq!(staged.quantity_to_move, 3);
        assert_eq!(staged.scanned_serials.len(), 3);

        // All serials already recorded by the full scan
        assert!(matches!(
            s.scan("SN-MBA3-B2001").unwrap_err(),
            WarehouseError::SerialAlreadyScanned(_)
        ));
    }

    #[test]
    fn test_scan_pallet_twice_rejected() {
        let mut s = session();
        assert_eq!(
            s.scan("PAL-001").unwrap(),
            ScanOutcome::ItemStaged {
                item_id: "PAL-001".to_string(),
                kind: "PALLET".to_string(),
            }
        );
        let err = s.scan("pal-001").unwrap_err();
        assert!(matches!(err, WarehouseError::AlreadyStaged { ref kind, .. } if kind == "PALLET"));
    }

    #[test]
    fn test_scan_batch_requires_quantity() {
        let mut s = session();
        match s.scan("BATCH-P-2025A").unwrap() {
            ScanOutcome::QuantityRequired(item) => assert_eq!(item.quantity, 100),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(s.staged().is_empty());

        assert_eq!(s.add_quantity("BATCH-P-2025A", 40).unwrap(), 40);
        assert_eq!(s.total_picked(), 40);
    }

    #[test]
    fn test_add_quantity_bounds() {
        let mut s = session();
        assert!(matches!(
            s.add_quantity("BATCH-P-2025A", 0).unwrap_err(),
            WarehouseError::InvalidQuantity { available: 100, .. }
        ));
        assert!(s.add_quantity("BATCH-P-2025A", 101).is_err());
        assert!(s.add_quantity("NOPE", 1).is_err());
    }

    #[test]
    fn test_add_quantity_accumulates_up_to_available() {
        let mut s = session();
        s.add_quantity("BATCH-P-2025A", 70).unwrap();
        assert_eq!(s.add_quantity("BATCH-P-2025A", 50).unwrap(), 100);
    }

    #[test]
    fn test_unknown_code() {
        let mut s = session();
        assert!(matches!(s.scan("XYZ").unwrap_err(), WarehouseError::UnknownCode(c) if c == "XYZ"));
        // Items at other locators are unknown here
        assert!(s.scan("PAL-007").is_err());
    }

    #[test]
    fn test_pick_all() {
        let mut s = session();
        s.scan("SN-GS24-D4001").unwrap();
        assert_eq!(s.pick_all().unwrap(), 5);
        assert_eq!(s.total_picked(), 10 + 5 + 100 + 3 + 5);
        assert_eq!(s.staged_item("SKU-G-S24").unwrap().scanned_serials.len(), 5);
        assert!(s.staged_item("PAL-001").unwrap().scanned_serials.is_empty());
    }

    #[test]
    fn test_pick_all_empty_locator() {
        let mut s = PickingSession::new(Arc::new(Catalog::builtin()), "C4-11");
        assert!(matches!(s.pick_all().unwrap_err(), WarehouseError::EmptyLocator(_)));
    }

    #[test]
    fn test_remove_serial_updates_quantity() {
        let mut s = session();
        s.scan("SKU-G-S24").unwrap();
        assert!(!s.remove_serial("SKU-G-S24", "SN-GS24-D4003").unwrap());
        let staged = s.staged_item("SKU-G-S24").unwrap();
        assert_eq!(staged.quantity_to_move, 4);
        assert!(!staged.scanned_serials.contains(&"SN-GS24-D4003".to_string()));
    }

    #[test]
    fn test_remove_last_serial_unstages() {
        let mut s = session();
        s.scan("SN-MBA3-B2002").unwrap();
        assert!(s.remove_serial("SKU-A-M3", "SN-MBA3-B2002").unwrap());
        assert!(s.staged().is_empty());
        assert!(!s.can_confirm());
    }

    #[test]
    fn test_remove_item() {
        let mut s = session();
        s.scan("PAL-002").unwrap();
        s.remove_item("PAL-002").unwrap();
        assert!(s.staged().is_empty());
        assert!(matches!(s.remove_item("PAL-002").unwrap_err(), WarehouseError::ItemNotStaged(_)));
    }

    #[test]
    fn test_filter_serials() {
        let mut s = session();
        s.scan("SKU-G-S24").unwrap();
        assert_eq!(s.filter_serials("SKU-G-S24", "d400").len(), 5);
        assert_eq!(s.filter_serials("SKU-G-S24", "4005"), vec!["SN-GS24-D4005"]);
        assert!(s.filter_serials("SKU-G-S24", "zzz").is_empty());
        assert!(s.filter_serials("PAL-001", "").is_empty());
    }

    #[test]
    fn test_finalize() {
        let mut s = session();
        s.scan("PAL-001").unwrap();
        s.scan("SN-GS24-D4004").unwrap();
        s.add_quantity("BATCH-P-2025A", 25).unwrap();

        let items = s.finalize();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].quantity, 10);
        assert_eq!(items[0].scanned_serials, None);
        assert_eq!(items[1].quantity, 1);
        assert_eq!(items[1].scanned_serials, Some(vec!["SN-GS24-D4004".to_string()]));
        assert_eq!(items[2].quantity, 25);
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0, 100), 1);
        assert_eq!(clamp_quantity(50, 100), 50);
        assert_eq!(clamp_quantity(500, 100), 100);
    }
}
