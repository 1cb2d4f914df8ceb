//! Integration tests for the picking session
//!
//! These tests stage goods at the built-in source locator the way an
//! operator would: scanning serials, whole items and batch quantities.

use std::sync::Arc;
use warehouse_move::models::InventoryItem;
use warehouse_move::services::catalog::Catalog;
use warehouse_move::services::picking_service::{clamp_quantity, PickingSession, ScanOutcome};
use warehouse_move::utils::error::WarehouseError;

/// Helper to open a picking session at A1-01
fn create_session() -> PickingSession {
    PickingSession::new(Arc::new(Catalog::builtin()), "A1-01")
}

// =============================================================================
// Serial Scanning Integration Tests
// =============================================================================

#[test]
fn test_serials_accumulate_on_parent_sku() {
    let mut session = create_session();

    for serial in ["SN-GS24-D4001", "sn-gs24-d4002", " SN-GS24-D4003 "] {
        let outcome = session.scan(serial).expect("Serial should be accepted");
        assert!(matches!(outcome, ScanOutcome::SerialScanned { ref item_id, .. } if item_id == "SKU-G-S24"));
    }

    let staged = session.staged_item("SKU-G-S24").expect("SKU should be staged");
    assert_eq!(staged.quantity_to_move, 3);
    assert_eq!(
        staged.scanned_serials,
        vec!["SN-GS24-D4001", "SN-GS24-D4002", "SN-GS24-D4003"]
    );
    assert_eq!(session.total_picked(), 3);
}

#[test]
fn test_serial_rescan_is_rejected() {
    let mut session = create_session();
    session.scan("SN-GS24-D4001").unwrap();

    let err = session.scan("SN-GS24-D4001").unwrap_err();
    assert!(matches!(err, WarehouseError::SerialAlreadyScanned(_)));
    assert_eq!(session.total_picked(), 1);
}

#[test]
fn test_serial_of_sku_elsewhere_is_rejected() {
    let mut session = create_session();

    // iPhone serials exist, but no iPhone is stored at A1-01
    let err = session.scan("SN-IP15-A1001").unwrap_err();
    assert!(matches!(err, WarehouseError::SerialNotInLocator(code) if code == "SN-IP15-A1001"));
    assert!(session.staged().is_empty());
}

#[test]
fn test_serial_removal_down_to_nothing() {
    let mut session = create_session();
    session.scan("SN-MBA3-B2001").unwrap();
    session.scan("SN-MBA3-B2002").unwrap();

    assert!(!session.remove_serial("SKU-A-M3", "SN-MBA3-B2001").unwrap());
    assert_eq!(session.staged_item("SKU-A-M3").unwrap().quantity_to_move, 1);

    assert!(session.remove_serial("SKU-A-M3", "SN-MBA3-B2002").unwrap());
    assert!(session.staged_item("SKU-A-M3").is_none());
    assert!(!session.can_confirm());
}

// =============================================================================
// Item and Batch Integration Tests
// =============================================================================

#[test]
fn test_pallet_and_sku_stage_in_full() {
    let mut session = create_session();

    session.scan("pal-001").unwrap();
    session.scan("SKU-A-M3").unwrap();

    assert_eq!(session.staged_item("PAL-001").unwrap().quantity_to_move, 10);
    let macbook = session.staged_item("SKU-A-M3").unwrap();
    assert_eq!(macbook.quantity_to_move, 3);
    assert_eq!(macbook.scanned_serials.len(), 3);

    let err = session.scan("PAL-001").unwrap_err();
    assert!(matches!(err, WarehouseError::AlreadyStaged { ref kind, .. } if kind == "PALLET"));
}

#[test]
fn test_batch_requires_quantity() {
    let mut session = create_session();

    let outcome = session.scan("BATCH-P-2025A").unwrap();
    let ScanOutcome::QuantityRequired(item) = outcome else {
        panic!("Batch scan should ask for a quantity");
    };
    assert_eq!(item.quantity, 100);
    assert!(session.staged().is_empty());

    assert_eq!(session.add_quantity(&item.id, clamp_quantity(250, item.quantity)).unwrap(), 100);
    assert_eq!(session.total_picked(), 100);
}

#[test]
fn test_batch_quantity_out_of_range() {
    let mut session = create_session();

    assert!(matches!(
        session.add_quantity("BATCH-P-2025A", 0).unwrap_err(),
        WarehouseError::InvalidQuantity { available: 100, .. }
    ));
    assert!(matches!(
        session.add_quantity("BATCH-P-2025A", 101).unwrap_err(),
        WarehouseError::InvalidQuantity { requested: 101, .. }
    ));
    assert!(session.staged().is_empty());
}

#[test]
fn test_unknown_code_is_rejected() {
    let mut session = create_session();
    assert!(matches!(
        session.scan("PAL-007").unwrap_err(),
        WarehouseError::UnknownCode(code) if code == "PAL-007"
    ));
    assert!(matches!(session.scan("   ").unwrap(), ScanOutcome::Ignored));
}

// =============================================================================
// Pick All and Finalize Integration Tests
// =============================================================================

#[test]
fn test_pick_all_replaces_staging() {
    let mut session = create_session();
    session.scan("SN-GS24-D4001").unwrap();

    assert_eq!(session.pick_all().unwrap(), 5);
    assert_eq!(session.total_picked(), 123);
    assert_eq!(session.staged_item("SKU-G-S24").unwrap().quantity_to_move, 5);
}

#[test]
fn test_pick_all_on_empty_locator() {
    let mut session = PickingSession::new(Arc::new(Catalog::builtin()), "C4-11");
    assert!(matches!(
        session.pick_all().unwrap_err(),
        WarehouseError::EmptyLocator(_)
    ));
}

#[test]
fn test_finalize_carries_staged_quantities() {
    let mut session = create_session();
    session.scan("SN-GS24-D4002").unwrap();
    session.add_quantity("BATCH-P-2025A", 30).unwrap();

    let items = session.finalize();
    assert_eq!(items.len(), 2);

    let phone = items.iter().find(|i| i.id == "SKU-G-S24").unwrap();
    assert_eq!(phone.quantity, 1);
    assert_eq!(phone.scanned_serials.as_deref(), Some(&["SN-GS24-D4002".to_string()][..]));

    let batch = items.iter().find(|i| i.id == "BATCH-P-2025A").unwrap();
    assert_eq!(batch.quantity, 30);
    assert_eq!(batch.scanned_serials, None);
}

// =============================================================================
// Large Quantity and Code Matching Integration Tests
// =============================================================================

const BULK_FIXTURE: &str = r#"
[locators."Z1-01"]
zone = "Z"
capacity = 0
conditions = "Bulk"

[[inventory."Z1-01"]]
id = "BATCH-BIG"
type = "BATCH"
name = "Rice"
quantity = 4000000000
batch_id = "R-1"
exp = "12/2030"

[[inventory."Z1-01"]]
id = "PAL-BIG"
type = "PALLET"
quantity = 4000000000

[[inventory."Z1-01"]]
id = "sku-café"
type = "SKU"
name = "Café Blend"
quantity = 2

[serials]
"Café Blend" = ["sn-café-1"]
"#;

fn create_bulk_session() -> PickingSession {
    let catalog = Catalog::from_toml_str(BULK_FIXTURE).expect("Fixture should parse");
    PickingSession::new(Arc::new(catalog), "Z1-01")
}

#[test]
fn test_batch_quantities_cap_at_available_near_u32_max() {
    let mut session = create_bulk_session();

    assert_eq!(session.add_quantity("BATCH-BIG", 3_000_000_000).unwrap(), 3_000_000_000);
    assert_eq!(session.add_quantity("BATCH-BIG", 3_000_000_000).unwrap(), 4_000_000_000);
    assert_eq!(session.total_picked(), 4_000_000_000);
}

#[test]
fn test_totals_do_not_overflow() {
    let mut session = create_bulk_session();
    session.pick_all().unwrap();
    assert_eq!(session.total_picked(), 8_000_000_002);

    let items = session.finalize();
    let total: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
    assert_eq!(total, 8_000_000_002);
    assert!(items.iter().any(|i: &InventoryItem| i.id == "PAL-BIG"));
}

#[test]
fn test_non_ascii_codes_match_after_normalizing() {
    let mut session = create_bulk_session();

    assert!(matches!(
        session.scan("SN-CAFÉ-1").unwrap(),
        ScanOutcome::SerialScanned { ref item_id, .. } if item_id == "sku-café"
    ));
    assert!(matches!(
        session.scan("sn-café-1").unwrap_err(),
        WarehouseError::SerialAlreadyScanned(_)
    ));

    session.remove_item("sku-café").unwrap();
    assert!(matches!(
        session.scan("Sku-Café").unwrap(),
        ScanOutcome::ItemStaged { ref item_id, .. } if item_id == "sku-café"
    ));
}
