use crate::models::{InventoryItem, MoveMode, MoveTransaction};
use crate::services::catalog::Catalog;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Acting user when none is configured
pub const DEFAULT_OPERATOR: &str = "user@example.com";

/// Full when the move takes every source line at its full quantity
pub fn determine_mode(source_inventory: &[InventoryItem], items_to_move: &[InventoryItem]) -> MoveMode {
    let is_full = !source_inventory.is_empty()
        && items_to_move.len() == source_inventory.len()
        && items_to_move.iter().all(|moved| {
            source_inventory
                .iter()
                .find(|source| source.id == moved.id)
                .is_some_and(|source| source.quantity == moved.quantity)
        });

    if is_full {
        MoveMode::Full
    } else {
        MoveMode::Partial
    }
}

/// Builds move transactions for the confirmation screen
pub struct MoveService<'a> {
    catalog: &'a Catalog,
    operator: String,
}

impl<'a> MoveService<'a> {
    pub fn new(catalog: &'a Catalog, operator: impl Into<String>) -> Self {
        Self {
            catalog,
            operator: operator.into(),
        }
    }

    pub fn build_transaction(
        &self,
        source_locator: &str,
        destination_locator: &str,
        items_to_move: Vec<InventoryItem>,
    ) -> MoveTransaction {
        self.build_transaction_at(source_locator, destination_locator, items_to_move, Utc::now())
    }

    /// Same as `build_transaction` with an explicit clock reading
    pub fn build_transaction_at(
        &self,
        source_locator: &str,
        destination_locator: &str,
        items_to_move: Vec<InventoryItem>,
        timestamp: DateTime<Utc>,
    ) -> MoveTransaction {
        let mode = determine_mode(self.catalog.inventory_at(source_locator), &items_to_move);

        let transaction = MoveTransaction {
            id: Uuid::new_v4(),
            source_locator: source_locator.to_string(),
            destination_locator: destination_locator.to_string(),
            items_to_move,
            user: self.operator.clone(),
            timestamp,
            mode,
        };

        tracing::info!(
            "Move {} {} -> {}: {} units ({})",
            transaction.id,
            transaction.source_locator,
            transaction.destination_locator,
            transaction.total_quantity(),
            transaction.mode
        );
        transaction
    }
}
