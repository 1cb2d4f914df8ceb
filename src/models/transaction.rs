use super::InventoryItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Whether a move empties the source locator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveMode {
    Full,
    Partial,
}

impl fmt::Display for MoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("FULL"),
            Self::Partial => f.write_str("PARTIAL"),
        }
    }
}

/// A confirmed move, built once at confirmation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveTransaction {
    pub id: Uuid,

    pub source_locator: String,

    /// Locator code, or `PALLET(LOCATOR)` when moved onto a pallet
    pub destination_locator: String,

    pub items_to_move: Vec<InventoryItem>,

    /// Acting user
    pub user: String,

    pub timestamp: DateTime<Utc>,

    pub mode: MoveMode,
}

impl MoveTransaction {
    /// Sum of moved quantities across all lines
    pub fn total_quantity(&self) -> u64 {
        self.items_to_move.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Local-time rendering used on the result screen
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
