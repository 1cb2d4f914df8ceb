use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of inventory unit stored at a locator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// A pallet scanned as a single unit
    Pallet {
        #[serde(default = "default_sku_count")]
        sku_count: u32,
    },
    /// Loose product, optionally serialized
    Sku,
    /// Lot-tracked goods with an expiry date
    Batch { batch_id: String, exp: String },
}

fn default_sku_count() -> u32 {
    1
}

impl ItemKind {
    /// Short uppercase label used on screens and in feedback
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pallet { .. } => "PALLET",
            Self::Sku => "SKU",
            Self::Batch { .. } => "BATCH",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An inventory line at a locator, or a line staged for a move
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryItem {
    /// Scan code (pallet, SKU or batch id)
    pub id: String,

    #[serde(flatten)]
    pub kind: ItemKind,

    /// Product name, absent for pallets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub quantity: u32,

    /// Free-text details ("10 Boxes", "Loose items")
    #[serde(default)]
    pub details: String,

    /// Serials scanned while staging, only set on moved items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanned_serials: Option<Vec<String>>,
}

impl InventoryItem {
    pub fn pallet(id: impl Into<String>, quantity: u32, details: impl Into<String>, sku_count: u32) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Pallet { sku_count },
            name: None,
            quantity,
            details: details.into(),
            scanned_serials: None,
        }
    }

    pub fn sku(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Sku,
            name: Some(name.into()),
            quantity,
            details: details.into(),
            scanned_serials: None,
        }
    }

    pub fn batch(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        batch_id: impl Into<String>,
        exp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Batch {
                batch_id: batch_id.into(),
                exp: exp.into(),
            },
            name: Some(name.into()),
            quantity,
            details: String::new(),
            scanned_serials: None,
        }
    }

    /// Name shown on screens, falling back to the scan code
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn is_pallet(&self) -> bool {
        matches!(self.kind, ItemKind::Pallet { .. })
    }

    pub fn is_sku(&self) -> bool {
        matches!(self.kind, ItemKind::Sku)
    }

    pub fn is_batch(&self) -> bool {
        matches!(self.kind, ItemKind::Batch { .. })
    }

    /// Match against a scanned code, both sides upper-cased
    pub fn matches_code(&self, code: &str) -> bool {
        self.id.to_uppercase() == code.to_uppercase()
    }
}
