use serde::{Deserialize, Serialize};

/// A serial number registered for a SKU
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Serial {
    pub id: String,
    pub sku_name: String,
}

impl Serial {
    pub fn new(id: impl Into<String>, sku_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sku_name: sku_name.into(),
        }
    }
}
