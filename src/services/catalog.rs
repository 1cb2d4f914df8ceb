use crate::models::{InventoryItem, LocatorInfo, Serial};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory inventory dataset the scanner works against
///
/// Keys are stored upper-cased so lookups can normalize scanned codes once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Locator code -> inventory lines held there
    #[serde(default)]
    inventory: BTreeMap<String, Vec<InventoryItem>>,

    /// SKU name -> registered serial ids
    #[serde(default)]
    serials: BTreeMap<String, Vec<String>>,

    /// Locator code -> static metadata
    #[serde(default)]
    locators: BTreeMap<String, LocatorInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(mut self, locator: &str, items: Vec<InventoryItem>) -> Self {
        self.inventory.insert(locator.to_uppercase(), items);
        self
    }

    pub fn with_serials<I, S>(mut self, sku_name: impl Into<String>, serials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.serials
            .insert(sku_name.into(), serials.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_locator(mut self, code: &str, info: LocatorInfo) -> Self {
        self.locators.insert(code.to_uppercase(), info);
        self
    }

    /// The fixture shipped with the handheld prototype
    pub fn builtin() -> Self {
        Self::new()
            .with_inventory(
                "A1-01",
                vec![
                    InventoryItem::pallet("PAL-001", 10, "10 Boxes", 1),
                    InventoryItem::sku("SKU-G-S24", "Galaxy S24", 5, "Loose items"),
                    InventoryItem::batch("BATCH-P-2025A", "Panadol 500mg", 100, "2025A", "12/2025"),
                    InventoryItem::sku("SKU-A-M3", "Macbook Air M3", 3, "Loose items"),
                    InventoryItem::pallet("PAL-002", 5, "5 units", 1),
                ],
            )
            .with_inventory("B2-03", vec![InventoryItem::pallet("PAL-007", 20, "20 units", 1)])
            .with_serials("iPhone 15 Pro", serial_range("SN-IP15-A", 1001, 10))
            .with_serials("Macbook Air M3", serial_range("SN-MBA3-B", 2001, 3))
            .with_serials("Dell XPS 15", serial_range("SN-DXPS-C", 3001, 5))
            .with_serials("Galaxy S24", serial_range("SN-GS24-D", 4001, 5))
            .with_locator("B2-03", LocatorInfo::new("B", 50, "Ambient Temperature", true))
            .with_locator("C4-11", LocatorInfo::new("C", 10, "Cold Storage", true))
            // A source cannot also be its own destination
            .with_locator("A1-01", LocatorInfo::new("A", 0, "Ambient Temperature", false))
            .with_locator("ERR-01", LocatorInfo::new("N/A", 0, "N/A", false))
    }

    /// Parse a fixture from TOML text
    pub fn from_toml_str(content: &str) -> crate::utils::error::Result<Self> {
        let raw: Catalog = toml::from_str(content)?;
        Ok(raw.normalized())
    }

    fn normalized(self) -> Self {
        Self {
            inventory: self
                .inventory
                .into_iter()
                .map(|(code, items)| (code.to_uppercase(), items))
                .collect(),
            serials: self.serials,
            locators: self
                .locators
                .into_iter()
                .map(|(code, info)| (code.to_uppercase(), info))
                .collect(),
        }
    }

    /// Inventory at a locator; unknown locators hold nothing
    pub fn inventory_at(&self, locator: &str) -> &[InventoryItem] {
        self.inventory
            .get(&locator.to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn locator(&self, code: &str) -> Option<&LocatorInfo> {
        self.locators.get(&code.to_uppercase())
    }

    /// All locator metadata, ordered by code
    pub fn locators(&self) -> impl Iterator<Item = (&str, &LocatorInfo)> {
        self.locators.iter().map(|(code, info)| (code.as_str(), info))
    }

    /// Serial ids registered for a SKU name
    pub fn serials_for(&self, sku_name: &str) -> &[String] {
        self.serials.get(sku_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a serial across every SKU, ignoring case
    pub fn find_serial(&self, code: &str) -> Option<Serial> {
        let code = normalize_code(code);
        self.serials.iter().find_map(|(sku_name, ids)| {
            ids.iter()
                .find(|id| normalize_code(id) == code)
                .map(|id| Serial::new(id.clone(), sku_name.clone()))
        })
    }

    /// Find a pallet anywhere in the warehouse, returning it with its locator
    pub fn find_pallet(&self, code: &str) -> Option<(&InventoryItem, &str)> {
        self.inventory.iter().find_map(|(locator, items)| {
            items
                .iter()
                .find(|item| item.is_pallet() && item.matches_code(code))
                .map(|item| (item, locator.as_str()))
        })
    }

    /// Serials a fully-staged SKU carries along
    pub fn serials_of_item(&self, item: &InventoryItem) -> Vec<String> {
        match (&item.name, item.is_sku()) {
            (Some(name), true) => self.serials_for(name).to_vec(),
            _ => Vec::new(),
        }
    }
}

/// Scanner input is trimmed and upper-cased before any lookup
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

fn serial_range(prefix: &str, start: u32, count: u32) -> Vec<String> {
    (start..start + count)
        .map(|n| format!("{}{}", prefix, n))
        .collect()
}
