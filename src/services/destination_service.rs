use crate::models::{InventoryItem, LocatorInfo};
use crate::services::catalog::{normalize_code, Catalog};
use crate::utils::error::{Result, WarehouseError};
use rust_i18n::t;

/// Why a destination cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The scanned code is the source locator
    SameAsSource,
    /// Not a pallet and not a locator open for moves
    UnknownOrInvalid,
}

impl InvalidReason {
    pub fn message(&self) -> String {
        match self {
            Self::SameAsSource => t!("destination.same_as_source").to_string(),
            Self::UnknownOrInvalid => t!("destination.unknown").to_string(),
        }
    }
}

/// Classification of a scanned destination code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationState {
    /// Nothing scanned yet
    Empty,

    /// A pallet somewhere in the warehouse; goods go onto it
    Pallet {
        pallet: InventoryItem,
        locator: String,
        /// Everything stored at the pallet's locator
        contents: Vec<InventoryItem>,
    },

    /// A valid locator that already holds goods
    Occupied {
        code: String,
        info: LocatorInfo,
        inventory: Vec<InventoryItem>,
    },

    /// A valid, empty locator
    Free { code: String, info: LocatorInfo },

    Invalid { code: String, reason: InvalidReason },
}

impl DestinationState {
    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            Self::Pallet { .. } | Self::Occupied { .. } | Self::Free { .. }
        )
    }

    /// Occupied locators are confirmable but shown with a warning
    pub fn needs_warning(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }

    /// Goods worth previewing before confirming, if any
    pub fn preview(&self) -> Option<&[InventoryItem]> {
        match self {
            Self::Occupied { inventory, .. } => Some(inventory.as_slice()),
            Self::Pallet { contents, .. } => Some(contents.as_slice()),
            _ => None,
        }
    }

    /// Destination recorded on the transaction
    pub fn resolve(&self) -> Result<String> {
        match self {
            Self::Pallet { pallet, locator, .. } => Ok(format!("{}({})", pallet.id, locator)),
            Self::Occupied { code, .. } | Self::Free { code, .. } => Ok(code.clone()),
            Self::Invalid { code, reason } => Err(WarehouseError::InvalidDestination {
                code: code.clone(),
                reason: reason.message(),
            }),
            Self::Empty => Err(WarehouseError::InvalidDestination {
                code: String::new(),
                reason: t!("destination.empty").to_string(),
            }),
        }
    }
}

/// Classifies destination scans against the catalog
pub struct DestinationService<'a> {
    catalog: &'a Catalog,
}

impl<'a> DestinationService<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Pallets take precedence, then the source check, then locator metadata
    pub fn classify(&self, input: &str, source_locator: &str) -> DestinationState {
        let code = normalize_code(input);
        if code.is_empty() {
            return DestinationState::Empty;
        }

        if let Some((pallet, locator)) = self.catalog.find_pallet(&code) {
            return DestinationState::Pallet {
                pallet: pallet.clone(),
                locator: locator.to_string(),
                contents: self.catalog.inventory_at(locator).to_vec(),
            };
        }

        if code == normalize_code(source_locator) {
            tracing::warn!("Destination {} equals the source", code);
            return DestinationState::Invalid {
                code,
                reason: InvalidReason::SameAsSource,
            };
        }

        match self.catalog.locator(&code) {
            Some(info) if info.valid => {
                let inventory = self.catalog.inventory_at(&code).to_vec();
                if inventory.is_empty() {
                    DestinationState::Free {
                        code,
                        info: info.clone(),
                    }
                } else {
                    DestinationState::Occupied {
                        code,
                        info: info.clone(),
                        inventory,
                    }
                }
            }
            _ => DestinationState::Invalid {
                code,
                reason: InvalidReason::UnknownOrInvalid,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(code: &str) -> DestinationState {
        let catalog = Catalog::builtin();
        DestinationService::new(&catalog).classify(code, "A1-01")
    }

    #[test]
    fn test_empty_input() {
        let state = classify("  ");
        assert_eq!(state, DestinationState::Empty);
        assert!(!state.is_valid());
        assert!(state.resolve().is_err());
    }

    #[test]
    fn test_pallet_destination() {
        let state = classify("pal-007");
        assert!(state.is_valid());
        assert_eq!(state.resolve().unwrap(), "PAL-007(B2-03)");
        assert_eq!(state.preview().unwrap().len(), 1);
    }

    #[test]
    fn test_pallet_at_source_wins_over_source_check() {
        let state = classify("PAL-001");
        assert!(matches!(state, DestinationState::Pallet { ref locator, .. } if locator == "A1-01"));
        assert_eq!(state.preview().unwrap().len(), 5);
    }

    #[test]
    fn test_same_as_source() {
        let state = classify("a1-01");
        assert_eq!(
            state,
            DestinationState::Invalid {
                code: "A1-01".to_string(),
                reason: InvalidReason::SameAsSource,
            }
        );
    }

    #[test]
    fn test_occupied_locator() {
        let state = classify("B2-03");
        assert!(state.is_valid());
        assert!(state.needs_warning());
        assert_eq!(state.resolve().unwrap(), "B2-03");
    }

    #[test]
    fn test_free_locator() {
        let state = classify("c4-11");
        assert!(matches!(state, DestinationState::Free { ref info, .. } if info.capacity == 10));
        assert!(!state.needs_warning());
        assert!(state.preview().is_none());
        assert_eq!(state.resolve().unwrap(), "C4-11");
    }

    #[test]
    fn test_invalid_locators() {
        assert!(matches!(
            classify("ERR-01"),
            DestinationState::Invalid { reason: InvalidReason::UnknownOrInvalid, .. }
        ));
        assert!(matches!(
            classify("Z9-99"),
            DestinationState::Invalid { reason: InvalidReason::UnknownOrInvalid, .. }
        ));
        assert!(matches!(
            classify("Z9-99").resolve().unwrap_err(),
            WarehouseError::InvalidDestination { .. }
        ));
    }

    #[test]
    fn test_invalid_flag_on_non_source_locator() {
        // A1-01 is flagged invalid even when it is not the source
        let catalog = Catalog::builtin();
        let state = DestinationService::new(&catalog).classify("A1-01", "B2-03");
        assert!(matches!(
            state,
            DestinationState::Invalid { reason: InvalidReason::UnknownOrInvalid, .. }
        ));
    }
}
