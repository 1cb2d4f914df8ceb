use rust_i18n::t;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("Code {0} is not a known pallet, SKU, batch or serial")]
    UnknownCode(String),

    #[error("Serial {0} does not belong to this locator")]
    SerialNotInLocator(String),

    #[error("Serial {0} has already been scanned")]
    SerialAlreadyScanned(String),

    #[error("{kind} {code} has already been added")]
    AlreadyStaged { kind: String, code: String },

    #[error("Locator {0} holds no inventory")]
    EmptyLocator(String),

    #[error("Quantity {requested} is outside 1..={available}")]
    InvalidQuantity { requested: u32, available: u32 },

    #[error("Cannot stage more than {available} of {item_id}")]
    QuantityExceeded { item_id: String, available: u32 },

    #[error("Nothing has been picked yet")]
    NothingPicked,

    #[error("Item {0} is not staged")]
    ItemNotStaged(String),

    #[error("Invalid destination {code}: {reason}")]
    InvalidDestination { code: String, reason: String },

    #[error("Action not available on the {0} screen")]
    InvalidTransition(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    DeserializationError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WarehouseError>;

impl WarehouseError {
    /// Returns the localized toast text shown on the handheld
    pub fn user_message(&self) -> String {
        self.user_message_in(&rust_i18n::locale())
    }

    /// Toast text in a given locale
    pub fn user_message_in(&self, locale: &str) -> String {
        match self {
            Self::UnknownCode(code) => t!("error.unknown_code", locale = locale, code = code).to_string(),
            Self::SerialNotInLocator(code) => {
                t!("error.serial_not_in_locator", locale = locale, code = code).to_string()
            }
            Self::SerialAlreadyScanned(code) => {
                t!("error.serial_already_scanned", locale = locale, code = code).to_string()
            }
            Self::AlreadyStaged { kind, code } => {
                t!("error.already_staged", locale = locale, kind = kind, code = code).to_string()
            }
            Self::EmptyLocator(_) => t!("error.empty_locator", locale = locale).to_string(),
            Self::InvalidQuantity { available, .. } => {
                t!("error.invalid_quantity", locale = locale, available = available).to_string()
            }
            Self::QuantityExceeded { item_id, available } => t!(
                "error.quantity_exceeded",
                locale = locale,
                item = item_id,
                available = available
            )
            .to_string(),
            Self::NothingPicked => t!("error.nothing_picked", locale = locale).to_string(),
            Self::InvalidDestination { reason, .. } => reason.clone(),
            Self::ConfigError(reason) => t!("error.config", locale = locale, reason = reason).to_string(),
            _ => self.to_string(),
        }
    }

    /// Whether the error is a rejected scan or input rather than a failure
    pub fn is_input_rejection(&self) -> bool {
        !matches!(
            self,
            Self::ConfigError(_)
                | Self::IoError(_)
                | Self::SerializationError(_)
                | Self::DeserializationError(_)
                | Self::Other(_)
        )
    }
}
