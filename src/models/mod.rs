pub mod inventory;
pub mod locator;
pub mod serial;
pub mod transaction;

// Re-export main types
pub use inventory::{InventoryItem, ItemKind};
pub use locator::LocatorInfo;
pub use serial::Serial;
pub use transaction::{MoveMode, MoveTransaction};
