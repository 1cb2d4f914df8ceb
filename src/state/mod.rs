// State management module
pub mod app_state;

pub use app_state::{AppState, Notification, NotificationSeverity, Screen};
