use crate::models::{InventoryItem, MoveTransaction};
use crate::services::catalog::{normalize_code, Catalog};
use crate::services::destination_service::{DestinationService, DestinationState};
use crate::services::move_service::MoveService;
use crate::services::picking_service::PickingSession;
use crate::utils::error::{Result, WarehouseError};
use std::fmt;
use std::sync::Arc;

/// Screens of the move flow, one visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    SelectMode,
    UnifiedPicking,
    ScanDestination,
    Confirmation,
    Result,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MainMenu => "MAIN_MENU",
            Self::SelectMode => "SELECT_MODE",
            Self::UnifiedPicking => "UNIFIED_PICKING",
            Self::ScanDestination => "SCAN_DESTINATION",
            Self::Confirmation => "CONFIRMATION",
            Self::Result => "RESULT",
        };
        f.write_str(name)
    }
}

/// Notification severity level for the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Success,
    Warning,
    Error,
}

/// Transient feedback shown after a scan or action
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: NotificationSeverity,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// State of one scanner session: the current screen plus the move being built
pub struct AppState {
    catalog: Arc<Catalog>,

    /// User recorded on transactions
    operator: String,

    screen: Screen,

    source_locator: String,

    destination_locator: String,

    /// Staging area, only present on the picking screen
    picking: Option<PickingSession>,

    /// Items handed over from picking
    items_to_move: Vec<InventoryItem>,

    /// Last confirmed move, shown on the result screen
    transaction: Option<MoveTransaction>,

    notification: Option<Notification>,
}

impl AppState {
    pub fn new(catalog: Catalog, operator: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            operator: operator.into(),
            screen: Screen::MainMenu,
            source_locator: String::new(),
            destination_locator: String::new(),
            picking: None,
            items_to_move: Vec::new(),
            transaction: None,
            notification: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn source_locator(&self) -> &str {
        &self.source_locator
    }

    pub fn destination_locator(&self) -> &str {
        &self.destination_locator
    }

    pub fn items_to_move(&self) -> &[InventoryItem] {
        &self.items_to_move
    }

    /// Total quantity handed over from picking
    pub fn total_to_move(&self) -> u64 {
        self.items_to_move.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn transaction(&self) -> Option<&MoveTransaction> {
        self.transaction.as_ref()
    }

    pub fn picking(&self) -> Option<&PickingSession> {
        self.picking.as_ref()
    }

    /// Staging area of the picking screen
    pub fn picking_mut(&mut self) -> Result<&mut PickingSession> {
        self.expect_screen(Screen::UnifiedPicking)?;
        self.picking
            .as_mut()
            .ok_or_else(|| WarehouseError::InvalidTransition(self.screen.to_string()))
    }

    fn expect_screen(&self, expected: Screen) -> Result<()> {
        if self.screen == expected {
            Ok(())
        } else {
            tracing::warn!("Action for {} attempted on {}", expected, self.screen);
            Err(WarehouseError::InvalidTransition(self.screen.to_string()))
        }
    }

    fn clear_move(&mut self) {
        self.source_locator.clear();
        self.destination_locator.clear();
        self.picking = None;
        self.items_to_move.clear();
        self.transaction = None;
    }

    fn go_to(&mut self, screen: Screen) {
        tracing::debug!("Screen {} -> {}", self.screen, screen);
        self.screen = screen;
    }

    /// Start a fresh move from the menu or after a completed one
    pub fn start_new_move(&mut self) -> Result<()> {
        if !matches!(self.screen, Screen::MainMenu | Screen::Result) {
            return Err(WarehouseError::InvalidTransition(self.screen.to_string()));
        }
        self.clear_move();
        self.go_to(Screen::SelectMode);
        Ok(())
    }

    /// Home button: back to the menu, dropping everything
    pub fn go_home(&mut self) {
        self.clear_move();
        self.notification = None;
        self.go_to(Screen::MainMenu);
    }

    /// Source locator scanned; returns `false` when the input was blank
    pub fn submit_source(&mut self, input: &str) -> Result<bool> {
        self.expect_screen(Screen::SelectMode)?;

        let code = normalize_code(input);
        if code.is_empty() {
            return Ok(false);
        }

        self.picking = Some(PickingSession::new(Arc::clone(&self.catalog), code.as_str()));
        self.source_locator = code;
        self.go_to(Screen::UnifiedPicking);
        Ok(true)
    }

    /// Hand the staged items over and move on to the destination scan
    pub fn confirm_picking(&mut self) -> Result<()> {
        let items = {
            let session = self.picking_mut()?;
            if !session.can_confirm() {
                return Err(WarehouseError::NothingPicked);
            }
            session.finalize()
        };

        self.items_to_move = items;
        self.picking = None;
        self.go_to(Screen::ScanDestination);
        Ok(())
    }

    /// Abandon picking and scan another source
    pub fn cancel_picking(&mut self) -> Result<()> {
        self.expect_screen(Screen::UnifiedPicking)?;
        self.source_locator.clear();
        self.items_to_move.clear();
        self.picking = None;
        self.go_to(Screen::SelectMode);
        Ok(())
    }

    /// Classify a destination without leaving the screen
    pub fn classify_destination(&self, input: &str) -> Result<DestinationState> {
        self.expect_screen(Screen::ScanDestination)?;
        Ok(DestinationService::new(&self.catalog).classify(input, &self.source_locator))
    }

    /// Accept a destination; invalid or blank codes are rejected
    pub fn submit_destination(&mut self, input: &str) -> Result<DestinationState> {
        let state = self.classify_destination(input)?;
        self.destination_locator = state.resolve()?;
        self.go_to(Screen::Confirmation);
        Ok(state)
    }

    /// Back from confirmation to the destination scan
    pub fn back_to_destination(&mut self) -> Result<()> {
        self.expect_screen(Screen::Confirmation)?;
        self.go_to(Screen::ScanDestination);
        Ok(())
    }

    /// Record the move and show the result
    pub fn confirm_transaction(&mut self) -> Result<&MoveTransaction> {
        self.expect_screen(Screen::Confirmation)?;

        let transaction = MoveService::new(&self.catalog, self.operator.as_str()).build_transaction(
            &self.source_locator,
            &self.destination_locator,
            self.items_to_move.clone(),
        );
        self.go_to(Screen::Result);
        Ok(&*self.transaction.insert(transaction))
    }

    /// Set the toast
    pub fn notify(&mut self, message: impl Into<String>, severity: NotificationSeverity) {
        let message = message.into();
        match severity {
            NotificationSeverity::Error => tracing::warn!("Feedback: {}", message),
            _ => tracing::debug!("Feedback: {}", message),
        }
        self.notification = Some(Notification {
            message,
            severity,
            timestamp: chrono::Utc::now(),
        });
    }

    /// Take the pending toast, clearing it
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoveMode;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), "user@example.com")
    }

    #[test]
    fn test_starts_on_menu() {
        let s = state();
        assert_eq!(s.screen(), Screen::MainMenu);
        assert!(s.transaction().is_none());
    }

    #[test]
    fn test_blank_source_stays_on_screen() {
        let mut s = state();
        s.start_new_move().unwrap();
        assert!(!s.submit_source("   ").unwrap());
        assert_eq!(s.screen(), Screen::SelectMode);
    }

    #[test]
    fn test_source_is_upper_cased() {
        let mut s = state();
        s.start_new_move().unwrap();
        assert!(s.submit_source(" a1-01 ").unwrap());
        assert_eq!(s.source_locator(), "A1-01");
        assert_eq!(s.screen(), Screen::UnifiedPicking);
        assert_eq!(s.picking().unwrap().source_inventory().len(), 5);
    }

    #[test]
    fn test_confirm_picking_requires_items() {
        let mut s = state();
        s.start_new_move().unwrap();
        s.submit_source("A1-01").unwrap();
        assert!(matches!(s.confirm_picking().unwrap_err(), WarehouseError::NothingPicked));
        assert_eq!(s.screen(), Screen::UnifiedPicking);
    }

    #[test]
    fn test_cancel_picking_clears_source() {
        let mut s = state();
        s.start_new_move().unwrap();
        s.submit_source("A1-01").unwrap();
        s.picking_mut().unwrap().scan("PAL-001").unwrap();
        s.cancel_picking().unwrap();
        assert_eq!(s.screen(), Screen::SelectMode);
        assert_eq!(s.source_locator(), "");
        assert!(s.picking().is_none());
    }

    #[test]
    fn test_invalid_destination_keeps_screen() {
        let mut s = state();
        s.start_new_move().unwrap();
        s.submit_source("A1-01").unwrap();
        s.picking_mut().unwrap().scan("PAL-001").unwrap();
        s.confirm_picking().unwrap();

        assert!(s.submit_destination("A1-01").is_err());
        assert!(s.submit_destination("").is_err());
        assert_eq!(s.screen(), Screen::ScanDestination);
    }

    #[test]
    fn test_full_flow() {
        let mut s = state();
        s.start_new_move().unwrap();
        s.submit_source("A1-01").unwrap();
        s.picking_mut().unwrap().pick_all().unwrap();
        s.confirm_picking().unwrap();
        assert_eq!(s.total_to_move(), 123);

        s.submit_destination("pal-007").unwrap();
        assert_eq!(s.destination_locator(), "PAL-007(B2-03)");
        assert_eq!(s.screen(), Screen::Confirmation);

        s.back_to_destination().unwrap();
        s.submit_destination("C4-11").unwrap();

        let tx = s.confirm_transaction().unwrap();
        assert_eq!(tx.mode, MoveMode::Full);
        assert_eq!(tx.destination_locator, "C4-11");
        assert_eq!(s.screen(), Screen::Result);

        s.start_new_move().unwrap();
        assert_eq!(s.screen(), Screen::SelectMode);
        assert!(s.transaction().is_none());
        assert!(s.items_to_move().is_empty());
    }

    #[test]
    fn test_out_of_order_actions_rejected() {
        let mut s = state();
        assert!(s.submit_source("A1-01").is_err());
        assert!(s.confirm_transaction().is_err());
        assert!(s.picking_mut().is_err());
        assert!(s.back_to_destination().is_err());

        s.start_new_move().unwrap();
        assert!(matches!(
            s.start_new_move().unwrap_err(),
            WarehouseError::InvalidTransition(screen) if screen == "SELECT_MODE"
        ));
    }

    #[test]
    fn test_go_home_resets() {
        let mut s = state();
        s.start_new_move().unwrap();
        s.submit_source("A1-01").unwrap();
        s.notify("hello", NotificationSeverity::Success);
        s.go_home();
        assert_eq!(s.screen(), Screen::MainMenu);
        assert_eq!(s.source_locator(), "");
        assert!(s.take_notification().is_none());
    }

    #[test]
    fn test_notification_is_taken_once() {
        let mut s = state();
        s.notify("Scanned", NotificationSeverity::Success);
        let n = s.take_notification().unwrap();
        assert_eq!(n.message, "Scanned");
        assert_eq!(n.severity, NotificationSeverity::Success);
        assert!(s.take_notification().is_none());
    }
}
