// Terminal UI for the scanner flow
pub mod app;
pub mod components;
pub mod views;

pub use app::ScannerApp;

use anyhow::Result;
use crate::state::AppState;

/// Run the interactive screen flow until the operator exits
pub fn run_interactive(state: AppState) -> Result<()> {
    let mut app = ScannerApp::new(state);
    app.run()
}
