use anyhow::Result;
use console::Term;
use dialoguer::theme::ColorfulTheme;

use crate::state::{AppState, NotificationSeverity, Screen};
use crate::ui::components;
use crate::ui::views;
use crate::utils::error::WarehouseError;

/// Typed at a scan prompt instead of a code to press the Home button
pub const HOME_COMMAND: &str = ":home";

pub fn is_home_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(HOME_COMMAND)
}

/// What the event loop does after a view handled one interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Continue,
    Exit,
}

/// Interactive scanner application
pub struct ScannerApp {
    pub state: AppState,
    pub term: Term,
    pub theme: ColorfulTheme,
}

impl ScannerApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Event loop: render the current screen, handle one interaction, repeat
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.term.clear_screen()?;

            let action = match self.state.screen() {
                Screen::MainMenu => views::main_menu::show(self)?,
                Screen::SelectMode => views::select_mode::show(self)?,
                Screen::UnifiedPicking => views::picking::show(self)?,
                Screen::ScanDestination => views::scan_destination::show(self)?,
                Screen::Confirmation => views::confirmation::show(self)?,
                Screen::Result => views::result::show(self)?,
            };

            if action == ViewAction::Exit {
                tracing::debug!("Operator left the scanner flow");
                return Ok(());
            }
        }
    }

    /// Print a header and the pending toast, if any
    pub fn render_header(&mut self, title: &str, subtitle: Option<&str>) -> Result<()> {
        self.term.write_line(&components::header(title, subtitle))?;
        if let Some(notification) = self.state.take_notification() {
            self.term.write_line(&components::toast(&notification))?;
        }
        self.term.write_line("")?;
        Ok(())
    }

    pub fn render_footer(&self) -> Result<()> {
        self.term.write_line("")?;
        self.term.write_line(&components::footer())?;
        Ok(())
    }

    /// Turn rejected input into a toast; real failures propagate
    pub fn report<T>(&mut self, result: std::result::Result<T, WarehouseError>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_input_rejection() => {
                self.state.notify(e.user_message(), NotificationSeverity::Error);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.state.notify(message, NotificationSeverity::Success);
    }
}
