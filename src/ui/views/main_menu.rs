use anyhow::Result;
use console::style;
use dialoguer::Select;
use rust_i18n::t;

use crate::state::NotificationSeverity;
use crate::ui::app::{ScannerApp, ViewAction};

/// Menu tiles; only moving between locations is wired up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Inbound,
    Outbound,
    StockCount,
    MoveLocation,
    Exit,
}

impl Tile {
    const ALL: [Tile; 5] = [
        Tile::Inbound,
        Tile::Outbound,
        Tile::StockCount,
        Tile::MoveLocation,
        Tile::Exit,
    ];

    fn enabled(&self) -> bool {
        matches!(self, Tile::MoveLocation | Tile::Exit)
    }

    fn label(&self) -> String {
        let title = match self {
            Tile::Inbound => t!("menu.inbound"),
            Tile::Outbound => t!("menu.outbound"),
            Tile::StockCount => t!("menu.stock_count"),
            Tile::MoveLocation => t!("menu.move_location"),
            Tile::Exit => t!("menu.exit"),
        };
        if self.enabled() {
            title.to_string()
        } else {
            style(title).dim().to_string()
        }
    }
}

pub fn show(app: &mut ScannerApp) -> Result<ViewAction> {
    app.term.write_line(&format!(
        "{} {}",
        style("■").magenta().bold(),
        style(t!("app.title")).bold()
    ))?;
    if let Some(notification) = app.state.take_notification() {
        app.term
            .write_line(&crate::ui::components::toast(&notification))?;
    }
    app.term.write_line("")?;

    let labels: Vec<String> = Tile::ALL.iter().map(Tile::label).collect();
    let choice = Select::with_theme(&app.theme)
        .with_prompt(t!("menu.prompt"))
        .items(&labels)
        .default(3)
        .interact_on(&app.term)?;

    match Tile::ALL[choice] {
        Tile::MoveLocation => {
            app.state.start_new_move()?;
        }
        Tile::Exit => return Ok(ViewAction::Exit),
        _ => {
            app.state
                .notify(t!("message.feature_coming_soon"), NotificationSeverity::Warning);
        }
    }

    Ok(ViewAction::Continue)
}
