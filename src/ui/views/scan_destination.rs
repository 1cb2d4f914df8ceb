use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use rust_i18n::t;

use crate::models::InventoryItem;
use crate::services::destination_service::DestinationState;
use crate::state::NotificationSeverity;
use crate::ui::app::{is_home_command, ScannerApp, ViewAction};
use crate::ui::components;

pub fn show(app: &mut ScannerApp) -> Result<ViewAction> {
    app.render_header(&t!("destination.title"), Some(&*t!("destination.subtitle")))?;
    app.term.write_line(&format!(
        "{}: {}  •  {}: {} {}",
        t!("result.from"),
        style(app.state.source_locator()).bold(),
        t!("result.total"),
        app.state.total_to_move(),
        t!("common.units")
    ))?;
    app.render_footer()?;

    let input: String = Input::with_theme(&app.theme)
        .with_prompt(t!("destination.prompt"))
        .allow_empty(true)
        .interact_text_on(&app.term)?;

    if is_home_command(&input) {
        app.state.go_home();
        return Ok(ViewAction::Continue);
    }

    let state = app.state.classify_destination(&input)?;
    if state == DestinationState::Empty {
        return Ok(ViewAction::Continue);
    }

    if let DestinationState::Invalid { reason, .. } = &state {
        app.state
            .notify(reason.message(), NotificationSeverity::Error);
        return Ok(ViewAction::Continue);
    }

    review(app, &input, &state)
}

/// Status box plus actions for a confirmable destination
fn review(app: &mut ScannerApp, input: &str, state: &DestinationState) -> Result<ViewAction> {
    loop {
        app.term.write_line("")?;
        app.term.write_line(&status_box(state))?;

        let mut labels = vec![t!("destination.confirm").to_string()];
        let preview = state.preview();
        if preview.is_some() {
            labels.push(match state {
                DestinationState::Occupied { .. } => t!("destination.view_inventory").to_string(),
                _ => t!("destination.view_colocated").to_string(),
            });
        }
        labels.push(t!("destination.rescan").to_string());

        let choice = Select::with_theme(&app.theme)
            .with_prompt(t!("common.choose_action"))
            .items(&labels)
            .default(0)
            .interact_on(&app.term)?;

        match (choice, preview) {
            (0, _) => {
                let result = app.state.submit_destination(input);
                app.report(result)?;
                return Ok(ViewAction::Continue);
            }
            (1, Some(items)) => show_inventory(app, state, items)?,
            _ => return Ok(ViewAction::Continue),
        }
    }
}

fn status_box(state: &DestinationState) -> String {
    match state {
        DestinationState::Pallet { pallet, locator, .. } => format!(
            "{} {}\n{}: {}\n{}: {}",
            style("✔").green(),
            style(t!("destination.status_pallet")).green().bold(),
            t!("destination.pallet"),
            style(&pallet.id).bold(),
            t!("destination.locator"),
            locator
        ),
        DestinationState::Occupied { code, info, inventory } => format!(
            "{} {}\n{}\n{}",
            style("!").yellow(),
            style(t!("destination.status_occupied", count = inventory.len())).yellow().bold(),
            components::locator_info(code, info),
            style(t!("destination.occupied_hint")).dim()
        ),
        DestinationState::Free { code, info } => format!(
            "{} {}\n{}",
            style("✔").green(),
            style(t!("destination.status_free")).green().bold(),
            components::locator_info(code, info)
        ),
        DestinationState::Invalid { reason, .. } => reason.message(),
        DestinationState::Empty => String::new(),
    }
}

/// Inventory preview modal
fn show_inventory(app: &ScannerApp, state: &DestinationState, items: &[InventoryItem]) -> Result<()> {
    let title = match state {
        DestinationState::Pallet { pallet, .. } => t!("destination.colocated_title", pallet = &pallet.id),
        DestinationState::Occupied { code, .. } => t!("destination.inventory_title", locator = code),
        _ => return Ok(()),
    };

    app.term.write_line("")?;
    app.term.write_line(&style(title).bold().to_string())?;
    if items.is_empty() {
        app.term.write_line(&style(t!("destination.no_items")).dim().to_string())?;
    }
    for item in items {
        app.term.write_line(&format!("  {}", components::item_card(item)))?;
    }
    pause(app)
}

fn pause(app: &ScannerApp) -> Result<()> {
    let _: String = Input::with_theme(&app.theme)
        .with_prompt(t!("common.press_enter"))
        .allow_empty(true)
        .interact_text_on(&app.term)?;
    Ok(())
}
