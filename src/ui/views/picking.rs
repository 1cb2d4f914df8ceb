use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use rust_i18n::t;

use crate::models::InventoryItem;
use crate::services::picking_service::{clamp_quantity, ScanOutcome};
use crate::ui::app::{is_home_command, ScannerApp, ViewAction};
use crate::ui::components;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Scan,
    PickAll,
    EditSerials,
    RemoveItem,
    Confirm,
    Cancel,
    Home,
}

impl Action {
    fn label(&self, total: u64) -> String {
        match self {
            Action::Scan => t!("picking.scan").to_string(),
            Action::PickAll => t!("picking.pick_all").to_string(),
            Action::EditSerials => t!("picking.edit_serials").to_string(),
            Action::RemoveItem => t!("picking.remove_item").to_string(),
            Action::Confirm => t!("picking.confirm", total = total).to_string(),
            Action::Cancel => t!("common.cancel").to_string(),
            Action::Home => t!("footer.home").to_string(),
        }
    }
}

pub fn show(app: &mut ScannerApp) -> Result<ViewAction> {
    let subtitle = t!("picking.subtitle", locator = app.state.source_locator()).to_string();
    app.render_header(&t!("picking.title"), Some(subtitle.as_str()))?;

    let (staged_lines, total, any_staged, any_serials) = {
        let session = app.state.picking_mut()?;
        let lines: Vec<String> = session.staged().iter().map(components::staged_card).collect();
        let any_serials = session.staged().iter().any(|s| s.has_serials());
        (lines, session.total_picked(), !session.staged().is_empty(), any_serials)
    };

    if staged_lines.is_empty() {
        app.term.write_line(&style(t!("picking.empty")).dim().to_string())?;
    } else {
        for line in &staged_lines {
            app.term.write_line(line)?;
        }
    }
    app.term.write_line(&format!(
        "\n{}: {}",
        t!("picking.total"),
        style(total).green().bold()
    ))?;
    app.render_footer()?;

    let mut actions = vec![Action::Scan, Action::PickAll];
    if any_serials {
        actions.push(Action::EditSerials);
    }
    if any_staged {
        actions.push(Action::RemoveItem);
    }
    if total > 0 {
        actions.push(Action::Confirm);
    }
    actions.push(Action::Cancel);
    actions.push(Action::Home);

    let labels: Vec<String> = actions.iter().map(|a| a.label(total)).collect();
    let choice = Select::with_theme(&app.theme)
        .with_prompt(t!("common.choose_action"))
        .items(&labels)
        .default(0)
        .interact_on(&app.term)?;

    match actions[choice] {
        Action::Scan => scan(app)?,
        Action::PickAll => {
            let result = app.state.picking_mut()?.pick_all();
            if let Some(count) = app.report(result)? {
                app.success(t!("picking.picked_all", count = count));
            }
        }
        Action::EditSerials => edit_serials(app)?,
        Action::RemoveItem => remove_item(app)?,
        Action::Confirm => {
            let result = app.state.confirm_picking();
            app.report(result)?;
        }
        Action::Cancel => app.state.cancel_picking()?,
        Action::Home => app.state.go_home(),
    }

    Ok(ViewAction::Continue)
}

fn scan(app: &mut ScannerApp) -> Result<()> {
    let input: String = Input::with_theme(&app.theme)
        .with_prompt(t!("picking.scan_prompt"))
        .allow_empty(true)
        .interact_text_on(&app.term)?;

    if is_home_command(&input) {
        app.state.go_home();
        return Ok(());
    }

    let result = app.state.picking_mut()?.scan(&input);
    match app.report(result)? {
        Some(ScanOutcome::SerialScanned { serial, .. }) => {
            app.success(t!("picking.serial_scanned", code = serial));
        }
        Some(ScanOutcome::ItemStaged { item_id, kind }) => {
            app.success(t!("picking.item_staged", kind = kind, code = item_id));
        }
        Some(ScanOutcome::QuantityRequired(item)) => ask_quantity(app, &item)?,
        Some(ScanOutcome::Ignored) | None => {}
    }
    Ok(())
}

/// Quantity prompt for batches; blank input closes it
fn ask_quantity(app: &mut ScannerApp, item: &InventoryItem) -> Result<()> {
    app.term.write_line(&components::item_card(item))?;

    let input: String = Input::with_theme(&app.theme)
        .with_prompt(t!("picking.quantity_prompt", available = item.quantity))
        .allow_empty(true)
        .validate_with(|value: &String| -> std::result::Result<(), String> {
            if value.trim().is_empty() || value.trim().parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err(t!("picking.quantity_not_number").to_string())
            }
        })
        .interact_text_on(&app.term)?;

    let Ok(requested) = input.trim().parse::<u32>() else {
        return Ok(());
    };

    let quantity = clamp_quantity(requested, item.quantity);
    let result = app.state.picking_mut()?.add_quantity(&item.id, quantity);
    if app.report(result)?.is_some() {
        app.success(t!("picking.quantity_added", quantity = quantity));
    }
    Ok(())
}

fn choose_staged(app: &mut ScannerApp, only_serialized: bool) -> Result<Option<String>> {
    let candidates: Vec<(String, String)> = app
        .state
        .picking_mut()?
        .staged()
        .iter()
        .filter(|s| !only_serialized || s.has_serials())
        .map(|s| (s.id().to_string(), components::staged_card(s)))
        .collect();

    let mut labels: Vec<String> = candidates.iter().map(|(_, label)| label.clone()).collect();
    labels.push(t!("common.back").to_string());

    let choice = Select::with_theme(&app.theme)
        .with_prompt(t!("picking.choose_item"))
        .items(&labels)
        .default(0)
        .interact_on(&app.term)?;

    Ok(candidates.get(choice).map(|(id, _)| id.clone()))
}

fn remove_item(app: &mut ScannerApp) -> Result<()> {
    let Some(item_id) = choose_staged(app, false)? else {
        return Ok(());
    };

    let result = app.state.picking_mut()?.remove_item(&item_id);
    if app.report(result)?.is_some() {
        app.success(t!("picking.item_removed"));
    }
    Ok(())
}

/// Serial detail modal: filter, then pick a serial to remove
fn edit_serials(app: &mut ScannerApp) -> Result<()> {
    let Some(item_id) = choose_staged(app, true)? else {
        return Ok(());
    };

    loop {
        let filter: String = Input::with_theme(&app.theme)
            .with_prompt(t!("picking.serial_filter"))
            .allow_empty(true)
            .interact_text_on(&app.term)?;

        let serials = app.state.picking_mut()?.filter_serials(&item_id, filter.trim());
        if serials.is_empty() {
            app.term
                .write_line(&style(t!("picking.no_serials")).dim().to_string())?;
        }

        let mut labels = serials.clone();
        labels.push(t!("common.close").to_string());

        let choice = Select::with_theme(&app.theme)
            .with_prompt(t!("picking.serial_remove_prompt"))
            .items(&labels)
            .default(labels.len() - 1)
            .interact_on(&app.term)?;

        let Some(serial) = serials.get(choice) else {
            return Ok(());
        };

        let result = app.state.picking_mut()?.remove_serial(&item_id, serial);
        match app.report(result)? {
            Some(item_removed) => {
                app.success(t!("picking.serial_removed", serial = serial));
                if item_removed {
                    return Ok(());
                }
            }
            None => return Ok(()),
        }
    }
}
