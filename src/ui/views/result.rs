use anyhow::Result;
use console::style;
use dialoguer::Select;
use rust_i18n::t;

use crate::ui::app::{ScannerApp, ViewAction};
use crate::ui::components;

pub fn show(app: &mut ScannerApp) -> Result<ViewAction> {
    app.render_header(&t!("result.title"), None)?;

    let Some(transaction) = app.state.transaction() else {
        // Nothing to show, fall back to the menu
        app.state.go_home();
        return Ok(ViewAction::Continue);
    };

    let summary = components::transaction_summary(transaction);
    app.term.write_line(&format!(
        "{} {}",
        style("✔").green().bold(),
        style(t!("result.success")).green().bold()
    ))?;
    app.term.write_line(&style(t!("result.recorded")).dim().to_string())?;
    app.term.write_line("")?;
    app.term.write_line(&summary)?;
    app.render_footer()?;

    let labels = [
        t!("result.continue").to_string(),
        t!("result.back_to_menu").to_string(),
    ];
    let choice = Select::with_theme(&app.theme)
        .with_prompt(t!("common.choose_action"))
        .items(&labels)
        .default(0)
        .interact_on(&app.term)?;

    match choice {
        0 => app.state.start_new_move()?,
        _ => app.state.go_home(),
    }

    Ok(ViewAction::Continue)
}
