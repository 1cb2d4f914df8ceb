use anyhow::Result;
use console::style;
use dialoguer::Select;
use rust_i18n::t;

use crate::ui::app::{ScannerApp, ViewAction};

pub fn show(app: &mut ScannerApp) -> Result<ViewAction> {
    app.render_header(&t!("confirmation.title"), Some(&*t!("confirmation.subtitle")))?;

    app.term.write_line(&format!(
        "{} {}  →  {} {}",
        t!("result.from"),
        style(app.state.source_locator()).bold(),
        t!("result.to"),
        style(app.state.destination_locator()).bold()
    ))?;
    app.term.write_line("")?;
    app.term.write_line(&style(t!("confirmation.details")).bold().to_string())?;
    for item in app.state.items_to_move() {
        app.term.write_line(&format!(
            "  {:<24} {}: {}",
            item.display_name(),
            t!("common.quantity_short"),
            style(item.quantity).bold()
        ))?;
    }
    app.term.write_line(&format!(
        "{}: {} {}",
        t!("result.total"),
        style(app.state.total_to_move()).green().bold(),
        t!("common.units")
    ))?;
    app.render_footer()?;

    let labels = [
        t!("confirmation.complete").to_string(),
        t!("common.back").to_string(),
        t!("footer.home").to_string(),
    ];
    let choice = Select::with_theme(&app.theme)
        .with_prompt(t!("common.choose_action"))
        .items(&labels)
        .default(0)
        .interact_on(&app.term)?;

    match choice {
        0 => {
            app.state.confirm_transaction()?;
        }
        1 => app.state.back_to_destination()?,
        _ => app.state.go_home(),
    }

    Ok(ViewAction::Continue)
}
