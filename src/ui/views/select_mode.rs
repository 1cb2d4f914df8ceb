use anyhow::Result;
use dialoguer::Input;
use rust_i18n::t;

use crate::ui::app::{is_home_command, ScannerApp, ViewAction};

pub fn show(app: &mut ScannerApp) -> Result<ViewAction> {
    app.render_header(&t!("select_mode.title"), Some(&*t!("select_mode.subtitle")))?;
    app.render_footer()?;

    let input: String = Input::with_theme(&app.theme)
        .with_prompt(t!("select_mode.prompt"))
        .allow_empty(true)
        .interact_text_on(&app.term)?;

    if is_home_command(&input) {
        app.state.go_home();
        return Ok(ViewAction::Continue);
    }

    app.state.submit_source(&input)?;
    Ok(ViewAction::Continue)
}
