use console::style;
use rust_i18n::t;

use crate::models::{InventoryItem, LocatorInfo, MoveTransaction};
use crate::services::picking_service::StagedItem;
use crate::state::{Notification, NotificationSeverity};

/// Screen header: title line plus optional subtitle
pub fn header(title: &str, subtitle: Option<&str>) -> String {
    let mut out = format!("{} {}", style("■").magenta().bold(), style(title).bold());
    if let Some(subtitle) = subtitle {
        out.push('\n');
        out.push_str(&style(subtitle).dim().to_string());
    }
    out.push('\n');
    out.push_str(&style("─".repeat(40)).dim().to_string());
    out
}

/// One inventory line: name, code and quantity
pub fn item_card(item: &InventoryItem) -> String {
    let mut out = format!(
        "{}  {} • {}: {}",
        style(item.display_name()).bold(),
        style(&item.id).dim(),
        t!("common.quantity_short"),
        item.quantity
    );
    if let crate::models::ItemKind::Batch { batch_id, exp } = &item.kind {
        out.push_str(&format!("  ({} {} • {} {})", t!("common.batch"), batch_id, t!("common.exp"), exp));
    } else if !item.details.is_empty() {
        out.push_str(&format!("  ({})", item.details));
    }
    out
}

/// A staged line on the picking screen
pub fn staged_card(staged: &StagedItem) -> String {
    let mut out = format!(
        "{} [{}]  {}: {}/{}",
        style(staged.item.display_name()).bold(),
        staged.item.kind,
        t!("common.quantity_short"),
        style(staged.quantity_to_move).green().bold(),
        staged.available()
    );
    if staged.has_serials() {
        out.push_str(&format!(
            "  {}",
            style(t!("picking.serial_count", count = staged.scanned_serials.len())).cyan()
        ));
    }
    out
}

/// Locator metadata block
pub fn locator_info(code: &str, info: &LocatorInfo) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {}",
        t!("destination.locator"),
        style(code).bold(),
        t!("destination.zone"),
        info.zone,
        t!("destination.capacity"),
        info.capacity,
        t!("destination.conditions"),
        info.conditions
    )
}

/// Transient feedback line
pub fn toast(notification: &Notification) -> String {
    match notification.severity {
        NotificationSeverity::Success => format!("{} {}", style("✔").green(), style(&notification.message).green()),
        NotificationSeverity::Warning => format!("{} {}", style("!").yellow(), style(&notification.message).yellow()),
        NotificationSeverity::Error => format!("{} {}", style("✘").red(), style(&notification.message).red()),
    }
}

/// Summary rows shared by the confirmation and result screens
pub fn transaction_summary(transaction: &MoveTransaction) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {} {}\n{}: {}\n{}: {}",
        t!("result.from"),
        style(&transaction.source_locator).bold(),
        t!("result.to"),
        style(&transaction.destination_locator).bold(),
        t!("result.total"),
        transaction.total_quantity(),
        t!("common.units"),
        t!("result.user"),
        transaction.user,
        t!("result.time"),
        transaction.formatted_timestamp()
    )
}

/// Bottom bar shown on every screen but the menu
pub fn footer() -> String {
    format!(
        "{}   {}",
        style(format!("⌂ {} ({})", t!("footer.home"), crate::ui::app::HOME_COMMAND)).magenta(),
        style(format!("⚙ {}", t!("footer.settings"))).dim()
    )
}
