pub mod commands;

pub use commands::{Cli, Commands};

use anyhow::{anyhow, Result};
use console::style;
use rust_i18n::t;
use std::path::PathBuf;

use crate::models::MoveTransaction;
use crate::services::catalog::Catalog;
use crate::services::config_service::{AppSettings, ConfigService};
use crate::services::destination_service::{DestinationService, DestinationState};
use crate::services::picking_service::ScanOutcome;
use crate::state::AppState;
use crate::ui::components;
use crate::utils::error::WarehouseError;
use crate::utils::i18n;

/// Run the interactive scanner flow
pub fn run_interactive(catalog: Catalog, operator: &str) -> Result<()> {
    tracing::info!("Starting interactive mode as {}", operator);
    crate::ui::run_interactive(AppState::new(catalog, operator))
}

/// Inputs of a move driven from the command line
#[derive(Debug, Clone, Default)]
pub struct MoveRequest {
    pub source: String,
    pub pick_all: bool,
    pub scans: Vec<String>,
    pub batches: Vec<(String, u32)>,
    pub destination: String,
}

/// Drive the same screen flow as the scanner, without prompts
pub fn execute_move(catalog: Catalog, operator: &str, request: &MoveRequest) -> Result<MoveTransaction> {
    let mut state = AppState::new(catalog, operator);
    state.start_new_move().map_err(rejected)?;

    if !state.submit_source(&request.source).map_err(rejected)? {
        return Err(anyhow!(t!("cli.source_required").to_string()));
    }

    let session = state.picking_mut().map_err(rejected)?;
    if request.pick_all {
        session.pick_all().map_err(rejected)?;
    }

    for code in &request.scans {
        match session.scan(code).map_err(rejected)? {
            ScanOutcome::QuantityRequired(item) => {
                return Err(anyhow!(t!("cli.batch_needs_quantity", code = &item.id).to_string()));
            }
            outcome => tracing::debug!("Scan {} -> {:?}", code, outcome),
        }
    }

    for (batch, quantity) in &request.batches {
        let item_id = match session.scan(batch).map_err(rejected)? {
            ScanOutcome::QuantityRequired(item) => item.id,
            _ => return Err(anyhow!(t!("cli.not_a_batch", code = batch).to_string())),
        };
        session.add_quantity(&item_id, *quantity).map_err(rejected)?;
    }

    state.confirm_picking().map_err(rejected)?;
    state.submit_destination(&request.destination).map_err(rejected)?;

    Ok(state.confirm_transaction().map_err(rejected)?.clone())
}

fn rejected(e: WarehouseError) -> anyhow::Error {
    if e.is_input_rejection() {
        anyhow!(e.user_message())
    } else {
        e.into()
    }
}

/// Handle a non-interactive subcommand
pub fn run_command(command: Commands, config: &ConfigService, settings: &AppSettings) -> Result<()> {
    let load_catalog = || config.load_catalog(settings.fixture_path.as_deref());

    match command {
        Commands::Locators => list_locators(&load_catalog()?),
        Commands::Inventory { locator } => show_inventory(&load_catalog()?, &locator),
        Commands::Classify { code, source } => classify(&load_catalog()?, &code, &source),
        Commands::Move {
            source,
            pick_all,
            scans,
            batches,
            destination,
            json,
        } => {
            let request = MoveRequest {
                source,
                pick_all,
                scans,
                batches,
                destination,
            };
            let transaction = execute_move(load_catalog()?, &settings.operator, &request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&transaction)?);
            } else {
                println!("{} {}", style("✔").green(), style(t!("result.success")).green().bold());
                println!("{}", components::transaction_summary(&transaction));
                println!("{}: {}", t!("cli.mode"), transaction.mode);
                for item in &transaction.items_to_move {
                    println!("  {}", components::item_card(item));
                }
            }
            Ok(())
        }
        Commands::Config {
            language,
            operator,
            fixture,
        } => update_config(config, language, operator, fixture),
    }
}

fn list_locators(catalog: &Catalog) -> Result<()> {
    for (code, info) in catalog.locators() {
        let status = if info.valid {
            style(t!("cli.valid")).green()
        } else {
            style(t!("cli.invalid")).red()
        };
        println!(
            "{:<8} {} • {} • {} • {}",
            style(code).bold(),
            info.zone,
            t!("cli.capacity_value", capacity = info.capacity),
            info.conditions,
            status
        );
    }
    Ok(())
}

fn show_inventory(catalog: &Catalog, locator: &str) -> Result<()> {
    let code = crate::services::catalog::normalize_code(locator);
    let items = catalog.inventory_at(&code);
    if items.is_empty() {
        println!("{}", t!("destination.no_items"));
        return Ok(());
    }
    println!("{}", style(t!("destination.inventory_title", locator = &code)).bold());
    for item in items {
        println!("  {}", components::item_card(item));
    }
    Ok(())
}

fn classify(catalog: &Catalog, code: &str, source: &str) -> Result<()> {
    let state = DestinationService::new(catalog).classify(code, source);
    match &state {
        DestinationState::Empty => println!("{}", t!("destination.empty")),
        DestinationState::Pallet { pallet, locator, .. } => println!(
            "{}: {} ({}: {})",
            t!("destination.status_pallet"),
            pallet.id,
            t!("destination.locator"),
            locator
        ),
        DestinationState::Occupied { code, info, inventory } => {
            println!("{}", t!("destination.status_occupied", count = inventory.len()));
            println!("{}", components::locator_info(code, info));
        }
        DestinationState::Free { code, info } => {
            println!("{}", t!("destination.status_free"));
            println!("{}", components::locator_info(code, info));
        }
        DestinationState::Invalid { reason, .. } => {
            return Err(anyhow!(reason.message()));
        }
    }
    Ok(())
}

fn update_config(
    config: &ConfigService,
    language: Option<String>,
    operator: Option<String>,
    fixture: Option<PathBuf>,
) -> Result<()> {
    let mut settings = config.load_settings()?;
    let changed = language.is_some() || operator.is_some() || fixture.is_some();

    if let Some(language) = language {
        let language = i18n::normalize_language(&language)
            .ok_or_else(|| anyhow!(t!("cli.unknown_language", lang = &language).to_string()))?;
        settings.language = Some(language);
    }
    if let Some(operator) = operator {
        settings.operator = operator;
    }
    if fixture.is_some() {
        settings.fixture_path = fixture;
    }

    if changed {
        config.save_settings(&settings)?;
        println!("{}", t!("cli.settings_saved"));
    }

    println!("{}: {}", t!("cli.config_dir"), config.config_dir().display());
    let language = settings.language.clone().unwrap_or_else(i18n::current_language);
    println!("{}: {}", t!("cli.language"), language);
    println!("{}: {}", t!("result.user"), settings.operator);
    match &settings.fixture_path {
        Some(path) => println!("{}: {}", t!("cli.fixture"), path.display()),
        None => println!("{}: {}", t!("cli.fixture"), t!("cli.builtin")),
    }
    Ok(())
}
