use clap::Parser;
use warehouse_move::cli::{self, Cli};
use warehouse_move::services::config_service::ConfigService;
use warehouse_move::utils::{i18n, logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    if cli.verbose {
        logger::init_with_level("debug");
    } else {
        logger::init();
    }

    tracing::info!("Warehouse Move - Starting...");

    let config = ConfigService::new()?;
    let settings = config.load_settings()?.with_overrides(
        cli.lang.clone(),
        cli.operator.clone(),
        cli.fixture.clone(),
    );

    i18n::set_language(settings.language.as_deref());
    tracing::info!("Current language: {}", i18n::current_language());

    match cli.command {
        Some(command) if !cli.interactive => cli::run_command(command, &config, &settings),
        _ => {
            let catalog = config.load_catalog(settings.fixture_path.as_deref())?;
            cli::run_interactive(catalog, &settings.operator)
        }
    }
}
