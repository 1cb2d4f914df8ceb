use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the application
///
/// Output goes to stderr so it stays out of the interactive screens.
pub fn init() {
    // RUST_LOG wins, otherwise only warnings
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,warehouse_move=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::debug!("Warehouse move started");
}

/// Initialize logging with custom level
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::new(format!("{},warehouse_move={}", level, level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Logging initialized with level: {}", level);
}
