use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the default filter directive. `-v` wins, then the config file
/// `level`, then the quiet default.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match level {
        _ if verbose => "book_catalog=debug,info".to_string(),
        Some(level) => format!("book_catalog={}", level),
        None => "book_catalog=warn".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    // stdout belongs to the menu
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
