use book_catalog::domain::ports::ConfigProvider;
use book_catalog::utils::{logger, validation::Validate};
use book_catalog::{Catalog, CliConfig, Session};
use clap::Parser;

fn main() {
    let args = CliConfig::parse();

    // 驗證命令列參數
    if let Err(e) = args.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入配置
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(args.verbose, config.log_level());

    tracing::info!("Starting book-catalog");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
        tracing::debug!("Resolved config: {:?}", config);
    }

    let catalog = Catalog::from_config(&config);
    let stdin = std::io::stdin();
    let mut session = Session::new(catalog, stdin.lock(), std::io::stdout());

    if let Err(e) = session.run() {
        tracing::error!("❌ Session aborted: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
