use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-catalog")]
#[command(about = "Interactive library catalog: add, search, lend and return books")]
pub struct CliConfig {
    /// Optional TOML file with catalog defaults and seed books
    #[arg(short, long)]
    pub config: Option<String>,

    /// Copies registered for each newly added book
    #[arg(long)]
    pub stock: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file when one was given and applies command-line
    /// overrides on top. The result is validated.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        }
        .with_stock_override(self.stock);

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(stock) = self.stock {
            validation::validate_positive_number("stock", stock, 1)?;
        }
        Ok(())
    }
}
