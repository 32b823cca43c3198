use crate::domain::model::{BookEntry, DEFAULT_STOCK};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub default_stock: Option<u32>,
    #[serde(default)]
    pub books: Vec<BookEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LIBRARY_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_stock_override(mut self, stock: Option<u32>) -> Self {
        if let Some(stock) = stock {
            tracing::debug!("Default stock overridden to {}", stock);
            self.catalog.default_stock = Some(stock);
        }
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(stock) = self.catalog.default_stock {
            validation::validate_positive_number("catalog.default_stock", stock, 1)?;
        }

        for (i, book) in self.catalog.books.iter().enumerate() {
            validation::validate_non_empty_string(&format!("catalog.books[{}].title", i), &book.title)?;
            validation::validate_non_empty_string(
                &format!("catalog.books[{}].author", i),
                &book.author,
            )?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn default_stock(&self) -> u32 {
        self.catalog.default_stock.unwrap_or(DEFAULT_STOCK)
    }

    fn seed_books(&self) -> &[BookEntry] {
        &self.catalog.books
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
