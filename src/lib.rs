pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::app::Session;
pub use crate::core::catalog::Catalog;
pub use crate::core::report::{Added, Listing, LoanAction, LoanOutcome, LoanReport, SearchReport};
pub use crate::domain::model::{Book, BookState, MatchField, DEFAULT_STOCK};
pub use crate::utils::error::{CatalogError, Result};
