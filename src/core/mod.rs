pub mod catalog;
pub mod report;

pub use crate::domain::model::{Book, BookEntry, BookState, MatchField};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
