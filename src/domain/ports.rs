use crate::domain::model::BookEntry;

/// Settings a [`Catalog`](crate::core::catalog::Catalog) is built from.
pub trait ConfigProvider {
    fn default_stock(&self) -> u32;
    fn seed_books(&self) -> &[BookEntry];
    fn log_level(&self) -> Option<&str>;
}
