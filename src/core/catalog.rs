use crate::core::report::{Added, Listing, LoanAction, LoanOutcome, LoanReport, SearchReport};
use crate::domain::model::{Book, MatchField, DEFAULT_STOCK};
use crate::domain::ports::ConfigProvider;

/// In-memory book catalog. Insertion order is kept and nothing is ever
/// removed; duplicate titles and authors are separate entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    default_stock: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_default_stock(DEFAULT_STOCK)
    }

    pub fn with_default_stock(default_stock: u32) -> Self {
        Self {
            books: Vec::new(),
            default_stock,
        }
    }

    /// Builds a catalog using the configured stock and preloads the seed books.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut catalog = Self::with_default_stock(config.default_stock());
        for entry in config.seed_books() {
            catalog.add(entry.title.clone(), entry.author.clone());
        }
        tracing::info!(
            "Catalog ready with {} seeded books (default stock {})",
            catalog.len(),
            catalog.default_stock
        );
        catalog
    }

    pub fn default_stock(&self) -> u32 {
        self.default_stock
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> Added {
        let book = Book::with_stock(title, author, self.default_stock);
        tracing::debug!("Adding '{}' by '{}'", book.title(), book.author());

        let added = Added {
            title: book.title().to_string(),
            author: book.author().to_string(),
        };
        self.books.push(book);
        added
    }

    pub fn list_all(&self) -> Listing<'_> {
        Listing::new(&self.books)
    }

    pub fn search_by_title(&self, query: &str) -> SearchReport<'_> {
        self.search(query, MatchField::Title)
    }

    pub fn search_by_author(&self, query: &str) -> SearchReport<'_> {
        self.search(query, MatchField::Author)
    }

    fn search(&self, query: &str, field: MatchField) -> SearchReport<'_> {
        let hits = self.books.iter().filter(|book| field.select(book) == query);
        let matches: Vec<&Book> = if field.stops_at_first() {
            hits.take(1).collect()
        } else {
            hits.collect()
        };

        tracing::debug!("Search {:?} '{}': {} match(es)", field, query, matches.len());
        SearchReport {
            field,
            query: query.to_string(),
            matches,
        }
    }

    pub fn lend(&mut self, identifier: &str, field: MatchField) -> LoanReport {
        self.apply(identifier, field, LoanAction::Lend)
    }

    pub fn return_copy(&mut self, identifier: &str, field: MatchField) -> LoanReport {
        self.apply(identifier, field, LoanAction::Return)
    }

    // Title matches stop after the first book, whether or not the action went
    // through. Author matches visit every book.
    fn apply(&mut self, identifier: &str, field: MatchField, action: LoanAction) -> LoanReport {
        let mut outcomes = Vec::new();

        for book in self.books.iter_mut() {
            if field.select(book) != identifier {
                continue;
            }

            let done = match action {
                LoanAction::Lend => book.lend(),
                LoanAction::Return => book.return_copy(),
            };

            let outcome = if done {
                LoanOutcome::Completed {
                    title: book.title().to_string(),
                    author: book.author().to_string(),
                    remaining: book.remaining(),
                }
            } else {
                tracing::warn!(
                    "{:?} refused for '{}' by '{}' (on loan {}/{})",
                    action,
                    book.title(),
                    book.author(),
                    book.borrowed_count(),
                    book.stock()
                );
                LoanOutcome::Refused {
                    title: book.title().to_string(),
                    author: book.author().to_string(),
                }
            };
            outcomes.push(outcome);

            if field.stops_at_first() {
                break;
            }
        }

        if outcomes.is_empty() {
            tracing::debug!("{:?} by {:?}: nothing matches '{}'", action, field, identifier);
        }

        LoanReport {
            action,
            field,
            identifier: identifier.to_string(),
            outcomes,
        }
    }
}
