//! Outcome values returned by [`Catalog`](crate::core::catalog::Catalog).
//!
//! Every catalog operation answers with one of these instead of printing. The
//! `Display` impls hold all operator-facing text.

use crate::domain::model::{Book, MatchField};
use std::fmt;

const LISTING_RULE: &str = "-----------------------------------";
const SECTION_RULE: &str = "---------------------------------------";

fn author_not_found(f: &mut fmt::Formatter<'_>, author: &str) -> fmt::Result {
    writeln!(f, "No books found by author: '{}'", author)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub title: String,
    pub author: String,
}

impl fmt::Display for Added {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book added: {} by {}", self.title, self.author)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    books: &'a [Book],
}

impl<'a> Listing<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &'a [Book] {
        self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.books.is_empty() {
            return write!(f, "No books in the catalog.");
        }

        writeln!(f, "--- Catalog: ({} books) ---", self.books.len())?;
        for book in self.books {
            writeln!(f, "{}", book)?;
        }
        write!(f, "{}", LISTING_RULE)
    }
}

#[derive(Debug, Clone)]
pub struct SearchReport<'a> {
    pub field: MatchField,
    pub query: String,
    pub matches: Vec<&'a Book>,
}

impl SearchReport<'_> {
    pub fn is_not_found(&self) -> bool {
        self.matches.is_empty()
    }
}

impl fmt::Display for SearchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            MatchField::Title => writeln!(f, "--- Search by title: '{}' ---", self.query)?,
            MatchField::Author => writeln!(f, "--- Search by author: '{}' ---", self.query)?,
        }

        if self.matches.is_empty() {
            match self.field {
                MatchField::Title => writeln!(f, "Book not found: '{}'", self.query)?,
                MatchField::Author => author_not_found(f, &self.query)?,
            }
        }
        for book in &self.matches {
            writeln!(f, "{}", book)?;
        }
        write!(f, "{}", SECTION_RULE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanAction {
    Lend,
    Return,
}

/// What happened to one matching book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanOutcome {
    Completed {
        title: String,
        author: String,
        remaining: u32,
    },
    /// Book matched but the precondition blocked the action: nothing left to
    /// lend, or nothing out to return.
    Refused { title: String, author: String },
}

impl LoanOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, LoanOutcome::Completed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReport {
    pub action: LoanAction,
    pub field: MatchField,
    pub identifier: String,
    pub outcomes: Vec<LoanOutcome>,
}

impl LoanReport {
    pub fn is_not_found(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn completed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_completed()).count()
    }

    pub fn refused(&self) -> usize {
        self.outcomes.len() - self.completed()
    }
}

impl fmt::Display for LoanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            LoanAction::Lend => writeln!(f, "--- Lend attempt: '{}' ---", self.identifier)?,
            LoanAction::Return => writeln!(f, "--- Return attempt: '{}' ---", self.identifier)?,
        }

        if self.outcomes.is_empty() {
            match self.field {
                MatchField::Title => {
                    writeln!(f, "No book found with title: '{}'", self.identifier)?
                }
                MatchField::Author => author_not_found(f, &self.identifier)?,
            }
        }

        for outcome in &self.outcomes {
            match (outcome, self.action) {
                (LoanOutcome::Completed { title, author, remaining }, LoanAction::Lend) => {
                    writeln!(f, "'{}' (author: {}) lent.", title, author)?;
                    writeln!(f, "Remaining copies: {}", remaining)?;
                }
                (LoanOutcome::Completed { title, author, remaining }, LoanAction::Return) => {
                    writeln!(f, "'{}' (author: {}) returned.", title, author)?;
                    writeln!(f, "Remaining copies: {}", remaining)?;
                }
                (LoanOutcome::Refused { title, author }, LoanAction::Lend) => writeln!(
                    f,
                    "'{}' (author: {}) is not available (all copies on loan).",
                    title, author
                )?,
                (LoanOutcome::Refused { title, author }, LoanAction::Return) => writeln!(
                    f,
                    "'{}' (author: {}) is not currently on loan.",
                    title, author
                )?,
            }
        }
        write!(f, "{}", SECTION_RULE)
    }
}
