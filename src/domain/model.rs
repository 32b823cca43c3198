use serde::{Deserialize, Serialize};
use std::fmt;

/// Copies registered for every newly added title unless configured otherwise.
pub const DEFAULT_STOCK: u32 = 3;

/// Title/author pair as it appears in a config file, before it becomes a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    /// At least one copy is on the shelf.
    Available,
    FullyLent,
}

/// Field a lookup compares against. Matching is exact text equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Author,
}

impl MatchField {
    pub fn select<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            MatchField::Title => book.title(),
            MatchField::Author => book.author(),
        }
    }

    /// Title lookups act on the first hit only; author lookups act on all.
    pub fn stops_at_first(&self) -> bool {
        matches!(self, MatchField::Title)
    }
}

/// One catalog entry. `borrowed_count` never exceeds `stock`; both are only
/// changed through [`Book::lend`] and [`Book::return_copy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    stock: u32,
    borrowed_count: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_stock(title, author, DEFAULT_STOCK)
    }

    pub fn with_stock(title: impl Into<String>, author: impl Into<String>, stock: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            stock,
            borrowed_count: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn borrowed_count(&self) -> u32 {
        self.borrowed_count
    }

    pub fn remaining(&self) -> u32 {
        self.stock - self.borrowed_count
    }

    pub fn is_available(&self) -> bool {
        self.borrowed_count < self.stock
    }

    pub fn state(&self) -> BookState {
        if self.is_available() {
            BookState::Available
        } else {
            BookState::FullyLent
        }
    }

    pub fn lend(&mut self) -> bool {
        if !self.is_available() {
            return false;
        }
        self.borrowed_count += 1;
        true
    }

    pub fn return_copy(&mut self) -> bool {
        if self.borrowed_count == 0 {
            return false;
        }
        self.borrowed_count -= 1;
        true
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- Title: {}, Author: {}, Remaining: {} (total {}, on loan: {})",
            self.title,
            self.author,
            self.remaining(),
            self.stock,
            self.borrowed_count
        )?;
        match self.state() {
            BookState::Available => write!(f, " [available]"),
            BookState::FullyLent => write!(f, " [all copies on loan]"),
        }
    }
}
