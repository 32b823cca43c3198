use crate::domain::model::MatchField;
use std::fmt;

pub const MENU: &str = "\
========== Library Catalog ==========
1. Add a book
2. List all books
3. Exit
--------------------------------------
4. Search books by title
5. Search books by author
6. Lend a book by title
7. Lend books by author
8. Return a book by title
9. Return books by author
======================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Exit,
    Search(MatchField),
    Lend(MatchField),
    Return(MatchField),
}

impl MenuChoice {
    /// Parses the selector line. Only the first whitespace-separated token
    /// counts; anything that is not one of the listed numbers yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let token = input.split_whitespace().next()?;
        let choice = match token.parse::<u32>().ok()? {
            1 => MenuChoice::Add,
            2 => MenuChoice::List,
            3 => MenuChoice::Exit,
            4 => MenuChoice::Search(MatchField::Title),
            5 => MenuChoice::Search(MatchField::Author),
            6 => MenuChoice::Lend(MatchField::Title),
            7 => MenuChoice::Lend(MatchField::Author),
            8 => MenuChoice::Return(MatchField::Title),
            9 => MenuChoice::Return(MatchField::Author),
            _ => return None,
        };
        Some(choice)
    }

    /// Prompt for the free-text identifier, if the choice needs one.
    pub fn identifier_prompt(&self) -> Option<&'static str> {
        let prompt = match self {
            MenuChoice::Search(MatchField::Title) => "Title to search: ",
            MenuChoice::Search(MatchField::Author) => "Author to search: ",
            MenuChoice::Lend(MatchField::Title) => "Title to lend: ",
            MenuChoice::Lend(MatchField::Author) => "Author to lend: ",
            MenuChoice::Return(MatchField::Title) => "Title to return: ",
            MenuChoice::Return(MatchField::Author) => "Author to return: ",
            MenuChoice::Add | MenuChoice::List | MenuChoice::Exit => return None,
        };
        Some(prompt)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Add => write!(f, "add"),
            MenuChoice::List => write!(f, "list"),
            MenuChoice::Exit => write!(f, "exit"),
            MenuChoice::Search(field) => write!(f, "search by {:?}", field),
            MenuChoice::Lend(field) => write!(f, "lend by {:?}", field),
            MenuChoice::Return(field) => write!(f, "return by {:?}", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::Exit));
        assert_eq!(
            MenuChoice::parse("7"),
            Some(MenuChoice::Lend(MatchField::Author))
        );
        assert_eq!(
            MenuChoice::parse("8"),
            Some(MenuChoice::Return(MatchField::Title))
        );
    }

    #[test]
    fn test_parse_ignores_trailing_words() {
        assert_eq!(MenuChoice::parse("2 please"), Some(MenuChoice::List));
        assert_eq!(
            MenuChoice::parse("  6\tDune"),
            Some(MenuChoice::Lend(MatchField::Title))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("lend"), None);
        assert_eq!(MenuChoice::parse("x 1"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_identifier_prompt() {
        assert_eq!(MenuChoice::Add.identifier_prompt(), None);
        assert_eq!(
            MenuChoice::Search(MatchField::Author).identifier_prompt(),
            Some("Author to search: ")
        );
    }
}
