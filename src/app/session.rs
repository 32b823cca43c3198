use crate::app::menu::{MenuChoice, MENU};
use crate::core::catalog::Catalog;
use crate::domain::model::MatchField;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive command loop. Owns the catalog for the lifetime of the
/// session; reads selectors and fields line by line from `input`.
pub struct Session<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Session started with {} books", self.catalog.len());
        while self.step()? == Flow::Continue {}
        writeln!(self.output, "Exiting the program.")?;
        self.output.flush()?;
        tracing::info!("Session ended with {} books", self.catalog.len());
        Ok(())
    }

    /// Shows the menu and handles one selection.
    pub fn step(&mut self) -> Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU)?;

        let Some(line) = self.prompt("Choice: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            tracing::warn!("Invalid menu selection: {:?}", line.trim());
            writeln!(
                self.output,
                "Invalid selection. Check the menu and try again."
            )?;
            return Ok(Flow::Continue);
        };
        tracing::debug!("Menu choice: {}", choice);

        self.dispatch(choice)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => return Ok(Flow::Exit),
            MenuChoice::Add => {
                let Some(title) = self.prompt("Book title: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(author) = self.prompt("Book author: ")? else {
                    return Ok(Flow::Exit);
                };
                let added = self.catalog.add(title, author);
                writeln!(self.output, "{}", added)?;
            }
            MenuChoice::List => {
                writeln!(self.output, "{}", self.catalog.list_all())?;
            }
            MenuChoice::Search(field) => {
                let Some(query) = self.read_identifier(choice)? else {
                    return Ok(Flow::Exit);
                };
                let report = match field {
                    MatchField::Title => self.catalog.search_by_title(&query),
                    MatchField::Author => self.catalog.search_by_author(&query),
                };
                writeln!(self.output, "{}", report)?;
            }
            MenuChoice::Lend(field) => {
                let Some(identifier) = self.read_identifier(choice)? else {
                    return Ok(Flow::Exit);
                };
                let report = self.catalog.lend(&identifier, field);
                writeln!(self.output, "{}", report)?;
            }
            MenuChoice::Return(field) => {
                let Some(identifier) = self.read_identifier(choice)? else {
                    return Ok(Flow::Exit);
                };
                let report = self.catalog.return_copy(&identifier, field);
                writeln!(self.output, "{}", report)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn read_identifier(&mut self, choice: MenuChoice) -> Result<Option<String>> {
        let identifier = self.prompt(choice.identifier_prompt().unwrap_or("Identifier: "))?;
        if identifier.is_some() {
            writeln!(self.output)?;
        }
        Ok(identifier)
    }

    /// Writes `label` and reads one line without its line ending.
    /// Returns `None` at end of input. Invalid UTF-8 is decoded lossily.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // terminals outside UTF-8 still get through, with U+FFFD for bad bytes
        let line = String::from_utf8_lossy(&buf);
        if let std::borrow::Cow::Owned(_) = line {
            tracing::warn!("Input line was not valid UTF-8; invalid bytes replaced");
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(catalog: Catalog, script: &str) -> (Catalog, String) {
        let mut output = Vec::new();
        let mut session = Session::new(catalog, Cursor::new(script.as_bytes()), &mut output);
        session.run().unwrap();
        let catalog = session.into_catalog();
        (catalog, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_step_reports_flow() {
        let mut output = Vec::new();
        let input = Cursor::new("1\nDune\nHerbert\n3\n".as_bytes());
        let mut session = Session::new(Catalog::new(), input, &mut output);

        assert_eq!(session.step().unwrap(), Flow::Continue);
        assert_eq!(session.catalog().len(), 1);
        assert_eq!(session.step().unwrap(), Flow::Exit);
    }

    #[test]
    fn test_exit_choice_stops_loop() {
        let (catalog, output) = run_script(Catalog::new(), "3\n1\nNever\nAdded\n");
        assert!(catalog.is_empty());
        assert!(output.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (catalog, output) = run_script(Catalog::new(), "1\nDune\nHerbert\n");
        assert_eq!(catalog.len(), 1);
        assert!(output.contains("Book added: Dune by Herbert"));
        assert!(output.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_fields_keep_inner_whitespace_and_drop_crlf() {
        let script = "1\r\nThe Left Hand of Darkness\r\nLe Guin\r\n3\r\n";
        let (catalog, _) = run_script(Catalog::new(), script);
        assert_eq!(catalog.books()[0].title(), "The Left Hand of Darkness");
        assert_eq!(catalog.books()[0].author(), "Le Guin");
    }

    #[test]
    fn test_non_utf8_field_does_not_end_session() {
        let mut script = b"1\nDune\nHerbert\n1\n".to_vec();
        script.extend_from_slice(&[0xC3, 0x28]);
        script.extend_from_slice(b"\nSomeone\n2\n3\n");

        let mut output = Vec::new();
        let mut session = Session::new(Catalog::new(), Cursor::new(script), &mut output);
        session.run().unwrap();
        let catalog = session.into_catalog();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.books()[1].title(), "\u{FFFD}(");
        assert_eq!(catalog.books()[1].author(), "Someone");
        assert!(output.contains("--- Catalog: (2 books) ---"));
        assert!(output.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_selector_keeps_leading_number_only() {
        let (catalog, output) = run_script(Catalog::new(), "1 extra words\nDune\nHerbert\n3\n");
        assert_eq!(catalog.len(), 1);
        assert!(!output.contains("Invalid selection"));
    }

    #[test]
    fn test_invalid_selection_is_reported_and_skipped() {
        let (catalog, output) = run_script(Catalog::new(), "42\nabc\n2\n3\n");
        assert!(catalog.is_empty());
        assert_eq!(
            output
                .matches("Invalid selection. Check the menu and try again.")
                .count(),
            2
        );
        assert!(output.contains("No books in the catalog."));
    }
}
