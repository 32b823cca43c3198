use book_catalog::{Catalog, Session, TomlConfig};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn run_script(catalog: Catalog, script: &str) -> (Catalog, String) {
    let mut output = Vec::new();
    let mut session = Session::new(catalog, Cursor::new(script.as_bytes()), &mut output);
    session.run().unwrap();
    let catalog = session.into_catalog();
    (catalog, String::from_utf8(output).unwrap())
}

#[test]
fn test_full_menu_walkthrough() {
    let script = "\
1
Dune
Herbert
1
Emma
Austen
6
Dune
6
Dune
6
Dune
6
Dune
8
Dune
2
5
Austen
3
";
    let (catalog, output) = run_script(Catalog::new(), script);

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.books()[0].borrowed_count(), 2);

    assert!(output.contains("Book added: Dune by Herbert"));
    assert!(output.contains("Book added: Emma by Austen"));
    assert_eq!(output.matches("'Dune' (author: Herbert) lent.").count(), 3);
    assert!(output.contains("'Dune' (author: Herbert) is not available (all copies on loan)."));
    assert!(output.contains("'Dune' (author: Herbert) returned."));
    assert!(output.contains("--- Catalog: (2 books) ---"));
    assert!(output.contains(
        "- Title: Dune, Author: Herbert, Remaining: 1 (total 3, on loan: 2) [available]"
    ));
    assert!(output.contains("--- Search by author: 'Austen' ---"));
    assert!(output.ends_with("Exiting the program.\n"));
}

#[test]
fn test_menu_author_actions_and_not_found() {
    let script = "\
1
Emma
Austen
1
Persuasion
Austen
7
Austen
9
Austen
9
Austen
4
Middlemarch
7
Eliot
";
    let (catalog, output) = run_script(Catalog::new(), script);

    assert!(catalog.books().iter().all(|b| b.borrowed_count() == 0));
    assert!(output.contains("'Emma' (author: Austen) lent."));
    assert!(output.contains("'Persuasion' (author: Austen) lent."));
    assert_eq!(output.matches("returned.").count(), 2);
    assert_eq!(output.matches("is not currently on loan.").count(), 2);
    assert!(output.contains("Book not found: 'Middlemarch'"));
    assert!(output.contains("No books found by author: 'Eliot'"));
}

#[test]
fn test_session_over_seeded_catalog_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            br#"
[catalog]
default_stock = 1

[[catalog.books]]
title = "Dune"
author = "Herbert"
"#,
        )
        .unwrap();

    let config = TomlConfig::from_file(temp_file.path()).unwrap();
    let catalog = Catalog::from_config(&config);

    let (catalog, output) = run_script(catalog, "6\nDune\n6\nDune\n3\n");
    assert_eq!(catalog.books()[0].borrowed_count(), 1);
    assert!(output.contains("Remaining copies: 0"));
    assert!(output.contains("is not available (all copies on loan)."));
}
