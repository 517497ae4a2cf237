//! # View Projection
//!
//! Turns the registry into the rows of the books table.
//!
//! [`render`] is pure: the same registry always yields the same rows, and
//! the HTTP layer calls it after every mutation instead of patching markup.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  Title              │ Author              │ Year │ Genre            │
//! ├────────────────────────────────────────────────────────────────────┤
//! │  The Great Gatsby   │ F. Scott Fitzgerald │ 1925 │ Fiction          │  TableRow::Book
//! │  1984               │ George Orwell       │ 1949 │ Dystopian Fiction│  TableRow::Book
//! └────────────────────────────────────────────────────────────────────┘
//!
//!  empty registry:   │        No books in the list          │   TableRow::Empty
//! ```

use serde::Serialize;

use crate::registry::BookRegistry;
use crate::EMPTY_TABLE_MESSAGE;

/// Number of columns in the books table.
pub const TABLE_COLUMNS: usize = 4;

/// One row of the books table. Text cells are already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TableRow {
    /// A book.
    Book {
        title: String,
        author: String,
        year: i32,
        genre: String,
    },

    /// Placeholder shown when there are no books.
    Empty { message: String },
}

/// The rendered books table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// Returns true if the table only holds the empty-state row.
    pub fn is_empty_state(&self) -> bool {
        matches!(self.rows.as_slice(), [TableRow::Empty { .. }])
    }

    /// Writes the rows as `<tr>` markup for the table body.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for row in &self.rows {
            let line = match row {
                TableRow::Book {
                    title,
                    author,
                    year,
                    genre,
                } => format!(
                    "<tr><td>{title}</td><td>{author}</td><td>{year}</td><td>{genre}</td></tr>\n"
                ),
                TableRow::Empty { message } => format!(
                    "<tr><td colspan=\"{TABLE_COLUMNS}\" class=\"empty\">{message}</td></tr>\n"
                ),
            };
            html.push_str(&line);
        }
        html
    }
}

/// Projects the registry into table rows.
///
/// One row per book in display order, or a single empty-state row.
pub fn render(registry: &BookRegistry) -> TableView {
    if registry.is_empty() {
        return TableView {
            rows: vec![TableRow::Empty {
                message: EMPTY_TABLE_MESSAGE.to_string(),
            }],
        };
    }

    let rows = registry
        .books()
        .iter()
        .map(|book| TableRow::Book {
            title: escape_html(&book.title),
            author: escape_html(&book.author),
            year: book.year,
            genre: escape_html(&book.genre),
        })
        .collect();

    TableView { rows }
}

/// Escapes text for use inside HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Book;

    #[test]
    fn test_empty_registry_renders_single_placeholder_row() {
        let view = render(&BookRegistry::default());

        assert_eq!(view.rows.len(), 1);
        assert!(view.is_empty_state());
        assert_eq!(
            view.rows[0],
            TableRow::Empty {
                message: "No books in the list".to_string()
            }
        );
        assert!(view.to_html().contains("colspan=\"4\""));
    }

    #[test]
    fn test_one_row_per_book_in_order() {
        let view = render(&BookRegistry::seeded());

        assert_eq!(view.rows.len(), 3);
        assert!(!view.is_empty_state());
        match &view.rows[2] {
            TableRow::Book { title, year, .. } => {
                assert_eq!(title, "1984");
                assert_eq!(*year, 1949);
            }
            other => panic!("unexpected row {other:?}"),
        }
    }

    #[test]
    fn test_unsafe_characters_are_escaped() {
        let registry = BookRegistry::new(vec![Book::new(
            "<script>alert(1)</script>",
            "Smith & Sons",
            2001,
            "\"Quoted\" 'genre'",
        )]);

        let view = render(&registry);
        assert_eq!(
            view.rows[0],
            TableRow::Book {
                title: "&lt;script&gt;alert(1)&lt;/script&gt;".to_string(),
                author: "Smith &amp; Sons".to_string(),
                year: 2001,
                genre: "&quot;Quoted&quot; &#39;genre&#39;".to_string(),
            }
        );
        assert!(!view.to_html().contains("<script>"));
    }

    #[test]
    fn test_to_html_row_markup() {
        let registry = BookRegistry::new(vec![Book::new("Emma", "Jane Austen", 1815, "Romance")]);
        assert_eq!(
            render(&registry).to_html(),
            "<tr><td>Emma</td><td>Jane Austen</td><td>1815</td><td>Romance</td></tr>\n"
        );

        assert_eq!(
            render(&BookRegistry::default()).to_html(),
            "<tr><td colspan=\"4\" class=\"empty\">No books in the list</td></tr>\n"
        );
    }

    #[test]
    fn test_rows_serialize_with_kind_tag() {
        let view = render(&BookRegistry::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["rows"][0]["kind"], "empty");
    }
}
