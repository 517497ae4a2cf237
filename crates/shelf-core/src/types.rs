//! # Domain Types
//!
//! The book record and the raw inputs that arrive from the forms.
//!
//! ## Raw vs. Parsed
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  BookUpdate (raw strings)        Book (validated record)                │
//! │  ─────────────────────────       ───────────────────────                │
//! │  title:  " 1984 "          ──►   title:  "1984"  (never changed)        │
//! │  author: "G. Orwell"       ──►   author: "G. Orwell"                    │
//! │  year:   "1949"            ──►   year:   1949    (i32)                  │
//! │  genre:  "Dystopian"       ──►   genre:  "Dystopian"                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Title Key
//! Titles identify records. Two titles refer to the same book when they are
//! equal after trimming and lower-casing (see [`title_key`]).

use serde::{Deserialize, Serialize};

// =============================================================================
// Book
// =============================================================================

/// A book in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Display title, also the lookup key.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Publication year, 0..=3000.
    pub year: i32,

    /// Free-form genre label.
    pub genre: String,
}

impl Book {
    /// Creates a book record.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
        }
    }

    /// Checks whether this book is the one `title` refers to.
    pub fn matches_title(&self, title: &str) -> bool {
        title_key(&self.title) == title_key(title)
    }
}

/// Normalizes a title for comparison (trimmed, lower-cased).
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// The three books the list starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Fiction"),
        Book::new("To Kill a Mockingbird", "Harper Lee", 1960, "Fiction"),
        Book::new("1984", "George Orwell", 1949, "Dystopian Fiction"),
    ]
}

// =============================================================================
// Form Inputs
// =============================================================================

/// Raw contents of the update form.
///
/// Every field is kept as text; the year is parsed during validation.
/// Missing fields deserialize as empty strings so they surface as
/// "cannot be blank" instead of a decoding failure.
///
/// The year may arrive as a string (forms) or a number (JSON), so a
/// serialized [`Book`] can be posted back as an update unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "year_as_text")]
    pub year: String,
    pub genre: String,
}

fn year_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Text(String),
        Whole(i64),
        Number(f64),
    }

    Ok(match RawYear::deserialize(deserializer)? {
        RawYear::Text(text) => text,
        RawYear::Whole(year) => year.to_string(),
        RawYear::Number(year) => year.to_string(),
    })
}

impl BookUpdate {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        BookUpdate {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
        }
    }
}

/// Raw contents of the remove form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookRemoval {
    pub title: String,
}

impl BookRemoval {
    pub fn new(title: impl Into<String>) -> Self {
        BookRemoval {
            title: title.into(),
        }
    }
}
