//! # Book Registry
//!
//! The ordered, in-memory collection of books and the operations the forms
//! drive against it.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry Operations                                  │
//! │                                                                         │
//! │  Form                 Operation               Registry Change           │
//! │  ────                 ─────────               ───────────────           │
//! │                                                                         │
//! │  Update submit ──────► update() ─────────────► book.author/year/genre   │
//! │                         1. validate (all)                               │
//! │                         2. find_by_title                                │
//! │                         3. mutate in place                              │
//! │                                                                         │
//! │  Remove submit ──────► remove() ─────────────► books.retain(..)         │
//! │                         1. title not blank                              │
//! │                         2. drop every match                             │
//! │                         3. nothing dropped → NotFound                   │
//! │                                                                         │
//! │  NOTE: validation runs before any mutation, so a failed operation       │
//! │        never leaves the registry half-changed.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{seed_books, Book, BookUpdate};
use crate::validation::{validate_book, validate_removal_title, validate_year};

/// The book list.
///
/// ## Invariants
/// - Insertion order is display order
/// - Every record written by [`BookRegistry::update`] passed validation
/// - Titles are assumed unique (case/whitespace-insensitive), not enforced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookRegistry {
    books: Vec<Book>,
}

impl BookRegistry {
    /// Creates a registry holding `books` in the given order.
    pub fn new(books: Vec<Book>) -> Self {
        BookRegistry { books }
    }

    /// Creates a registry holding the three seed books.
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    /// Returns the books in display order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Checks if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Finds the first book whose title matches, ignoring case and
    /// surrounding whitespace.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.matches_title(title))
    }

    fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.matches_title(title))
    }

    /// Updates author, year and genre of the book named by `input.title`.
    ///
    /// ## Behavior
    /// - Any validation failure: `CoreError::Validation` with every message
    /// - No matching title: `CoreError::NotFound`
    /// - Otherwise the matched record is changed in place; its title is kept
    ///
    /// ## Returns
    /// The updated record.
    pub fn update(&mut self, input: &BookUpdate) -> CoreResult<&Book> {
        validate_book(input).into_result()?;
        let year = validate_year(&input.year)?;

        let book = self
            .find_by_title_mut(&input.title)
            .ok_or_else(|| CoreError::not_found(&input.title))?;

        book.author = input.author.trim().to_string();
        book.year = year;
        book.genre = input.genre.trim().to_string();

        Ok(&*book)
    }

    /// Removes every book whose title matches.
    ///
    /// ## Returns
    /// - `Ok(n)` with the number of records dropped (at least 1)
    /// - `Err(CoreError::InvalidField)` if the title is blank
    /// - `Err(CoreError::NotFound)` if nothing matched
    pub fn remove(&mut self, title: &str) -> CoreResult<usize> {
        validate_removal_title(title)?;

        let initial_len = self.books.len();
        self.books.retain(|b| !b.matches_title(title));

        match initial_len - self.books.len() {
            0 => Err(CoreError::not_found(title)),
            removed => Ok(removed),
        }
    }
}
