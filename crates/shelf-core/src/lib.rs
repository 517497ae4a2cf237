//! # shelf-core: Pure Book Registry Logic
//!
//! This crate holds everything the book list editor *decides*: which input
//! is valid, which record a title refers to, how a record changes, and what
//! the table looks like afterwards. It never touches the network, the file
//! system or a clock source it doesn't receive from the caller.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Browser (HTML forms, table)                     │   │
//! │  │      Update form ──► Remove form ──► Books table ──► Status     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP (form posts / JSON)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shelf-web commands                           │   │
//! │  │        update_book, remove_book, list_books, index_page         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shelf-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ registry  │  │   view    │  │ validation│  │   │
//! │  │   │   Book    │  │ find/upd/ │  │ TableView │  │  collect  │  │   │
//! │  │   │  inputs   │  │  remove   │  │  escaping │  │  all errs │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Book record and raw form inputs
//! - [`validation`] - Field checks that collect every failure
//! - [`registry`] - The ordered book collection and its operations
//! - [`view`] - Pure projection of the registry into table rows
//! - [`status`] - Transient status line model with generation tickets
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::{BookRegistry, BookUpdate};
//!
//! let mut registry = BookRegistry::seeded();
//!
//! let update = BookUpdate::new("1984", "G. Orwell", "1949", "Dystopian");
//! registry.update(&update).unwrap();
//!
//! let book = registry.find_by_title(" 1984 ").unwrap();
//! assert_eq!(book.author, "G. Orwell");
//!
//! registry.remove("the great gatsby").unwrap();
//! assert_eq!(registry.len(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod registry;
pub mod status;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, Field, ValidationError, ValidationErrors};
pub use registry::BookRegistry;
pub use status::{StatusKind, StatusLine, StatusMessage, StatusTicket};
pub use types::{Book, BookRemoval, BookUpdate};
pub use view::{render, TableRow, TableView};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Earliest publication year accepted by validation (inclusive).
pub const MIN_YEAR: i32 = 0;

/// Latest publication year accepted by validation (inclusive).
pub const MAX_YEAR: i32 = 3000;

/// Default number of seconds a status message stays visible.
pub const DEFAULT_STATUS_CLEAR_SECS: u64 = 5;

/// Text of the single row shown when the registry is empty.
pub const EMPTY_TABLE_MESSAGE: &str = "No books in the list";
