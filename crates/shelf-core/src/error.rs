//! # Error Types
//!
//! Domain-specific error types for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelf-core errors (this file)                                         │
//! │  ├── ValidationError   - One field constraint violated                 │
//! │  ├── ValidationErrors  - Every violation found in one submission       │
//! │  └── CoreError         - Validation | InvalidField | NotFound          │
//! │                                                                         │
//! │  shelf-web errors (app)                                                │
//! │  └── ApiError          - What the browser / JSON client sees           │
//! │                                                                         │
//! │  Flow: ValidationError → ValidationErrors → CoreError → ApiError       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither kind is fatal. Both leave the registry untouched and are shown to
//! the user as a transient status message.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Registry operation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// One or more field constraints were violated.
    ///
    /// Never caused by a missing record.
    #[error("Validation errors: {0}")]
    Validation(ValidationErrors),

    /// A single field rejected on its own, shown without the prefix.
    ///
    /// Used by remove, which only checks the title.
    #[error(transparent)]
    InvalidField(ValidationError),

    /// No record matches the given title.
    ///
    /// ## When This Occurs
    /// - Update of a title that was never in the list
    /// - Second removal of the same title
    #[error("Book with title \"{title}\" not found")]
    NotFound { title: String },
}

impl CoreError {
    /// Creates a not found error for a (trimmed) title.
    pub fn not_found(title: &str) -> Self {
        CoreError::NotFound {
            title: title.trim().to_string(),
        }
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors)
    }
}

impl From<ValidationError> for CoreError {
    fn from(error: ValidationError) -> Self {
        CoreError::InvalidField(error)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field constraint violation.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    #[error("{field} cannot be blank")]
    Blank { field: Field },

    /// The year is not a whole number, or lies outside the accepted range.
    #[error("Year must be a valid number between {min} and {max}")]
    InvalidYear { min: i32, max: i32 },
}

/// Fields of a book form, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Genre,
    Year,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Genre => "Genre",
            Field::Year => "Year",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Collected Validation Errors
// =============================================================================

/// Every violation found in one submission.
///
/// Displays as the individual messages joined with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Returns true if no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the user-facing messages in validation order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Converts into `Ok(())` when empty, or `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        ValidationErrors(errors)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
