//! # Validation Module
//!
//! Field checks for the update and remove forms.
//!
//! ## Collect, Don't Short-Circuit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_book(title="", author="", year="abc", genre="Fiction")        │
//! │       │                                                                 │
//! │       ├── title blank?  → "Title cannot be blank"                       │
//! │       ├── author blank? → "Author cannot be blank"                      │
//! │       ├── genre blank?  → (ok)                                          │
//! │       └── year          → "Year must be a valid number between 0 and…" │
//! │                                                                         │
//! │  All failures are returned together so the user fixes them in one go.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{Field, ValidationError, ValidationErrors};
use crate::types::BookUpdate;
use crate::{MAX_YEAR, MIN_YEAR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Checks that a required text field is not blank.
///
/// ## Example
/// ```rust
/// use shelf_core::error::Field;
/// use shelf_core::validation::validate_required;
///
/// assert!(validate_required(Field::Author, "Harper Lee").is_ok());
/// assert!(validate_required(Field::Author, "   ").is_err());
/// ```
pub fn validate_required(field: Field, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

/// Parses and range-checks a publication year.
///
/// ## Rules
/// - Blank → "Year cannot be blank"
/// - Not a whole number, or outside [`MIN_YEAR`]..=[`MAX_YEAR`] → range message
/// - `"1999.0"` and `"1e3"` are whole numbers; `"19.5"` is not
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_year;
///
/// assert_eq!(validate_year(" 1999 ").unwrap(), 1999);
/// assert!(validate_year("3001").is_err());
/// assert!(validate_year("abc").is_err());
/// ```
pub fn validate_year(year: &str) -> ValidationResult<i32> {
    let year = year.trim();

    if year.is_empty() {
        return Err(ValidationError::Blank { field: Field::Year });
    }

    let invalid = ValidationError::InvalidYear {
        min: MIN_YEAR,
        max: MAX_YEAR,
    };

    let parsed: f64 = year.parse().map_err(|_| invalid)?;
    if !parsed.is_finite() || parsed.fract() != 0.0 {
        return Err(invalid);
    }
    if !(f64::from(MIN_YEAR)..=f64::from(MAX_YEAR)).contains(&parsed) {
        return Err(invalid);
    }

    // Whole and within i32 range after the checks above
    Ok(parsed as i32)
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates an update form, collecting every violation.
///
/// Order: title, author, genre, year.
pub fn validate_book(input: &BookUpdate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for (field, value) in [
        (Field::Title, &input.title),
        (Field::Author, &input.author),
        (Field::Genre, &input.genre),
    ] {
        if let Err(e) = validate_required(field, value) {
            errors.push(e);
        }
    }

    if let Err(e) = validate_year(&input.year) {
        errors.push(e);
    }

    errors
}

/// Validates the title given to the remove form.
pub fn validate_removal_title(title: &str) -> ValidationResult<()> {
    validate_required(Field::Title, title)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(input: &BookUpdate) -> Vec<String> {
        validate_book(input).messages()
    }

    #[test]
    fn test_valid_book_has_no_errors() {
        let input = BookUpdate::new("1984", "George Orwell", "1949", "Dystopian");
        assert!(validate_book(&input).is_empty());
    }

    #[test]
    fn test_each_blank_field_is_reported() {
        let input = BookUpdate::new("  ", "Orwell", "1949", "Fiction");
        assert_eq!(messages(&input), ["Title cannot be blank"]);

        let input = BookUpdate::new("1984", "\t", "1949", "Fiction");
        assert_eq!(messages(&input), ["Author cannot be blank"]);

        let input = BookUpdate::new("1984", "Orwell", "1949", "");
        assert_eq!(messages(&input), ["Genre cannot be blank"]);

        let input = BookUpdate::new("1984", "Orwell", "", "Fiction");
        assert_eq!(messages(&input), ["Year cannot be blank"]);
    }

    #[test]
    fn test_all_failures_collected_together() {
        let input = BookUpdate::new("", " ", "abc", "");
        assert_eq!(
            messages(&input),
            [
                "Title cannot be blank",
                "Author cannot be blank",
                "Genre cannot be blank",
                "Year must be a valid number between 0 and 3000",
            ]
        );
    }

    #[test]
    fn test_validate_year() {
        assert_eq!(validate_year("1999").unwrap(), 1999);
        assert_eq!(validate_year("0").unwrap(), 0);
        assert_eq!(validate_year("3000").unwrap(), 3000);

        let range = ValidationError::InvalidYear { min: 0, max: 3000 };
        assert_eq!(validate_year("-1").unwrap_err(), range);
        assert_eq!(validate_year("3001").unwrap_err(), range);
        assert_eq!(validate_year("abc").unwrap_err(), range);
        assert_eq!(validate_year("19.5").unwrap_err(), range);
        assert_eq!(validate_year("99999999999999999999").unwrap_err(), range);
        assert_eq!(validate_year("NaN").unwrap_err(), range);
        assert_eq!(validate_year("inf").unwrap_err(), range);

        assert_eq!(
            validate_year("").unwrap_err(),
            ValidationError::Blank { field: Field::Year }
        );
    }

    #[test]
    fn test_validate_year_accepts_whole_number_notation() {
        assert_eq!(validate_year("1999.0").unwrap(), 1999);
        assert_eq!(validate_year(" 1e3 ").unwrap(), 1000);
        assert_eq!(validate_year("+1925").unwrap(), 1925);
        assert_eq!(validate_year("-0").unwrap(), 0);
    }

    #[test]
    fn test_validate_removal_title() {
        assert!(validate_removal_title("1984").is_ok());
        assert!(validate_removal_title("   ").is_err());
    }
}
