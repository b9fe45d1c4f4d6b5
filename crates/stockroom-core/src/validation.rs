//! # Validation Module
//!
//! Input validation and raw-field parsing for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Presentation (out of scope)                               │
//! │  └── Immediate user feedback on obviously bad entries               │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Inventory facade / auth service                           │
//! │  └── THIS MODULE: parse raw strings exactly once, reject early      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── UNIQUE constraints (username, product name)                    │
//! │                                                                     │
//! │  Defense in depth: a ValidationError here means no statement is     │
//! │  ever issued against storage.                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{DEFAULT_LOW_STOCK_THRESHOLD, MAX_PRODUCT_NAME_LEN, MAX_USERNAME_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a username for registration.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
///
/// Usernames compare case-sensitively; no case folding happens here.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_username;
///
/// assert_eq!(validate_username("alice").unwrap(), "alice");
/// assert!(validate_username("   ").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<String> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required { field: "username" });
    }

    if username.len() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username",
            max: MAX_USERNAME_LEN,
        });
    }

    Ok(username.to_string())
}

/// Validates a password for registration.
///
/// ## Rules
/// - Must not be empty
///
/// No trimming: leading/trailing whitespace is legitimate password content.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(" Widget ").unwrap(), "Widget");
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Normalizes a category entry: trimmed, blank becomes `None`.
///
/// Category is optional, so there is nothing to reject.
pub fn normalize_category(category: &str) -> Option<String> {
    let category = category.trim();
    if category.is_empty() {
        None
    } else {
        Some(category.to_string())
    }
}

// =============================================================================
// Numeric Field Parsers
// =============================================================================
// These take the raw entry-field strings the presentation layer collects
// and produce typed values, or a ValidationError with a reason the caller
// can show verbatim.

/// Parses a price field into non-negative cents.
///
/// ## Rules
/// - Must parse as a decimal with at most two fractional digits
/// - Must not be negative (zero is allowed: free items exist)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_price;
///
/// assert_eq!(parse_price("9.99").unwrap().cents(), 999);
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("abc").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let price: Money = raw.parse().map_err(|_| ValidationError::NotANumber {
        field: "price",
        value: raw.trim().to_string(),
    })?;

    if price.is_negative() {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(price)
}

/// Parses a quantity field into a non-negative integer.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    parse_non_negative(raw, "quantity")
}

/// Parses a low-stock threshold field.
///
/// A blank field falls back to [`DEFAULT_LOW_STOCK_THRESHOLD`], matching
/// the schema default.
pub fn parse_threshold(raw: &str) -> ValidationResult<i64> {
    if raw.trim().is_empty() {
        return Ok(DEFAULT_LOW_STOCK_THRESHOLD);
    }

    parse_non_negative(raw, "low stock threshold")
}

fn parse_non_negative(raw: &str, field: &'static str) -> ValidationResult<i64> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: raw.trim().to_string(),
        })?;

    if value < 0 {
        return Err(ValidationError::Negative { field });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("alice").unwrap(), "alice");
        assert_eq!(validate_username("  bob  ").unwrap(), "bob");

        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("hunter2").is_ok());
        // Whitespace is content, not noise
        assert!(validate_password("  spaces  ").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Widget").unwrap(), "Widget");
        assert_eq!(validate_product_name("  Widget  ").unwrap(), "Widget");

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Tools"), Some("Tools".to_string()));
        assert_eq!(normalize_category("  Tools  "), Some("Tools".to_string()));
        assert_eq!(normalize_category(""), None);
        assert_eq!(normalize_category("   "), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99").unwrap().cents(), 999);
        assert_eq!(parse_price("0").unwrap().cents(), 0);
        assert_eq!(parse_price(" 12 ").unwrap().cents(), 1200);

        assert!(matches!(
            parse_price("-1"),
            Err(ValidationError::Negative { field: "price" })
        ));
        assert!(matches!(
            parse_price("abc"),
            Err(ValidationError::NotANumber { field: "price", .. })
        ));
        assert!(parse_price("").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);

        assert!(matches!(
            parse_quantity("-3"),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            parse_quantity("2.5"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_parse_threshold_defaults_when_blank() {
        assert_eq!(parse_threshold("").unwrap(), DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(parse_threshold("   ").unwrap(), DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(parse_threshold("25").unwrap(), 25);
        assert!(parse_threshold("-1").is_err());
        assert!(parse_threshold("ten").is_err());
    }
}
