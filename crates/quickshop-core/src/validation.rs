//! # Validation Module
//!
//! Input validation for the few places QuickShop accepts free text.
//!
//! ## Usage
//! ```rust
//! use quickshop_core::validation::{validate_credentials, validate_search_query};
//!
//! assert!(validate_credentials("john@example.com", "password123").is_ok());
//! assert!(validate_credentials("", "password123").is_err());
//!
//! assert_eq!(validate_search_query("  tech ").unwrap(), "tech");
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_EMAIL_LEN: usize = 254;
const MAX_QUERY_LEN: usize = 100;

/// Checks that a login form is filled in.
///
/// ## Rules
/// - Email and password are both required (after trimming)
/// - Email is at most 254 characters
///
/// Credentials are never checked against anything: this is a prototype
/// login and any filled-in form succeeds.
pub fn validate_credentials(email: &str, password: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if password.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    Ok(())
}

/// Validates a store search query.
///
/// ## Rules
/// - Can be empty (matches every store)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates an id typed by the user (store or product id).
pub fn validate_id(field: &str, id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("admin@quickshop.com", "admin123").is_ok());

        assert_eq!(
            validate_credentials("  ", "admin123"),
            Err(ValidationError::Required {
                field: "email".to_string()
            })
        );
        assert_eq!(
            validate_credentials("john@example.com", ""),
            Err(ValidationError::Required {
                field: "password".to_string()
            })
        );
        assert!(validate_credentials(&"a".repeat(300), "pw").is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("").unwrap(), "");
        assert_eq!(validate_search_query("  mall ").unwrap(), "mall");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id("store id", " 2 ").unwrap(), "2");
        assert!(validate_id("store id", "admin1").is_ok());
        assert!(validate_id("store id", "").is_err());
        assert!(validate_id("store id", "has space").is_err());
    }
}
