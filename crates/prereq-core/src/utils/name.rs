//! Item name checks.
//!
//! Names are opaque string keys, but names loaded from catalog files must be
//! non-empty and free of surrounding whitespace so that `"A"` and `" A"` do
//! not silently become two different items.

use crate::error::{PrereqError, PrereqResult};

/// Check if a string is usable as an item name
pub fn is_valid_item_name(name: &str) -> bool {
    !name.is_empty() && name.trim() == name && !name.chars().any(char::is_control)
}

/// Validate an item name, reporting which catalog field it came from
pub fn validate_item_name(field: &str, name: &str) -> PrereqResult<()> {
    if is_valid_item_name(name) {
        Ok(())
    } else {
        Err(PrereqError::ConfigValidation {
            field: field.to_string(),
            reason: format!(
                "invalid item name {:?}: names must be non-empty without surrounding whitespace",
                name
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_item_name("A"));
        assert!(is_valid_item_name("Machine Learning Basics"));
        assert!(is_valid_item_name("cs-101"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_item_name(""));
        assert!(!is_valid_item_name(" A"));
        assert!(!is_valid_item_name("A\n"));
        assert!(!is_valid_item_name("A\tB"));
    }

    #[test]
    fn test_validate_reports_field() {
        let err = validate_item_name("courses.B.prerequisites", "").unwrap_err();
        assert!(err.to_string().contains("courses.B.prerequisites"));
    }
}
