//! Component name validation

use thiserror::Error;

/// Reason a candidate component name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("component name cannot be empty")]
    Empty,

    #[error("component name can only contain alphanumeric characters")]
    InvalidCharacters,
}

/// Validate a component name
///
/// The trimmed name must be one or more ASCII alphanumeric segments joined by
/// single hyphens, e.g. `card`, `foo-bar2`. Leading, trailing and doubled
/// hyphens are rejected.
pub fn validate_component_name(raw: &str) -> Result<(), NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let well_formed = name
        .split('-')
        .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));

    if well_formed {
        Ok(())
    } else {
        Err(NameError::InvalidCharacters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_names_rejected() {
        assert_eq!(validate_component_name(""), Err(NameError::Empty));
        assert_eq!(validate_component_name("   "), Err(NameError::Empty));
    }

    #[test]
    fn test_hyphenated_names_accepted() {
        assert!(validate_component_name("card").is_ok());
        assert!(validate_component_name("foo-bar2").is_ok());
        assert!(validate_component_name("Nav-Bar-Item").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert!(validate_component_name("  card \n").is_ok());
    }

    #[test]
    fn test_malformed_names_rejected() {
        for name in ["My Name", "-foo", "foo-", "foo--bar", "foo_bar", "café", "a.b"] {
            assert_eq!(
                validate_component_name(name),
                Err(NameError::InvalidCharacters),
                "expected {:?} to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(NameError::Empty.to_string(), "component name cannot be empty");
        assert_eq!(
            NameError::InvalidCharacters.to_string(),
            "component name can only contain alphanumeric characters"
        );
    }
}
