//! UK Biobank field identifiers.
//!
//! Data columns in a UK Biobank extract are named `FIELD-INSTANCE.ARRAY`,
//! e.g. `84-0.1`. Reference tables are keyed on the field alone, so only
//! [`FieldId::field_id`] takes part in lookups.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// `84` (field), `84-0` (field-instance), `84-0.1` (field-instance.array).
static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:-(\d+))?(?:\.(\d+))?$").expect("Invalid field identifier regex")
});

/// A field, with optional instance and array qualifiers.
///
/// Instance and array are kept as the digit strings found in the column
/// name. They are not used by any lookup yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId {
    pub field_id: u32,
    pub instance_id: Option<String>,
    pub array_id: Option<String>,
}

impl FieldId {
    /// A bare field with no instance or array qualifier.
    pub fn new(field_id: u32) -> Self {
        Self {
            field_id,
            instance_id: None,
            array_id: None,
        }
    }

    /// Parse a column name such as `84`, `84-0` or `84-0.1`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidFieldId {
            input: input.to_string(),
        };
        let captures = FIELD_PATTERN.captures(input).ok_or_else(invalid)?;
        let field_id = captures[1].parse::<u32>().map_err(|_| invalid())?;
        Ok(Self {
            field_id,
            instance_id: captures.get(2).map(|m| m.as_str().to_string()),
            array_id: captures.get(3).map(|m| m.as_str().to_string()),
        })
    }
}

impl From<u32> for FieldId {
    fn from(field_id: u32) -> Self {
        Self::new(field_id)
    }
}

impl FromStr for FieldId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_id)?;
        if let Some(instance) = &self.instance_id {
            write!(f, "-{instance}")?;
        }
        if let Some(array) = &self.array_id {
            write!(f, ".{array}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_field() {
        let field = FieldId::parse("84").unwrap();
        assert_eq!(field, FieldId::new(84));
    }

    #[test]
    fn parses_instance_and_array() {
        let field = FieldId::parse("84-0.1").unwrap();
        assert_eq!(field.field_id, 84);
        assert_eq!(field.instance_id.as_deref(), Some("0"));
        assert_eq!(field.array_id.as_deref(), Some("1"));
    }

    #[test]
    fn keeps_leading_zeros_in_qualifiers() {
        let field = FieldId::parse("20002-00.07").unwrap();
        assert_eq!(field.instance_id.as_deref(), Some("00"));
        assert_eq!(field.array_id.as_deref(), Some("07"));
    }

    #[test]
    fn parses_array_without_instance() {
        let field = FieldId::parse("41270.3").unwrap();
        assert_eq!(field.field_id, 41270);
        assert_eq!(field.instance_id, None);
        assert_eq!(field.array_id.as_deref(), Some("3"));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for input in ["", "eid", "-1", "84-", "84-0.", "84a", " 84", "99999999999"] {
            let err = FieldId::parse(input).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidFieldId { .. }),
                "{input}: {err}"
            );
        }
    }

    #[test]
    fn displays_original_form() {
        assert_eq!(FieldId::parse("84-0.1").unwrap().to_string(), "84-0.1");
        assert_eq!(FieldId::from(4).to_string(), "4");
    }
}
