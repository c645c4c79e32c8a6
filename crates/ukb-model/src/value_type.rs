//! Showcase value type codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;

/// Data type of a field, as coded in the `value_type` column of the
/// data field properties table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    /// Integer (11).
    Int,
    /// Categorical, single answer (21).
    CatSing,
    /// Categorical, multiple answers (22).
    CatMult,
    /// Continuous (31).
    Float,
    /// Free text (41).
    Text,
    /// Date (51).
    Date,
    /// Time (61).
    Time,
}

impl ValueType {
    pub const ALL: [ValueType; 7] = [
        ValueType::Int,
        ValueType::CatSing,
        ValueType::CatMult,
        ValueType::Float,
        ValueType::Text,
        ValueType::Date,
        ValueType::Time,
    ];

    /// Map a Showcase code to its type, `None` for codes outside the table.
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            11 => Some(ValueType::Int),
            21 => Some(ValueType::CatSing),
            22 => Some(ValueType::CatMult),
            31 => Some(ValueType::Float),
            41 => Some(ValueType::Text),
            51 => Some(ValueType::Date),
            61 => Some(ValueType::Time),
            _ => None,
        }
    }

    pub const fn code(&self) -> i64 {
        match self {
            ValueType::Int => 11,
            ValueType::CatSing => 21,
            ValueType::CatMult => 22,
            ValueType::Float => 31,
            ValueType::Text => 41,
            ValueType::Date => 51,
            ValueType::Time => 61,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Int => "INT",
            ValueType::CatSing => "CAT_SING",
            ValueType::CatMult => "CAT_MULT",
            ValueType::Float => "FLOAT",
            ValueType::Text => "TEXT",
            ValueType::Date => "DATE",
            ValueType::Time => "TIME",
        }
    }

    pub const fn is_categorical(&self) -> bool {
        matches!(self, ValueType::CatSing | ValueType::CatMult)
    }
}

impl TryFrom<i64> for ValueType {
    type Error = ModelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(ModelError::UnknownValueType { code })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
