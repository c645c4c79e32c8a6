//! Rows of the Showcase schema tables.
//!
//! Each struct names only the columns the lookups read; any other columns
//! in the exported files are ignored on load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding dictionary title reserved for fields without an encoding.
pub const NOT_ENCODED: &str = "NOT-ENCODED";

/// A row of `data_field_properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProperty {
    pub field_id: u32,
    pub title: String,
    pub value_type: i64,
    pub encoding_id: u32,
    #[serde(default)]
    pub notes: String,
}

/// A row of `encoding_dictionaries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingDictionary {
    pub encoding_id: u32,
    pub title: String,
    pub num_members: u64,
}

impl EncodingDictionary {
    pub fn is_not_encoded(&self) -> bool {
        self.title == NOT_ENCODED
    }

    /// Number of categories a field using this encoding can take.
    pub fn category_count(&self) -> u64 {
        if self.is_not_encoded() {
            0
        } else {
            self.num_members
        }
    }
}

/// A row of any of the `values_for_*_encodings` tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingValueRow {
    pub encoding_id: u32,
    pub value: String,
}

/// The tables holding permitted encoding values, one per encoding class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingTable {
    HierarchicalInteger,
    HierarchicalString,
    SimpleInteger,
    SimpleString,
    SimpleDate,
    SimpleTime,
    SimpleReal,
}

impl EncodingTable {
    /// Lookup order. The first table holding an encoding wins.
    pub const SCAN_ORDER: [EncodingTable; 7] = [
        EncodingTable::HierarchicalInteger,
        EncodingTable::HierarchicalString,
        EncodingTable::SimpleInteger,
        EncodingTable::SimpleString,
        EncodingTable::SimpleDate,
        EncodingTable::SimpleTime,
        EncodingTable::SimpleReal,
    ];

    /// File name of the table's Showcase export.
    pub const fn file_name(&self) -> &'static str {
        match self {
            EncodingTable::HierarchicalInteger => "values_for_hierarchical_integer_encodings.txt",
            EncodingTable::HierarchicalString => "values_for_hierarchical_string_encodings.txt",
            EncodingTable::SimpleInteger => "values_for_simple_integer_encodings.txt",
            EncodingTable::SimpleString => "values_for_simple_string_encodings.txt",
            EncodingTable::SimpleDate => "values_for_simple_date_encodings.txt",
            EncodingTable::SimpleTime => "values_for_simple_time_encodings.txt",
            EncodingTable::SimpleReal => "values_for_simple_real_(floating-point)_encodings.txt",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            EncodingTable::HierarchicalInteger => "hierarchical integer",
            EncodingTable::HierarchicalString => "hierarchical string",
            EncodingTable::SimpleInteger => "simple integer",
            EncodingTable::SimpleString => "simple string",
            EncodingTable::SimpleDate => "simple date",
            EncodingTable::SimpleTime => "simple time",
            EncodingTable::SimpleReal => "simple real",
        }
    }

    pub const fn is_hierarchical(&self) -> bool {
        matches!(
            self,
            EncodingTable::HierarchicalInteger | EncodingTable::HierarchicalString
        )
    }
}

impl fmt::Display for EncodingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(title: &str, num_members: u64) -> EncodingDictionary {
        EncodingDictionary {
            encoding_id: 7,
            title: title.to_string(),
            num_members,
        }
    }

    #[test]
    fn not_encoded_has_no_categories() {
        assert_eq!(dictionary(NOT_ENCODED, 12).category_count(), 0);
    }

    #[test]
    fn encoded_uses_member_count() {
        assert_eq!(dictionary("Yes/No", 2).category_count(), 2);
    }

    #[test]
    fn scan_order_covers_every_table_once() {
        let mut names: Vec<_> = EncodingTable::SCAN_ORDER
            .iter()
            .map(|table| table.file_name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
        assert!(EncodingTable::SCAN_ORDER[0].is_hierarchical());
        assert!(EncodingTable::SCAN_ORDER[1].is_hierarchical());
        assert!(!EncodingTable::SCAN_ORDER[2].is_hierarchical());
    }
}
