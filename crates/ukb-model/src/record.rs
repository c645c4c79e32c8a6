use serde::{Deserialize, Serialize};

use crate::value_type::ValueType;

/// A resolved field: the properties row joined to its encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub field_id: u32,
    pub title: String,
    pub dtype: ValueType,
    pub categories: u64,
    pub encoding_id: u32,
    pub description: String,
}

impl FieldRecord {
    /// Column names in output order.
    pub const HEADER: [&'static str; 6] = [
        "field_id",
        "title",
        "dtype",
        "categories",
        "encoding_id",
        "description",
    ];

    /// Values in [`FieldRecord::HEADER`] order.
    pub fn values(&self) -> [String; 6] {
        [
            self.field_id.to_string(),
            self.title.clone(),
            self.dtype.to_string(),
            self.categories.to_string(),
            self.encoding_id.to_string(),
            self.description.clone(),
        ]
    }
}
