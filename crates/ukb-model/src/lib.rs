//! Data model for UK Biobank Showcase schema tables.

pub mod error;
pub mod field;
pub mod record;
pub mod table;
pub mod value_type;

pub use error::{ModelError, Result};
pub use field::FieldId;
pub use record::FieldRecord;
pub use table::{EncodingDictionary, EncodingTable, EncodingValueRow, FieldProperty, NOT_ENCODED};
pub use value_type::ValueType;
