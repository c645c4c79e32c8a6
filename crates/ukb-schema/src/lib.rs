#![deny(unsafe_code)]

//! Lookups over a local copy of the UK Biobank Showcase schema tables.
//!
//! Every lookup reads its tables from disk when called. Nothing is cached
//! between calls, so the result only depends on the files and the key.

pub mod error;
pub mod lookup;
pub mod paths;
pub mod reader;
pub mod values;

pub use crate::error::{Result, SchemaError};
pub use crate::lookup::{LookupOptions, get_ukb_field, lookup_fields, resolve_field};
pub use crate::paths::{DEFAULT_SCHEMA_DIR, SCHEMA_DIR_ENV_VAR, SchemaPaths};
pub use crate::reader::{TextEncoding, read_table};
pub use crate::values::{
    EncodingValues, find_encoding_values, get_encoding_values, select_encoding_values,
};
