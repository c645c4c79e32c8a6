#![deny(unsafe_code)]

//! Downloads the UK Biobank Showcase schema tables.
//!
//! The Showcase download page links every schema as `schema.cgi?id=N`.
//! Each linked schema is downloaded as tab-separated text and written twice:
//! once with today's date in the file name and once as the undated latest
//! copy.

pub mod config;
pub mod error;
pub mod fetch;
pub mod index;
pub mod source;

pub use config::{BIOBANK_DOMAIN, DEFAULT_OUT_DIR, FetchConfig};
pub use error::{FetchError, Result};
pub use fetch::{WrittenSchema, fetch_schemas, today, write_schema};
pub use index::{SCHEMA_LINK_MARKER, SchemaLink, describe, parse_schema_links};
pub use source::{HttpSchemaSource, SchemaSource};
