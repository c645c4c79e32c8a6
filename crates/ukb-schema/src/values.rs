//! Permitted values of an encoding.
//!
//! Values live in one table per encoding class. Tables are scanned in
//! [`EncodingTable::SCAN_ORDER`] and the first one holding the encoding is
//! the only one read; values are never merged across tables.

use tracing::debug;

use ukb_model::{EncodingTable, EncodingValueRow};

use crate::error::Result;
use crate::paths::SchemaPaths;
use crate::reader::{TextEncoding, read_table};

/// Values of one encoding, with the table they were found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingValues {
    pub encoding_id: u32,
    pub table: EncodingTable,
    pub values: Vec<String>,
}

/// Values for `encoding_id` in file order, or an empty list when no table
/// holds the encoding.
pub fn get_encoding_values(paths: &SchemaPaths, encoding_id: u32) -> Result<Vec<String>> {
    Ok(find_encoding_values(paths, encoding_id)?
        .map(|found| found.values)
        .unwrap_or_default())
}

/// Scan the value tables for `encoding_id`.
pub fn find_encoding_values(
    paths: &SchemaPaths,
    encoding_id: u32,
) -> Result<Option<EncodingValues>> {
    for table in EncodingTable::SCAN_ORDER {
        let rows: Vec<EncodingValueRow> =
            read_table(&paths.encoding_values(table), TextEncoding::Latin1)?;
        if let Some(values) = select_encoding_values(&rows, encoding_id) {
            debug!(encoding_id, table = %table, count = values.len(), "encoding found");
            return Ok(Some(EncodingValues {
                encoding_id,
                table,
                values,
            }));
        }
    }
    debug!(encoding_id, "encoding not found in any value table");
    Ok(None)
}

/// Values of `rows` belonging to `encoding_id`, `None` if there are none.
pub fn select_encoding_values(rows: &[EncodingValueRow], encoding_id: u32) -> Option<Vec<String>> {
    let values: Vec<String> = rows
        .iter()
        .filter(|row| row.encoding_id == encoding_id)
        .map(|row| row.value.clone())
        .collect();
    if values.is_empty() { None } else { Some(values) }
}
