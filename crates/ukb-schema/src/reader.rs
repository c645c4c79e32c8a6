//! Tab-separated table loading.
//!
//! Showcase exports are TSV with a header row. The data field properties and
//! encoding dictionary exports are UTF-8; the encoding value exports are
//! Latin-1.

use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, SchemaError};

/// Character encoding of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1 text, decoded as windows-1252.
    ///
    /// Bytes 0x80-0x9F become the windows-1252 punctuation (0x96 is `–`,
    /// U+2013) rather than the C1 control characters strict ISO-8859-1
    /// would give.
    Latin1,
}

/// Read every row of a TSV file into `T`.
///
/// Columns are matched by header name; columns `T` does not name are skipped.
pub fn read_table<T: DeserializeOwned>(path: &Path, encoding: TextEncoding) -> Result<Vec<T>> {
    let bytes = std::fs::read(path).map_err(|e| SchemaError::io(path, e))?;
    let text = decode(path, &bytes, encoding);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result.map_err(|e| SchemaError::csv(path, e))?);
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}

fn decode(path: &Path, bytes: &[u8], encoding: TextEncoding) -> String {
    let (text, had_errors) = match encoding {
        TextEncoding::Utf8 => UTF_8.decode_with_bom_removal(bytes),
        TextEncoding::Latin1 => WINDOWS_1252.decode_without_bom_handling(bytes),
    };
    if had_errors {
        warn!(
            path = %path.display(),
            ?encoding,
            "table contains malformed byte sequences"
        );
    }
    text.into_owned()
}
