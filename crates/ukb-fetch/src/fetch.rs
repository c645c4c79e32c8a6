//! The fetch run: list schemas, download each, write dated and latest copies.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::error::{FetchError, Result};
use crate::index::parse_schema_links;
use crate::source::SchemaSource;

/// Files written for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSchema {
    pub schema_id: u32,
    pub description: String,
    pub dated: PathBuf,
    pub latest: PathBuf,
    pub bytes: usize,
}

/// Today's date in local time, used to stamp dated copies.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Download every schema listed by `source` into `out_dir`.
///
/// Schemas are fetched one at a time in page order. The first failure stops
/// the run; files already written are left in place.
pub fn fetch_schemas<S: SchemaSource>(
    source: &S,
    out_dir: &Path,
    date: NaiveDate,
) -> Result<Vec<WrittenSchema>> {
    let links = parse_schema_links(&source.index()?)?;
    info!(count = links.len(), "found schema links");
    if links.is_empty() {
        warn!("download page lists no schemas");
    }

    std::fs::create_dir_all(out_dir).map_err(|source| FetchError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(links.len());
    for link in links {
        let body = source.download(link.schema_id)?;
        written.push(write_schema(
            out_dir,
            link.schema_id,
            &link.description,
            date,
            &body,
        )?);
    }
    Ok(written)
}

/// Write `body` to `<description>.<YYYYMMDD>.txt` and `<description>.txt`.
///
/// The undated copy is always overwritten.
pub fn write_schema(
    out_dir: &Path,
    schema_id: u32,
    description: &str,
    date: NaiveDate,
    body: &[u8],
) -> Result<WrittenSchema> {
    let stamp = date.format("%Y%m%d").to_string();
    info!("Writing schema {schema_id} (dates {stamp} and undated)");

    let dated = out_dir.join(format!("{description}.{stamp}.txt"));
    let latest = out_dir.join(format!("{description}.txt"));
    for path in [&dated, &latest] {
        std::fs::write(path, body).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?;
    }

    Ok(WrittenSchema {
        schema_id,
        description: description.to_string(),
        dated,
        latest,
        bytes: body.len(),
    })
}
