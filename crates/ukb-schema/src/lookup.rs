//! Field resolution against the data field properties and encoding
//! dictionary tables.
//!
//! A lookup only succeeds when each join stage matches exactly one row.
//! Missing and ambiguous keys both resolve to `None`; the caller never gets
//! an arbitrary pick among duplicates.

use tracing::{debug, info, info_span};

use ukb_model::{EncodingDictionary, FieldId, FieldProperty, FieldRecord, ValueType};

use crate::error::{Result, SchemaError};
use crate::paths::SchemaPaths;
use crate::reader::{TextEncoding, read_table};

/// Options for field lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Report unresolved fields at info level instead of debug.
    pub verbose: bool,
}

impl LookupOptions {
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Load the properties and encoding dictionary tables and resolve `field`.
///
/// # Errors
///
/// Fails when a table cannot be read or parsed, or when the matched field
/// carries a value type code outside [`ValueType`].
pub fn get_ukb_field(
    paths: &SchemaPaths,
    field: &FieldId,
    options: LookupOptions,
) -> Result<Option<FieldRecord>> {
    let properties: Vec<FieldProperty> =
        read_table(&paths.data_field_properties(), TextEncoding::Utf8)?;
    let encodings: Vec<EncodingDictionary> =
        read_table(&paths.encoding_dictionaries(), TextEncoding::Utf8)?;
    resolve_field(field, &properties, &encodings, options)
}

/// Resolve a batch of fields in input order.
///
/// Fields that do not resolve are left out of the result; the first error
/// aborts the batch.
pub fn lookup_fields(
    paths: &SchemaPaths,
    fields: &[FieldId],
    options: LookupOptions,
) -> Result<Vec<FieldRecord>> {
    let mut records = Vec::with_capacity(fields.len());
    for field in fields {
        let _span = info_span!("lookup", field = %field).entered();
        if let Some(record) = get_ukb_field(paths, field, options)? {
            records.push(record);
        }
    }
    info!(
        requested = fields.len(),
        resolved = records.len(),
        "lookup complete"
    );
    Ok(records)
}

/// Join `field` against already loaded tables.
pub fn resolve_field(
    field: &FieldId,
    properties: &[FieldProperty],
    encodings: &[EncodingDictionary],
    options: LookupOptions,
) -> Result<Option<FieldRecord>> {
    let field_id = field.field_id;

    let matches: Vec<&FieldProperty> = properties
        .iter()
        .filter(|row| row.field_id == field_id)
        .collect();
    let Some(property) = single(field_id, "fields", &matches, options) else {
        return Ok(None);
    };

    let dtype =
        ValueType::try_from(property.value_type).map_err(|_| SchemaError::UnknownValueType {
            field_id,
            code: property.value_type,
        })?;

    let matches: Vec<&EncodingDictionary> = encodings
        .iter()
        .filter(|row| row.encoding_id == property.encoding_id)
        .collect();
    let Some(encoding) = single(field_id, "encodings", &matches, options) else {
        return Ok(None);
    };

    Ok(Some(FieldRecord {
        field_id,
        title: property.title.clone(),
        dtype,
        categories: encoding.category_count(),
        encoding_id: property.encoding_id,
        description: property.notes.clone(),
    }))
}

fn single<'a, T>(
    field_id: u32,
    kind: &str,
    matches: &[&'a T],
    options: LookupOptions,
) -> Option<&'a T> {
    if let [row] = matches {
        return Some(*row);
    }
    report(options, &unresolved_message(field_id, kind, matches.len()));
    None
}

/// Diagnostic for a join stage that matched `count` rows instead of one.
fn unresolved_message(field_id: u32, kind: &str, count: usize) -> String {
    if count == 0 {
        format!("No {kind} found for ID={field_id}")
    } else {
        format!("Multiple {kind} ({count}) found for the same ID={field_id}")
    }
}

fn report(options: LookupOptions, message: &str) {
    if options.verbose {
        info!("{message}");
    } else {
        debug!("{message}");
    }
}
