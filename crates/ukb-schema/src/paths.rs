//! Schema directory path resolution.

use std::path::{Path, PathBuf};

use ukb_model::EncodingTable;

/// Environment variable for overriding the schema directory.
pub const SCHEMA_DIR_ENV_VAR: &str = "UKB_SCHEMA_DIR";

/// Schema directory used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_SCHEMA_DIR: &str = "schemas";

const DATA_FIELD_PROPERTIES: &str = "data_field_properties.txt";
const ENCODING_DICTIONARIES: &str = "encoding_dictionaries.txt";

/// Locations of the Showcase tables inside a schema directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPaths {
    root: PathBuf,
}

impl SchemaPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the schema directory.
    ///
    /// Resolution order:
    /// 1. `explicit` (e.g. a `--schema-dir` flag)
    /// 2. `UKB_SCHEMA_DIR` environment variable
    /// 3. `schemas/` relative to the working directory
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(root) = explicit {
            return Self::new(root);
        }
        if let Ok(root) = std::env::var(SCHEMA_DIR_ENV_VAR) {
            return Self::new(root);
        }
        Self::new(DEFAULT_SCHEMA_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_field_properties(&self) -> PathBuf {
        self.root.join(DATA_FIELD_PROPERTIES)
    }

    pub fn encoding_dictionaries(&self) -> PathBuf {
        self.root.join(ENCODING_DICTIONARIES)
    }

    pub fn encoding_values(&self, table: EncodingTable) -> PathBuf {
        self.root.join(table.file_name())
    }
}

impl Default for SchemaPaths {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        let paths = SchemaPaths::resolve(Some(Path::new("/data/ukb")));
        assert_eq!(
            paths.data_field_properties(),
            PathBuf::from("/data/ukb/data_field_properties.txt")
        );
        assert_eq!(
            paths.encoding_values(EncodingTable::SimpleReal),
            PathBuf::from("/data/ukb/values_for_simple_real_(floating-point)_encodings.txt")
        );
    }
}
