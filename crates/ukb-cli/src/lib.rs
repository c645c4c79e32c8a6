//! CLI library components for the UK Biobank schema tools.

pub mod logging;
pub mod output;
