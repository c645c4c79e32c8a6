use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ukb_fetch::{FetchConfig, HttpSchemaSource, fetch_schemas, today};
use ukb_schema::{LookupOptions, SchemaPaths, find_encoding_values, lookup_fields};

use crate::cli::{FetchArgs, LookupArgs, ValuesArgs};
use ukb_cli::output::{fetch_table, field_table, values_table, write_delimited};

/// Resolve every requested field, dropping the ones that do not resolve.
pub fn run_lookup(args: &LookupArgs, paths: &SchemaPaths, options: LookupOptions) -> Result<()> {
    let records = lookup_fields(paths, &args.fields, options).context("look up fields")?;

    if args.print {
        println!("{}", field_table(&records));
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_delimited(&records, &mut handle).context("write lookup output")?;
        handle.flush().context("flush stdout")?;
    }
    Ok(())
}

pub fn run_values(args: &ValuesArgs, paths: &SchemaPaths) -> Result<()> {
    let Some(found) = find_encoding_values(paths, args.encoding_id)
        .with_context(|| format!("look up encoding {}", args.encoding_id))?
    else {
        info!(encoding_id = args.encoding_id, "no values found");
        return Ok(());
    };

    if args.print {
        println!("{}", values_table(&found));
    } else {
        for value in &found.values {
            println!("{value}");
        }
    }
    Ok(())
}

pub fn run_fetch(args: &FetchArgs, paths: &SchemaPaths) -> Result<()> {
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| paths.root().to_path_buf());
    let config = FetchConfig::default()
        .with_out_dir(out_dir)
        .with_timeout(args.timeout.map(Duration::from_secs));
    let _span = info_span!("fetch", out_dir = %config.out_dir.display()).entered();

    let source = HttpSchemaSource::new(config.clone()).context("build HTTP client")?;
    let written = fetch_schemas(&source, &config.out_dir, today()).context("fetch schemas")?;
    println!("{}", fetch_table(&written));
    Ok(())
}
