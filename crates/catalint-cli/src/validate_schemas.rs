//! # validate-schemas Subcommand
//!
//! Delegated schema validation: each input file must parse as JSON and
//! compile as a Draft 2020-12 JSON Schema. All semantic judgment belongs
//! to the `jsonschema` crate; this driver only reads files and reports
//! `OK`/`FAIL` lines.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use catalint_schema::SchemaCompiler;

/// Arguments for the `catalint validate-schemas` subcommand.
#[derive(Args, Debug)]
pub struct ValidateSchemasArgs {
    /// Schema files to compile.
    #[arg(value_name = "FILES")]
    pub filenames: Vec<PathBuf>,
}

/// Execute the validate-schemas subcommand.
///
/// Returns exit code 0 when every file compiles, 1 otherwise.
pub fn run_validate_schemas(args: &ValidateSchemasArgs, repo_root: &Path) -> Result<u8> {
    let compiler = SchemaCompiler::new();

    let mut all_valid = true;
    for file in &args.filenames {
        let resolved = crate::resolve_path(file, repo_root);
        let text = std::fs::read_to_string(&resolved)
            .with_context(|| format!("cannot read schema file {}", resolved.display()))?;

        let failure = match serde_json::from_str::<Value>(&text) {
            Err(e) => Some(format!("Error parsing JSON: {e}")),
            Ok(document) => compiler.compile(&document).err().map(|e| e.to_string()),
        };

        match failure {
            None => println!("OK: {}", file.display()),
            Some(reason) => {
                println!("FAIL: {} — {}", file.display(), reason);
                all_valid = false;
            }
        }
    }

    Ok(if all_valid { 0 } else { 1 })
}
