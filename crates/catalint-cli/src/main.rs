//! # catalint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Each pre-commit hook is one subcommand; handlers return the process
//! exit code and `main` maps it onto `ExitCode`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use catalint_cli::check_match::{run_check_match, CheckMatchArgs};
use catalint_cli::check_schemas::{run_check_schemas, CheckSchemasArgs};
use catalint_cli::just_fail::{run_just_fail, JustFailArgs};
use catalint_cli::validate_schemas::{run_validate_schemas, ValidateSchemasArgs};
use catalint_cli::version_bump::{run_version_bump, VersionBumpArgs};

/// catalint — pre-commit hooks for JSON-Schema chart catalogs.
///
/// Lints chart value schemas for completeness, validates them as JSON
/// Schemas, and guards staged changes (chart version bumps, protected
/// files).
#[derive(Parser, Debug)]
#[command(name = "catalint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint schema files for structural completeness.
    CheckSchemas(CheckSchemasArgs),

    /// Validate that schema files compile as JSON Schemas.
    ValidateSchemas(ValidateSchemasArgs),

    /// Require a chart version bump alongside staged chart changes.
    VersionBump(VersionBumpArgs),

    /// Fail when any staged filename matches a pattern.
    CheckMatch(CheckMatchArgs),

    /// Fail unconditionally with a message per file.
    JustFail(JustFailArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Pre-commit runs hooks from the repository root; that directory
    // anchors file resolution and all git queries.
    let repo_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = match cli.command {
        Commands::CheckSchemas(args) => run_check_schemas(&args, &repo_root),
        Commands::ValidateSchemas(args) => run_validate_schemas(&args, &repo_root),
        Commands::VersionBump(args) => run_version_bump(&args, &repo_root),
        Commands::CheckMatch(args) => run_check_match(&args, &repo_root),
        Commands::JustFail(args) => run_just_fail(&args, &repo_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
