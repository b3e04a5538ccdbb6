//! # just-fail Subcommand
//!
//! Unconditional failure. Pre-commit file filters decide which files reach
//! this hook; anything that does gets the message and the commit is
//! rejected.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

/// Arguments for the `catalint just-fail` subcommand.
#[derive(Args, Debug)]
pub struct JustFailArgs {
    /// Files that triggered the hook.
    #[arg(value_name = "FILES")]
    pub filenames: Vec<PathBuf>,

    /// Warning message to emit; `{}` receives the filename.
    #[arg(long, default_value = crate::DEFAULT_PROTECTED_MESSAGE)]
    pub message: String,
}

/// Execute the just-fail subcommand. Always returns exit code 1.
pub fn run_just_fail(args: &JustFailArgs, _repo_root: &Path) -> Result<u8> {
    for file in &args.filenames {
        println!("{}", args.message.replace("{}", &file.to_string_lossy()));
    }
    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_always_fails() {
        let args = JustFailArgs {
            filenames: vec![PathBuf::from("protected.yaml")],
            message: crate::DEFAULT_PROTECTED_MESSAGE.to_string(),
        };
        assert_eq!(run_just_fail(&args, Path::new(".")).unwrap(), 1);
    }

    #[test]
    fn run_fails_even_with_no_files() {
        let args = JustFailArgs {
            filenames: Vec::new(),
            message: "nope".to_string(),
        };
        assert_eq!(run_just_fail(&args, Path::new(".")).unwrap(), 1);
    }
}
