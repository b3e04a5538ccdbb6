//! # Subprocess Output Capture
//!
//! One captured-output helper shared by every git-facing call site. Stdout
//! is returned as UTF-8 text; any non-zero exit, spawn failure, or invalid
//! encoding becomes a structured [`GitError`].

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Error from a captured subprocess invocation.
#[derive(Error, Debug)]
pub enum GitError {
    /// The program could not be spawned at all (missing binary, bad dir).
    #[error("could not spawn `{command}`: {source}")]
    Spawn {
        /// The rendered command line.
        command: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        /// The rendered command line.
        command: String,
        /// Exit status code, `-1` when terminated by signal.
        status: i32,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// The program produced stdout that is not valid UTF-8.
    #[error("`{command}` produced non-UTF-8 output")]
    NonUtf8Output {
        /// The rendered command line.
        command: String,
    },
}

fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Run `program` with `args` in `dir` and return its captured stdout.
///
/// # Errors
///
/// Returns [`GitError::Spawn`] when the process cannot start,
/// [`GitError::CommandFailed`] on non-zero exit (with captured stderr),
/// and [`GitError::NonUtf8Output`] when stdout is not UTF-8.
pub fn cmd_output(program: &str, args: &[&str], dir: &Path) -> Result<String, GitError> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|source| GitError::Spawn {
            command: render_command(program, args),
            source,
        })?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: render_command(program, args),
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| GitError::NonUtf8Output {
        command: render_command(program, args),
    })
}
