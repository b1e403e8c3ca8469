//! Running the external command line tools.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use snptf_core::{Result, SnptfError};

///
/// Run `program` with `args` and return its stdout.
///
/// Arguments go straight to the process, never through a shell. A non-zero
/// exit status becomes a `ScannerFailure` carrying the tool's stderr.
///
/// # Arguments
/// - tool: name used in error messages
/// - program: executable, either a path or a name resolved through `PATH`
/// - args: arguments in order
///
pub fn run_tool<S: AsRef<OsStr>>(tool: &str, program: &Path, args: &[S]) -> Result<String> {
    log::trace!(
        "{} {}",
        program.display(),
        args.iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to launch {} ({}): {}", tool, program.display(), e),
            )
        })?;

    if !output.status.success() {
        return Err(SnptfError::ScannerFailure {
            tool: tool.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
