use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Error type for snptf operations.
///
/// None of these are recoverable per record: a variant that cannot be
/// processed aborts the whole batch instead of being reported as "no effect".
#[derive(Error, Debug)]
pub enum SnptfError {
    /// Reference or alternate allele is not a single base.
    #[error("Not a SNP ({name}): {reason}")]
    InvalidVariant { name: String, reason: String },

    /// External scanner exited unsuccessfully.
    #[error("Failed to run {tool} ({status}): {stderr}")]
    ScannerFailure {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    /// External scanner produced a line we could not interpret.
    #[error("Unexpected {tool} output line '{line}': {reason}")]
    ScannerOutput {
        tool: String,
        line: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Can't fetch reference sequence: {0}")]
    ReferenceFetch(String),

    #[error("Malformed VCF line '{line}': {reason}")]
    VcfParse { line: String, reason: String },

    #[error("Can't parse config file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type alias for snptf operations.
pub type Result<T> = std::result::Result<T, SnptfError>;
