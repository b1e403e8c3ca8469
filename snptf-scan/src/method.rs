use std::fmt::{self, Display};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use snptf_core::SnptfError;

use crate::fimo::FimoScanner;
use crate::tfscan::TfscanScanner;
use crate::traits::MotifScanner;

/// Which external tool backs the motif scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMethod {
    Fimo,
    #[default]
    Tfscan,
}

impl ScanMethod {
    ///
    /// Build the scanner for this method.
    ///
    /// # Arguments
    /// - window: radius of the scanned windows, i.e. the coordinate hits must cover
    /// - executable: tool to run instead of the one found on `PATH`
    ///
    pub fn build(&self, window: usize, executable: Option<&Path>) -> Box<dyn MotifScanner> {
        match (self, executable) {
            (ScanMethod::Fimo, Some(exe)) => Box::new(FimoScanner::with_executable(exe, window)),
            (ScanMethod::Fimo, None) => Box::new(FimoScanner::new(window)),
            (ScanMethod::Tfscan, Some(exe)) => {
                Box::new(TfscanScanner::with_executable(exe, window))
            }
            (ScanMethod::Tfscan, None) => Box::new(TfscanScanner::new(window)),
        }
    }
}

impl FromStr for ScanMethod {
    type Err = SnptfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fimo" => Ok(ScanMethod::Fimo),
            "tfscan" => Ok(ScanMethod::Tfscan),
            _ => Err(SnptfError::Configuration(format!(
                "Invalid method: {} (expected fimo or tfscan)",
                s
            ))),
        }
    }
}

impl Display for ScanMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMethod::Fimo => write!(f, "fimo"),
            ScanMethod::Tfscan => write!(f, "tfscan"),
        }
    }
}
