use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use snptf_core::consts::{COMMENT_PREFIX, FIMO_BGFILE, FIMO_BIN, FIMO_RECORD_NAME};
use snptf_core::{HitList, MotifHit, Result, SnptfError};

use crate::external::run_tool;
use crate::overlap::overlaps_center;
use crate::traits::MotifScanner;

const TOOL: &str = "fimo";

// column layout of `fimo --text`
const PATTERN_COL: usize = 0;
const START_COL: usize = 2;
const STOP_COL: usize = 3;
const PVALUE_COL: usize = 6;

///
/// Scanner backed by the MEME suite `fimo` tool.
///
/// Each scan writes the sequence to a one-record FASTA file, runs
/// `fimo --norc --text` against the motif database and keeps the hits that
/// cover the window center.
///
#[derive(Debug, Clone)]
pub struct FimoScanner {
    executable: PathBuf,
    center: u64,
}

impl FimoScanner {
    ///
    /// Create a new fimo scanner.
    ///
    /// # Arguments
    /// - window: radius of the scanned windows, used as the 1-based center coordinate
    ///
    pub fn new(window: usize) -> Self {
        FimoScanner::with_executable(FIMO_BIN, window)
    }

    pub fn with_executable<P: Into<PathBuf>>(executable: P, window: usize) -> Self {
        FimoScanner {
            executable: executable.into(),
            center: window as u64,
        }
    }
}

impl MotifScanner for FimoScanner {
    fn name(&self) -> &str {
        TOOL
    }

    fn scan(&self, sequence: &str, database: &Path) -> Result<HitList> {
        log::debug!("FIMO for: {}", sequence);

        let mut fasta = Builder::new().prefix("fimo").suffix(".fa").tempfile()?;
        writeln!(fasta, ">{}\n{}", FIMO_RECORD_NAME, sequence)?;
        fasta.flush()?;

        let args: [&OsStr; 6] = [
            OsStr::new("--norc"),
            OsStr::new("--text"),
            OsStr::new("--bgfile"),
            OsStr::new(FIMO_BGFILE),
            database.as_os_str(),
            fasta.path().as_os_str(),
        ];
        let stdout = run_tool(TOOL, &self.executable, &args)?;

        parse_fimo_output(&stdout, self.center)
    }
}

///
/// Parse `fimo --text` output, keeping hits that overlap `center`.
///
/// Comment lines and lines whose coordinates are not integers (column
/// headers) are skipped. A kept hit with an unreadable p-value is an error.
///
pub fn parse_fimo_output(output: &str, center: u64) -> Result<HitList> {
    let mut hits = HitList::new();

    for line in output.lines() {
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() <= PVALUE_COL {
            log::debug!("Skipping short fimo line: {}", line);
            continue;
        }

        let (Ok(start), Ok(stop)) = (
            fields[START_COL].parse::<u64>(),
            fields[STOP_COL].parse::<u64>(),
        ) else {
            log::debug!("Skipping fimo header line: {}", line);
            continue;
        };

        if !overlaps_center(start, stop, center) {
            continue;
        }

        let pvalue = fields[PVALUE_COL];
        if let Err(e) = pvalue.parse::<f64>() {
            return Err(SnptfError::ScannerOutput {
                tool: TOOL.to_string(),
                line: line.to_string(),
                reason: format!("p-value '{}' is not a number: {}", pvalue, e),
            });
        }

        hits.push(MotifHit::new(fields[PATTERN_COL], Some(pvalue)));
    }

    Ok(hits)
}
