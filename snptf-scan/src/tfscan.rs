use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use snptf_core::consts::{COMMENT_PREFIX, TFSCAN_BIN};
use snptf_core::{HitList, MotifHit, Result};

use crate::external::run_tool;
use crate::overlap::overlaps_center;
use crate::traits::MotifScanner;

const TOOL: &str = "tfscan";

const MIN_FIELDS: usize = 6;
const NAME_FIRST_FIELD: usize = 4;

///
/// Scanner backed by the EMBOSS `tfscan` tool, using its vertebrate
/// transcription factor table with exact matches only. Hits carry no score.
///
#[derive(Debug, Clone)]
pub struct TfscanScanner {
    executable: PathBuf,
    center: u64,
}

impl TfscanScanner {
    pub fn new(window: usize) -> Self {
        TfscanScanner::with_executable(TFSCAN_BIN, window)
    }

    pub fn with_executable<P: Into<PathBuf>>(executable: P, window: usize) -> Self {
        TfscanScanner {
            executable: executable.into(),
            center: window as u64,
        }
    }
}

impl MotifScanner for TfscanScanner {
    fn name(&self) -> &str {
        TOOL
    }

    /// tfscan reads its motifs from the EMBOSS data directory, so `_database` is unused.
    fn scan(&self, sequence: &str, _database: &Path) -> Result<HitList> {
        log::debug!("TFSCAN for: {}", sequence);

        let mut seq_file = Builder::new().prefix("tfscan").suffix(".seq").tempfile()?;
        writeln!(seq_file, "{}", sequence)?;
        seq_file.flush()?;

        let args: [&OsStr; 7] = [
            OsStr::new("-sequence"),
            seq_file.path().as_os_str(),
            OsStr::new("-menu"),
            OsStr::new("V"),
            OsStr::new("-mismatch"),
            OsStr::new("0"),
            OsStr::new("-filter"),
        ];
        let stdout = run_tool(TOOL, &self.executable, &args)?;

        Ok(parse_tfscan_output(&stdout, self.center))
    }
}

///
/// Parse tfscan report lines, keeping hits that overlap `center`.
///
/// A hit line reads `start stop score strand name... sequence`; the motif
/// name may contain spaces and is rebuilt from the tokens between the strand
/// and the matched sequence.
///
pub fn parse_tfscan_output(output: &str, center: u64) -> HitList {
    let mut hits = HitList::new();

    for line in output.lines() {
        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let (Ok(start), Ok(stop)) = (fields[0].parse::<u64>(), fields[1].parse::<u64>()) else {
            log::debug!("Skipping tfscan header line: {}", line);
            continue;
        };

        if !overlaps_center(start, stop, center) {
            continue;
        }

        let pattern = fields[NAME_FIRST_FIELD..fields.len() - 1].join(" ");
        hits.push(MotifHit::unscored(pattern));
    }

    hits
}
