pub const DEFAULT_WINDOW: usize = 15;
pub const DEFAULT_DB: &str = "data/HOCOMOCOv9_AD_MEME.txt";

pub const FIMO_BIN: &str = "fimo";
pub const TFSCAN_BIN: &str = "tfscan";
pub const SAMTOOLS_BIN: &str = "samtools";

/// Background model handed to fimo: take letter frequencies from the motif file.
pub const FIMO_BGFILE: &str = "motif-file";

/// Sequence name used for the single record fimo scans.
pub const FIMO_RECORD_NAME: &str = "seq";

pub const COMMENT_PREFIX: char = '#';
