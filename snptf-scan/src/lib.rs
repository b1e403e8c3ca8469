//! # Motif scanners
//!
//! Backends that report which transcription factor motifs match a short
//! nucleotide sequence. Every backend implements [`MotifScanner`] and only
//! returns hits whose match overlaps the variant position at the window
//! center, so two scans of the same window can be compared directly.
//!
//! Two external tools are supported:
//! - `fimo` from the MEME suite, scored against a motif database
//! - `tfscan` from EMBOSS, matched against its built-in vertebrate table
//!
pub mod external;
pub mod fimo;
pub mod method;
pub mod overlap;
pub mod tfscan;
pub mod traits;

// re-exports
pub use fimo::FimoScanner;
pub use method::ScanMethod;
pub use overlap::overlaps_center;
pub use tfscan::TfscanScanner;
pub use traits::MotifScanner;
