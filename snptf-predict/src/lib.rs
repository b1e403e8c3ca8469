//! # SNP effects on transcription factor binding sites
//!
//! Given a motif scanner, this crate compares the motifs found around a
//! variant in the reference sequence with those found once the alternate
//! allele is substituted, on both strands, and reports every motif that is
//! gained or lost.
//!
//! The pieces, from the bottom up:
//! - [`diff`]: one-sided difference of two hit lists by motif identity
//! - [`VariantEffectPredictor`]: gained/lost motifs for one sequence pair
//! - [`StrandOrchestrator`]: the same on the forward and reverse-complement strands
//! - [`VariantBatchRunner`]: VCF or literal-pair input, tab separated output
//!
pub mod config;
pub mod diff;
pub mod predictor;
pub mod reference;
pub mod report;
pub mod runner;
pub mod strand;
pub mod vcf;

#[cfg(test)]
mod test_utils;

// re-exports
pub use config::{RunMode, Settings};
pub use diff::diff;
pub use predictor::{Prediction, VariantEffectPredictor};
pub use reference::{IndexedFasta, ReferenceSource, SamtoolsFaidx};
pub use report::{AlleleId, ReportRow, write_rows};
pub use runner::{BatchSummary, VariantBatchRunner};
pub use strand::StrandOrchestrator;
pub use vcf::{VariantRecords, open_vcf};
