use std::path::{Path, PathBuf};

use snptf_core::{HitList, Result};
use snptf_scan::MotifScanner;

use crate::diff::diff;

/// Motifs that differ between a reference and a mutant sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    /// Present in the mutant only.
    pub gained: HitList,
    /// Present in the reference only.
    pub lost: HitList,
}

///
/// Compares the motif hits of a reference and a mutant sequence using a
/// single scanner and motif database.
///
pub struct VariantEffectPredictor<S> {
    scanner: S,
    database: PathBuf,
}

impl<S: MotifScanner> VariantEffectPredictor<S> {
    pub fn new<P: Into<PathBuf>>(scanner: S, database: P) -> Self {
        VariantEffectPredictor {
            scanner,
            database: database.into(),
        }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn database(&self) -> &Path {
        &self.database
    }

    ///
    /// Scan both sequences and report gained and lost motifs.
    ///
    /// Sequences are uppercased before scanning. Any scanner error is
    /// returned as is: an unavailable scan must never look like "no motif".
    ///
    pub fn predict(&self, reference: &str, mutant: &str) -> Result<Prediction> {
        let ref_hits = self
            .scanner
            .scan(&reference.to_ascii_uppercase(), &self.database)?;
        let mut_hits = self
            .scanner
            .scan(&mutant.to_ascii_uppercase(), &self.database)?;

        Ok(Prediction {
            gained: diff(&mut_hits, &ref_hits),
            lost: diff(&ref_hits, &mut_hits),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use snptf_core::MotifHit;

    use crate::test_utils::FakeScanner;

    #[rstest]
    fn test_gain_and_loss() {
        let scanner = FakeScanner::new()
            .with_hits("AAAA", &["P1", "P2"])
            .with_hits("AATA", &["P2", "P3"]);
        let predictor = VariantEffectPredictor::new(scanner, "db.meme");

        let prediction = predictor.predict("AAAA", "AATA").unwrap();
        assert_eq!(prediction.gained, vec![MotifHit::unscored("P3")]);
        assert_eq!(prediction.lost, vec![MotifHit::unscored("P1")]);
    }

    #[rstest]
    fn test_sequences_are_uppercased() {
        let scanner = FakeScanner::new().with_hits("ACGT", &["P1"]);
        let predictor = VariantEffectPredictor::new(scanner, "db.meme");

        let prediction = predictor.predict("acgt", "acct").unwrap();
        assert_eq!(prediction.lost, vec![MotifHit::unscored("P1")]);
        assert_eq!(
            *predictor.scanner().calls.borrow(),
            vec!["ACGT".to_string(), "ACCT".to_string()]
        );
    }

    #[rstest]
    fn test_scanner_failure_is_propagated() {
        let scanner = FakeScanner::new()
            .with_hits("AAAA", &["P1"])
            .failing_on("AATA");
        let predictor = VariantEffectPredictor::new(scanner, "db.meme");

        assert!(predictor.predict("AAAA", "AATA").is_err());
    }

    #[rstest]
    fn test_identical_sequences_have_no_effect() {
        let scanner = FakeScanner::new().with_hits("AAAA", &["P1", "P1"]);
        let predictor = VariantEffectPredictor::new(scanner, "db.meme");

        assert_eq!(predictor.predict("AAAA", "AAAA").unwrap(), Prediction::default());
    }
}
