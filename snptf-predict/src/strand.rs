use snptf_core::{Effect, Result, Strand, StrandedResult, reverse_complement};
use snptf_scan::MotifScanner;

use crate::predictor::{Prediction, VariantEffectPredictor};

///
/// Runs a prediction on the forward strand and, independently, on the
/// reverse complement of both sequences.
///
/// The two strands share nothing but the scanner: hits are not translated
/// between coordinate systems, and the reverse scan filters on the same
/// center index as the forward one.
///
pub struct StrandOrchestrator<S> {
    predictor: VariantEffectPredictor<S>,
}

fn tag(strand: Strand, prediction: Prediction, results: &mut Vec<StrandedResult>) {
    results.extend(
        prediction
            .gained
            .into_iter()
            .map(|hit| StrandedResult::new(strand, Effect::Gain, hit)),
    );
    results.extend(
        prediction
            .lost
            .into_iter()
            .map(|hit| StrandedResult::new(strand, Effect::Loss, hit)),
    );
}

impl<S: MotifScanner> StrandOrchestrator<S> {
    pub fn new(predictor: VariantEffectPredictor<S>) -> Self {
        StrandOrchestrator { predictor }
    }

    pub fn predictor(&self) -> &VariantEffectPredictor<S> {
        &self.predictor
    }

    ///
    /// Results in the order: forward gains, forward losses, reverse gains,
    /// reverse losses.
    ///
    pub fn run(&self, reference: &str, mutant: &str) -> Result<Vec<StrandedResult>> {
        let mut results = Vec::new();

        let forward = self.predictor.predict(reference, mutant)?;
        tag(Strand::Forward, forward, &mut results);

        let reverse = self
            .predictor
            .predict(&reverse_complement(reference), &reverse_complement(mutant))?;
        tag(Strand::Reverse, reverse, &mut results);

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use snptf_core::MotifHit;

    use crate::test_utils::FakeScanner;

    // ref / mutant and their reverse complements
    const REF: &str = "AACGT";
    const MUT: &str = "AATGT";
    const REF_RC: &str = "ACGTT";
    const MUT_RC: &str = "ACATT";

    fn orchestrator(scanner: FakeScanner) -> StrandOrchestrator<FakeScanner> {
        StrandOrchestrator::new(VariantEffectPredictor::new(scanner, "db.meme"))
    }

    #[rstest]
    fn test_forward_only_motif_is_not_reported_on_reverse() {
        let scanner = FakeScanner::new().with_hits(MUT, &["M1"]);
        let results = orchestrator(scanner).run(REF, MUT).unwrap();

        assert_eq!(
            results,
            vec![StrandedResult::new(
                Strand::Forward,
                Effect::Gain,
                MotifHit::unscored("M1")
            )]
        );
    }

    #[rstest]
    fn test_reverse_only_motif_is_not_reported_on_forward() {
        let scanner = FakeScanner::new().with_hits(REF_RC, &["M2"]);
        let results = orchestrator(scanner).run(REF, MUT).unwrap();

        assert_eq!(
            results,
            vec![StrandedResult::new(
                Strand::Reverse,
                Effect::Loss,
                MotifHit::unscored("M2")
            )]
        );
    }

    #[rstest]
    fn test_result_order_and_scan_sequence() {
        let scanner = FakeScanner::new()
            .with_hits(REF, &["L1"])
            .with_hits(MUT, &["G1"])
            .with_hits(REF_RC, &["L2"])
            .with_hits(MUT_RC, &["G2"]);
        let orchestrator = orchestrator(scanner);
        let results = orchestrator.run(REF, MUT).unwrap();

        let summary: Vec<(Strand, Effect, &str)> = results
            .iter()
            .map(|r| (r.strand, r.effect, r.motif.pattern.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Strand::Forward, Effect::Gain, "G1"),
                (Strand::Forward, Effect::Loss, "L1"),
                (Strand::Reverse, Effect::Gain, "G2"),
                (Strand::Reverse, Effect::Loss, "L2"),
            ]
        );
        assert_eq!(
            *orchestrator.predictor().scanner().calls.borrow(),
            vec![REF, MUT, REF_RC, MUT_RC]
        );
    }

    #[rstest]
    fn test_reverse_failure_discards_forward_results() {
        let scanner = FakeScanner::new()
            .with_hits(MUT, &["M1"])
            .failing_on(MUT_RC);
        assert!(orchestrator(scanner).run(REF, MUT).is_err());
    }
}
