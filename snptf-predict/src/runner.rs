use std::io::{BufRead, Write};
use std::path::PathBuf;

use indicatif::ProgressBar;

use snptf_core::{Result, SequenceWindow, StrandedResult, Variant, reverse_complement};
use snptf_scan::MotifScanner;

use crate::config::{RunMode, Settings};
use crate::predictor::VariantEffectPredictor;
use crate::reference::ReferenceSource;
use crate::report::{AlleleId, ReportRow, write_rows};
use crate::strand::StrandOrchestrator;
use crate::vcf::{VariantRecords, open_vcf};

/// Counts collected over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub variants: usize,
    pub alleles: usize,
    pub rows: usize,
}

///
/// Drives predictions over a VCF or a single literal sequence pair and
/// writes one row per changed motif.
///
/// Processing is strictly sequential and stops at the first error: a
/// variant that could not be analysed must not be mistaken for one without
/// effect.
///
pub struct VariantBatchRunner<S> {
    orchestrator: StrandOrchestrator<S>,
    window: usize,
    progress: Option<ProgressBar>,
}

impl<S: MotifScanner> VariantBatchRunner<S> {
    pub fn new<P: Into<PathBuf>>(scanner: S, database: P, window: usize) -> Self {
        VariantBatchRunner {
            orchestrator: StrandOrchestrator::new(VariantEffectPredictor::new(scanner, database)),
            window,
            progress: None,
        }
    }

    /// Tick `bar` once per processed variant.
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    ///
    /// Run whichever mode `settings` selects, writing rows to `out`.
    ///
    pub fn run<W: Write>(&self, settings: &Settings, out: &mut W) -> Result<BatchSummary> {
        match settings.run_mode()? {
            RunMode::Vcf { vcf, fasta } => {
                log::info!("Reading SNPs from {}", vcf.display());
                let reference = settings.reference_source(&fasta)?;
                self.run_vcf(open_vcf(&vcf)?, &reference, out)
            }
            RunMode::Direct { reference, mutant } => self.run_direct(&reference, &mutant, out),
        }
    }

    ///
    /// Predict every allele of every SNP in `vcf`.
    ///
    pub fn run_vcf<R, F, W>(&self, vcf: R, reference: &F, out: &mut W) -> Result<BatchSummary>
    where
        R: BufRead,
        F: ReferenceSource + ?Sized,
        W: Write,
    {
        let mut summary = BatchSummary::default();

        for variant in VariantRecords::new(vcf) {
            let variant = variant?;
            log::info!("SNP = {}", variant.name);

            let rows = self.predict_variant(&variant, reference)?;
            write_rows(out, &rows)?;

            summary.variants += 1;
            summary.alleles += variant.alternate_bases.len();
            summary.rows += rows.len();

            if let Some(bar) = &self.progress {
                bar.set_message(variant.name.clone());
                bar.inc(1);
            }
        }

        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }

        Ok(summary)
    }

    ///
    /// Fetch the window around `variant` and predict each of its alleles.
    ///
    pub fn predict_variant<F>(&self, variant: &Variant, reference: &F) -> Result<Vec<ReportRow>>
    where
        F: ReferenceSource + ?Sized,
    {
        let (start, end) = variant.window_bounds(self.window)?;
        let fetched = reference.fetch(&variant.chrom, start, end)?;
        let window = SequenceWindow::new(&fetched, self.window)?;

        if window.center_base() != variant.reference_base.to_ascii_uppercase() {
            log::warn!(
                "{}: reference base {} does not match {} found at {}:{}",
                variant.name,
                variant.reference_base,
                window.center_base(),
                variant.chrom,
                variant.position
            );
        }

        let mut rows = Vec::new();
        for &allele in &variant.alternate_bases {
            log::info!(
                "Predictions for SNP in {}:{}",
                variant.chrom,
                variant.position
            );
            log::info!("Sequence is: {}", window.marked(allele));

            let mutant = window.with_allele(&variant.name, allele)?;
            log::info!(
                "Sequence is: {}",
                window
                    .reverse_complement()
                    .marked(mutant.reverse_complement().center_base())
            );

            let results = self.orchestrator.run(window.as_str(), mutant.as_str())?;
            let id = AlleleId::new(variant, allele);
            rows.extend(results.into_iter().map(|result| ReportRow {
                allele: Some(id.clone()),
                result,
            }));
        }

        Ok(rows)
    }

    ///
    /// Predict a literal reference/mutant pair, used verbatim as the forward
    /// strand.
    ///
    pub fn run_direct<W: Write>(
        &self,
        reference: &str,
        mutant: &str,
        out: &mut W,
    ) -> Result<BatchSummary> {
        log::info!("Reference: {}", reference);
        log::info!("Mutant: {}", mutant);
        log::debug!(
            "Reverse complements: {} / {}",
            reverse_complement(reference),
            reverse_complement(mutant)
        );

        let results: Vec<StrandedResult> = self.orchestrator.run(reference, mutant)?;
        let rows: Vec<ReportRow> = results
            .into_iter()
            .map(|result| ReportRow {
                allele: None,
                result,
            })
            .collect();
        write_rows(out, &rows)?;

        Ok(BatchSummary {
            variants: 1,
            alleles: 1,
            rows: rows.len(),
        })
    }
}
