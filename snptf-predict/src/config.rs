use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use snptf_core::consts::{DEFAULT_DB, DEFAULT_WINDOW};
use snptf_core::{Result, SnptfError};
use snptf_scan::{MotifScanner, ScanMethod};

use crate::reference::{IndexedFasta, ReferenceSource, SamtoolsFaidx};

///
/// Everything a prediction run needs to know, passed explicitly to the
/// components that use it.
///
/// Can be read from a TOML file; every key is optional and falls back to
/// the defaults below.
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub vcf: Option<PathBuf>,
    pub fasta: Option<PathBuf>,
    pub method: ScanMethod,
    pub db: PathBuf,
    pub window: usize,
    pub reference: Option<String>,
    pub mutant: Option<String>,

    pub fimo_bin: Option<PathBuf>,
    pub tfscan_bin: Option<PathBuf>,
    /// When set, reference windows are fetched with `samtools faidx` instead
    /// of reading the indexed FASTA directly.
    pub samtools_bin: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            vcf: None,
            fasta: None,
            method: ScanMethod::default(),
            db: PathBuf::from(DEFAULT_DB),
            window: DEFAULT_WINDOW,
            reference: None,
            mutant: None,
            fimo_bin: None,
            tfscan_bin: None,
            samtools_bin: None,
        }
    }
}

/// The two mutually exclusive ways of running a prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Every SNP of a VCF, with windows cut from a reference FASTA.
    Vcf { vcf: PathBuf, fasta: PathBuf },
    /// A single literal reference/mutant pair.
    Direct { reference: String, mutant: String },
}

impl Settings {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Settings::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(SnptfError::Configuration(
                "window must be at least 1".to_string(),
            ));
        }
        self.run_mode()?;
        Ok(())
    }

    ///
    /// Work out which mode the settings ask for. Exactly one of the VCF
    /// inputs or the reference/mutant pair must be given, and each must be
    /// complete.
    ///
    pub fn run_mode(&self) -> Result<RunMode> {
        let direct = self.reference.is_some() || self.mutant.is_some();

        match (&self.vcf, direct) {
            (Some(_), true) => Err(SnptfError::Configuration(
                "give either a VCF or a reference/mutant pair, not both".to_string(),
            )),
            (Some(vcf), false) => match &self.fasta {
                Some(fasta) => Ok(RunMode::Vcf {
                    vcf: vcf.clone(),
                    fasta: fasta.clone(),
                }),
                None => Err(SnptfError::Configuration(
                    "Need a reference file! (--fasta is required with --vcf)".to_string(),
                )),
            },
            (None, true) => match (&self.reference, &self.mutant) {
                (Some(reference), Some(mutant)) => Ok(RunMode::Direct {
                    reference: reference.clone(),
                    mutant: mutant.clone(),
                }),
                _ => Err(SnptfError::Configuration(
                    "--reference and --mutant must be given together".to_string(),
                )),
            },
            (None, false) => Err(SnptfError::Configuration(
                "Need either VCF with reference genome, or sequence and mutant itself!"
                    .to_string(),
            )),
        }
    }

    /// Build the scanner picked by `method`.
    pub fn scanner(&self) -> Box<dyn MotifScanner> {
        let executable = match self.method {
            ScanMethod::Fimo => self.fimo_bin.as_deref(),
            ScanMethod::Tfscan => self.tfscan_bin.as_deref(),
        };
        self.method.build(self.window, executable)
    }

    /// Open the reference genome for VCF mode.
    pub fn reference_source(&self, fasta: &Path) -> Result<Box<dyn ReferenceSource>> {
        match &self.samtools_bin {
            Some(samtools) => Ok(Box::new(SamtoolsFaidx::with_executable(samtools, fasta))),
            None => Ok(Box::new(IndexedFasta::open(fasta)?)),
        }
    }
}
