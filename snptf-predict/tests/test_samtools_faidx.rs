//! Reference windows fetched through a stand-in `samtools` script.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::{TempDir, tempdir};

use snptf_core::{HitList, MotifHit, Result, SnptfError};
use snptf_predict::{ReferenceSource, SamtoolsFaidx, Settings, VariantBatchRunner};
use snptf_scan::MotifScanner;

const WINDOW: &str = "ACGTACGTACGTACGTACGTACGTACGTACG";

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("samtools");
    fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Answers `faidx genome.fa chr1:20-50` with WINDOW, lowercased and wrapped.
fn serving_window(dir: &Path) -> PathBuf {
    let lower = WINDOW.to_lowercase();
    let body = format!(
        "[ \"$1\" = faidx ] || exit 2\n\
         [ \"$(basename \"$2\")\" = genome.fa ] || exit 3\n\
         [ \"$3\" = chr1:20-50 ] || {{ echo \"bad region $3\" >&2; exit 4; }}\n\
         printf '>chr1:20-50\\n{}\\n{}\\n'\n",
        &lower[..16],
        &lower[16..]
    );
    write_script(dir, &body)
}

/// Reports `M1` only for the window with `A` at its center.
struct CenterA;

impl MotifScanner for CenterA {
    fn name(&self) -> &str {
        "center-a"
    }

    fn scan(&self, sequence: &str, _database: &Path) -> Result<HitList> {
        let mut mutant = WINDOW.to_string();
        mutant.replace_range(15..16, "A");
        if sequence == mutant {
            Ok(vec![MotifHit::unscored("M1")])
        } else {
            Ok(HitList::new())
        }
    }
}

#[fixture]
fn tool_dir() -> TempDir {
    tempdir().unwrap()
}

fn vcf_settings(dir: &Path, samtools: PathBuf) -> Settings {
    let vcf = dir.join("snps.vcf");
    fs::write(&vcf, "#CHROM\tPOS\tID\tREF\tALT\nchr1\t35\tsnp1\tT\tA\n").unwrap();

    Settings {
        vcf: Some(vcf),
        fasta: Some(dir.join("genome.fa")),
        samtools_bin: Some(samtools),
        ..Settings::default()
    }
}

#[rstest]
fn test_fetch_strips_header_and_line_breaks(tool_dir: TempDir) {
    let samtools = serving_window(tool_dir.path());
    let reference = SamtoolsFaidx::with_executable(samtools, tool_dir.path().join("genome.fa"));

    assert_eq!(reference.fetch("chr1", 20, 50).unwrap(), WINDOW);
}

#[rstest]
fn test_fetch_passes_region_argument(tool_dir: TempDir) {
    let samtools = serving_window(tool_dir.path());
    let reference = SamtoolsFaidx::with_executable(samtools, tool_dir.path().join("genome.fa"));

    match reference.fetch("chr1", 21, 51) {
        Err(SnptfError::ScannerFailure { tool, stderr, .. }) => {
            assert_eq!(tool, "samtools");
            assert_eq!(stderr, "bad region chr1:21-51");
        }
        other => panic!("expected a samtools failure, got {:?}", other),
    }
}

#[rstest]
fn test_empty_output_is_a_fetch_error(tool_dir: TempDir) {
    let samtools = write_script(tool_dir.path(), "exit 0\n");
    let reference = SamtoolsFaidx::with_executable(samtools, tool_dir.path().join("genome.fa"));

    assert!(matches!(
        reference.fetch("chr1", 20, 50),
        Err(SnptfError::ReferenceFetch(_))
    ));
}

#[rstest]
fn test_vcf_run_uses_samtools_when_configured(tool_dir: TempDir) {
    let samtools = serving_window(tool_dir.path());
    let settings = vcf_settings(tool_dir.path(), samtools);
    let runner = VariantBatchRunner::new(CenterA, "db", 15);

    let mut out = Vec::new();
    runner.run(&settings, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chr1\t35\tsnp1\tT\tA\t+\tgain\tM1\n"
    );
}

#[rstest]
fn test_samtools_failure_aborts_run(tool_dir: TempDir) {
    let samtools = write_script(
        tool_dir.path(),
        "echo '[faidx] Failed to fetch sequence in chr1:20-50' >&2\nexit 1\n",
    );
    let settings = vcf_settings(tool_dir.path(), samtools);
    let runner = VariantBatchRunner::new(CenterA, "db", 15);

    let mut out = Vec::new();
    let result = runner.run(&settings, &mut out);

    assert!(matches!(result, Err(SnptfError::ScannerFailure { .. })));
    assert!(out.is_empty());
}
