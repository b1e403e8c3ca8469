//! Reference genome access.
//!
//! Sequence windows are fetched by 1-based inclusive coordinates, either
//! straight from an indexed FASTA file or through `samtools faidx`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};

use bio::io::fasta;

use snptf_core::consts::SAMTOOLS_BIN;
use snptf_core::{Result, SnptfError};
use snptf_scan::external::run_tool;

/// Source of reference sequence.
pub trait ReferenceSource {
    ///
    /// Uppercase sequence of `chrom` between `start` and `end`, both
    /// 1-based and inclusive.
    ///
    fn fetch(&self, chrom: &str, start: u64, end: u64) -> Result<String>;
}

impl<T: ReferenceSource + ?Sized> ReferenceSource for Box<T> {
    fn fetch(&self, chrom: &str, start: u64, end: u64) -> Result<String> {
        (**self).fetch(chrom, start, end)
    }
}

/// Path of the index samtools writes next to `fasta`.
pub fn fai_path(fasta: &Path) -> PathBuf {
    let mut name = fasta.as_os_str().to_owned();
    name.push(".fai");
    PathBuf::from(name)
}

pub fn check_missing_faidx(fasta: &Path) -> Result<()> {
    let fai = fai_path(fasta);
    if !fai.exists() {
        return Err(SnptfError::ReferenceFetch(format!(
            "Reference index not found: {}. Create it with 'samtools faidx {}'",
            fai.display(),
            fasta.display()
        )));
    }
    Ok(())
}

fn into_sequence(seq: Vec<u8>, region: &str) -> Result<String> {
    String::from_utf8(seq.to_ascii_uppercase())
        .map_err(|_| SnptfError::ReferenceFetch(format!("{} is not plain text", region)))
}

///
/// FASTA file with a samtools `.fai` index, read with random access.
///
pub struct IndexedFasta {
    path: PathBuf,
    reader: RefCell<fasta::IndexedReader<File>>,
    lengths: HashMap<String, u64>,
}

impl IndexedFasta {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_missing_faidx(path)?;

        let index = fasta::Index::from_file(&fai_path(path)).map_err(|e| {
            SnptfError::ReferenceFetch(format!(
                "Failed to read the index of {}: {}",
                path.display(),
                e
            ))
        })?;
        let lengths = index
            .sequences()
            .into_iter()
            .map(|seq| (seq.name, seq.len))
            .collect();
        let reader = fasta::IndexedReader::with_index(File::open(path)?, index);

        Ok(IndexedFasta {
            path: path.to_path_buf(),
            reader: RefCell::new(reader),
            lengths,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of `chrom`, if the index knows it.
    pub fn length(&self, chrom: &str) -> Option<u64> {
        self.lengths.get(chrom).copied()
    }
}

impl ReferenceSource for IndexedFasta {
    fn fetch(&self, chrom: &str, start: u64, end: u64) -> Result<String> {
        let length = self.length(chrom).ok_or_else(|| {
            SnptfError::ReferenceFetch(format!(
                "{} is not in {}",
                chrom,
                fai_path(&self.path).display()
            ))
        })?;

        let region = format!("{}:{}-{}", chrom, start, end);
        if start == 0 || start > end || end > length {
            return Err(SnptfError::ReferenceFetch(format!(
                "{} is outside of {} (length {})",
                region, chrom, length
            )));
        }

        // 1-based inclusive -> 0-based half open
        let mut seq = Vec::new();
        let mut reader = self.reader.borrow_mut();
        reader.fetch(chrom, start - 1, end)?;
        reader.read(&mut seq)?;

        into_sequence(seq, &region)
    }
}

///
/// Reference lookups delegated to `samtools faidx`.
///
pub struct SamtoolsFaidx {
    executable: PathBuf,
    fasta: PathBuf,
}

impl SamtoolsFaidx {
    pub fn new<P: Into<PathBuf>>(fasta: P) -> Self {
        SamtoolsFaidx::with_executable(SAMTOOLS_BIN, fasta)
    }

    pub fn with_executable<E: Into<PathBuf>, P: Into<PathBuf>>(executable: E, fasta: P) -> Self {
        SamtoolsFaidx {
            executable: executable.into(),
            fasta: fasta.into(),
        }
    }
}

impl ReferenceSource for SamtoolsFaidx {
    fn fetch(&self, chrom: &str, start: u64, end: u64) -> Result<String> {
        let region = format!("{}:{}-{}", chrom, start, end);
        let args: [&OsStr; 3] = [
            OsStr::new("faidx"),
            self.fasta.as_os_str(),
            OsStr::new(&region),
        ];
        let stdout = run_tool("samtools", &self.executable, &args)?;

        let record = fasta::Reader::new(stdout.as_bytes())
            .records()
            .next()
            .ok_or_else(|| {
                SnptfError::ReferenceFetch(format!("samtools returned no sequence for {}", region))
            })??;

        into_sequence(record.seq().to_vec(), &region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    // chr1 wrapped at 10 bases, chr2 at 4 with CRLF line endings
    const CHR1: &str = "ACGTACGTACGGTTCCAAGGTTAAACCCGGG";
    const CHR2: &str = "ttaaccgg";

    #[fixture]
    fn fasta_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let fasta = dir.path().join("ref.fa");

        let mut f = File::create(&fasta).unwrap();
        write!(f, ">chr1 test contig\n").unwrap();
        for chunk in CHR1.as_bytes().chunks(10) {
            f.write_all(chunk).unwrap();
            f.write_all(b"\n").unwrap();
        }
        write!(f, ">chr2\r\nttaa\r\nccgg\r\n").unwrap();

        // ">chr1 test contig\n" is 18 bytes; chr1 data is 31 bases over 4 lines
        let chr2_offset = 18 + 35 + 7;
        let mut fai = File::create(fai_path(&fasta)).unwrap();
        writeln!(fai, "chr1\t31\t18\t10\t11").unwrap();
        writeln!(fai, "chr2\t8\t{}\t4\t6", chr2_offset).unwrap();

        dir
    }

    #[rstest]
    fn test_fetch_across_line_breaks(fasta_dir: TempDir) {
        let fasta = IndexedFasta::open(fasta_dir.path().join("ref.fa")).unwrap();
        assert_eq!(fasta.fetch("chr1", 8, 14).unwrap(), &CHR1[7..14]);
        assert_eq!(fasta.fetch("chr1", 1, 31).unwrap(), CHR1);
    }

    #[rstest]
    fn test_fetch_uppercases_and_skips_crlf(fasta_dir: TempDir) {
        let fasta = IndexedFasta::open(fasta_dir.path().join("ref.fa")).unwrap();
        assert_eq!(fasta.fetch("chr2", 3, 6).unwrap(), CHR2[2..6].to_uppercase());
    }

    #[rstest]
    #[case("chr1", 0, 5)]
    #[case("chr1", 25, 32)]
    #[case("chr3", 1, 5)]
    fn test_fetch_out_of_range(
        fasta_dir: TempDir,
        #[case] chrom: &str,
        #[case] start: u64,
        #[case] end: u64,
    ) {
        let fasta = IndexedFasta::open(fasta_dir.path().join("ref.fa")).unwrap();
        assert!(matches!(
            fasta.fetch(chrom, start, end),
            Err(SnptfError::ReferenceFetch(_))
        ));
    }

    #[rstest]
    fn test_missing_index_mentions_samtools() {
        let dir = tempfile::tempdir().unwrap();
        let fasta = dir.path().join("noindex.fa");
        std::fs::write(&fasta, ">chr1\nACGT\n").unwrap();

        match IndexedFasta::open(&fasta) {
            Err(SnptfError::ReferenceFetch(msg)) => assert!(msg.contains("samtools faidx")),
            _ => panic!("expected a missing index error"),
        }
    }
}
