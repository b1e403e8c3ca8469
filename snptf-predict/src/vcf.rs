//! Reading SNPs from VCF files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use snptf_core::consts::COMMENT_PREFIX;
use snptf_core::{Result, Variant};

/// Open a VCF file, auto-detecting gzip/bgzf compression from the extension.
pub fn open_vcf(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let compressed = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "gz" || ext == "bgz");

    if compressed {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

///
/// Iterator over the variants of a VCF stream. Header and blank lines are
/// skipped; the first malformed or non-SNP record yields an error.
///
pub struct VariantRecords<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> VariantRecords<R> {
    pub fn new(reader: R) -> Self {
        VariantRecords {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for VariantRecords<R> {
    type Item = Result<Variant>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }

            let line = self.line.trim_end_matches(['\n', '\r']);
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            return Some(Variant::from_vcf_line(line));
        }
    }
}
