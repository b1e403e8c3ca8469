use std::fmt::{self, Display};
use std::io::Write;

use snptf_core::{Result, StrandedResult, Variant};

/// Columns identifying the variant allele a row belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AlleleId {
    pub chrom: String,
    pub position: u64,
    pub name: String,
    pub reference_base: char,
    pub allele: char,
}

impl AlleleId {
    pub fn new(variant: &Variant, allele: char) -> Self {
        AlleleId {
            chrom: variant.chrom.clone(),
            position: variant.position,
            name: variant.name.clone(),
            reference_base: variant.reference_base,
            allele,
        }
    }
}

///
/// One output line:
/// `chrom, position, name, reference_base, allele, strand, effect, pattern[, score]`.
/// Rows from a literal reference/mutant pair have no allele and leave the
/// first five columns blank.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub allele: Option<AlleleId>,
    pub result: StrandedResult,
}

impl Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.allele {
            Some(id) => write!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}",
                id.chrom, id.position, id.name, id.reference_base, id.allele, self.result
            ),
            None => write!(f, "\t\t\t\t\t{}", self.result),
        }
    }
}

/// Write rows as tab separated lines.
pub fn write_rows<W: Write>(out: &mut W, rows: &[ReportRow]) -> Result<()> {
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use snptf_core::{Effect, MotifHit, Strand};

    #[rstest]
    fn test_vcf_row() {
        let variant = Variant::new("chr7", 1200, "rs99", "C", &["T"]).unwrap();
        let row = ReportRow {
            allele: Some(AlleleId::new(&variant, 'T')),
            result: StrandedResult::new(
                Strand::Reverse,
                Effect::Gain,
                MotifHit::new("MA0079.3", Some("2e-05")),
            ),
        };
        assert_eq!(row.to_string(), "chr7\t1200\trs99\tC\tT\t-\tgain\tMA0079.3\t2e-05");
    }

    #[rstest]
    fn test_direct_row_has_blank_identity() {
        let row = ReportRow {
            allele: None,
            result: StrandedResult::new(Strand::Forward, Effect::Loss, MotifHit::unscored("Sp1")),
        };
        assert_eq!(row.to_string(), "\t\t\t\t\t+\tloss\tSp1");
        assert_eq!(row.to_string().split('\t').count(), 8);
    }
}
