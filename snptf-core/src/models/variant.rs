use std::fmt::{self, Display};

use crate::consts::COMMENT_PREFIX;
use crate::errors::{Result, SnptfError};

///
/// A single-nucleotide variant site, possibly multi-allelic.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub chrom: String,
    /// 1-based position of the reference base.
    pub position: u64,
    pub name: String,
    pub reference_base: char,
    pub alternate_bases: Vec<char>,
}

/// Return the only base in `allele`, or an `InvalidVariant` error.
fn single_base(allele: &str, what: &str, name: &str) -> Result<char> {
    let mut chars = allele.chars();
    match (chars.next(), chars.next()) {
        (Some(base), None) if base.is_ascii_alphabetic() => Ok(base),
        (Some(base), None) => Err(SnptfError::InvalidVariant {
            name: name.to_string(),
            reason: format!("{} allele '{}' is not a nucleotide", what, base),
        }),
        _ => Err(SnptfError::InvalidVariant {
            name: name.to_string(),
            reason: format!(
                "{} allele '{}' has length {}, expected 1",
                what,
                allele,
                allele.chars().count()
            ),
        }),
    }
}

impl Variant {
    ///
    /// Build a variant from its textual alleles, rejecting anything that is not
    /// a single base substitution.
    ///
    pub fn new(
        chrom: &str,
        position: u64,
        name: &str,
        reference: &str,
        alternates: &[&str],
    ) -> Result<Self> {
        let reference_base = single_base(reference, "reference", name)?;

        if alternates.is_empty() {
            return Err(SnptfError::InvalidVariant {
                name: name.to_string(),
                reason: "no alternate alleles".to_string(),
            });
        }

        let alternate_bases = alternates
            .iter()
            .map(|alt| single_base(alt, "alternate", name))
            .collect::<Result<Vec<char>>>()?;

        Ok(Variant {
            chrom: chrom.to_string(),
            position,
            name: name.to_string(),
            reference_base,
            alternate_bases,
        })
    }

    ///
    /// Parse the first five columns of a VCF data line
    /// (`CHROM POS ID REF ALT`). Anything after ALT is ignored.
    ///
    pub fn from_vcf_line(line: &str) -> Result<Self> {
        let parse_error = |reason: &str| SnptfError::VcfParse {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        if line.starts_with(COMMENT_PREFIX) {
            return Err(parse_error("header line is not a variant"));
        }

        let fields: Vec<&str> = line.splitn(6, '\t').collect();
        if fields.len() < 5 {
            return Err(parse_error("expected at least 5 tab separated columns"));
        }

        let position = fields[1]
            .trim()
            .parse::<u64>()
            .map_err(|_| parse_error("POS is not a positive integer"))?;

        let alternates: Vec<&str> = fields[4].trim().split(',').collect();

        Variant::new(
            fields[0],
            position,
            fields[2],
            fields[3].trim(),
            &alternates,
        )
    }

    ///
    /// 1-based inclusive coordinates of the window of `radius` bases on each
    /// side of the variant.
    ///
    pub fn window_bounds(&self, radius: usize) -> Result<(u64, u64)> {
        let radius = radius as u64;
        if self.position <= radius {
            return Err(SnptfError::ReferenceFetch(format!(
                "{} at {}:{} is within {} bases of the contig start",
                self.name, self.chrom, self.position, radius
            )));
        }
        let end = self.position.checked_add(radius).ok_or_else(|| {
            SnptfError::ReferenceFetch(format!(
                "{} at {}:{} is out of range",
                self.name, self.chrom, self.position
            ))
        })?;
        Ok((self.position - radius, end))
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alternates: Vec<String> = self.alternate_bases.iter().map(|b| b.to_string()).collect();
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.position,
            self.name,
            self.reference_base,
            alternates.join(",")
        )
    }
}
