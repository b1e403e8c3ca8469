use std::fmt::{self, Display};

use crate::errors::{Result, SnptfError};
use crate::seq::reverse_complement;

///
/// Flanking sequence around a variant, `radius` bases on each side of the
/// center base. Always stored uppercase.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceWindow {
    sequence: String,
    center: usize,
}

impl SequenceWindow {
    ///
    /// Wrap a fetched sequence, checking it spans exactly `2 * radius + 1`
    /// ASCII bases.
    ///
    pub fn new(sequence: &str, radius: usize) -> Result<Self> {
        let expected = 2 * radius + 1;
        if !sequence.is_ascii() || sequence.len() != expected {
            return Err(SnptfError::ReferenceFetch(format!(
                "window has {} bases, expected {} for radius {}",
                sequence.chars().count(),
                expected,
                radius
            )));
        }

        Ok(SequenceWindow {
            sequence: sequence.to_ascii_uppercase(),
            center: radius,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    /// 0-based index of the variant base; equal to the radius.
    pub fn center(&self) -> usize {
        self.center
    }

    pub fn center_base(&self) -> char {
        self.sequence.as_bytes()[self.center] as char
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    ///
    /// Copy of this window with `allele` of variant `name` substituted at the
    /// center.
    ///
    pub fn with_allele(&self, name: &str, allele: char) -> Result<Self> {
        if !allele.is_ascii() {
            return Err(SnptfError::InvalidVariant {
                name: name.to_string(),
                reason: format!("allele '{}' is not a nucleotide", allele),
            });
        }

        let mut sequence = self.sequence.clone();
        let allele = allele.to_ascii_uppercase().to_string();
        sequence.replace_range(self.center..self.center + 1, &allele);

        Ok(SequenceWindow {
            sequence,
            center: self.center,
        })
    }

    ///
    /// The window read on the opposite strand. The center stays at the same
    /// index because the window is symmetric.
    ///
    pub fn reverse_complement(&self) -> Self {
        SequenceWindow {
            sequence: reverse_complement(&self.sequence),
            center: self.center,
        }
    }

    ///
    /// Render the window with the center written as `[REF/ALT]`, for logging.
    ///
    pub fn marked(&self, allele: char) -> String {
        format!(
            "{}[{}/{}]{}",
            &self.sequence[..self.center],
            self.center_base(),
            allele.to_ascii_uppercase(),
            &self.sequence[self.center + 1..]
        )
    }
}

impl Display for SequenceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sequence)
    }
}
