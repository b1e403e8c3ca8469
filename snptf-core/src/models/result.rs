use std::fmt::{self, Display};

use crate::models::hit::MotifHit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn symbol(&self) -> &'static str {
        match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction of a motif change between reference and mutant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Present in the mutant, absent from the reference.
    Gain,
    /// Present in the reference, absent from the mutant.
    Loss,
}

impl Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Gain => write!(f, "gain"),
            Effect::Loss => write!(f, "loss"),
        }
    }
}

///
/// One motif that differs between reference and mutant on a given strand.
///
#[derive(Debug, Clone, PartialEq)]
pub struct StrandedResult {
    pub strand: Strand,
    pub effect: Effect,
    pub motif: MotifHit,
}

impl StrandedResult {
    pub fn new(strand: Strand, effect: Effect, motif: MotifHit) -> Self {
        StrandedResult {
            strand,
            effect,
            motif,
        }
    }
}

impl Display for StrandedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.strand, self.effect, self.motif)
    }
}
