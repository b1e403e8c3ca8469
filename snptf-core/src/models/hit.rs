use std::fmt::{self, Display};

///
/// A single motif occurrence reported by a scanner.
///
/// Two hits refer to the same motif when their `pattern` matches; the score
/// (a p-value for fimo, absent for tfscan) only travels along for reporting,
/// kept exactly as the tool printed it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifHit {
    pub pattern: String,
    pub score: Option<String>,
}

/// Hits in scanner emission order. Duplicates are meaningful and kept.
pub type HitList = Vec<MotifHit>;

impl MotifHit {
    pub fn new(pattern: impl Into<String>, score: Option<&str>) -> Self {
        MotifHit {
            pattern: pattern.into(),
            score: score.map(String::from),
        }
    }

    /// A hit without a score, as produced by tfscan.
    pub fn unscored(pattern: impl Into<String>) -> Self {
        MotifHit::new(pattern, None)
    }

    ///
    /// Get the tab separated representation used in report rows: the pattern,
    /// followed by the score when there is one.
    ///
    pub fn as_string(&self) -> String {
        match &self.score {
            Some(score) => format!("{}\t{}", self.pattern, score),
            None => self.pattern.clone(),
        }
    }
}

impl Display for MotifHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
