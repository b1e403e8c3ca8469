use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use snptf_core::{HitList, MotifHit, Result, SnptfError};
use snptf_scan::MotifScanner;

/// Scanner answering from a fixed sequence -> patterns table and recording every call.
#[derive(Default)]
pub struct FakeScanner {
    table: HashMap<String, HitList>,
    failing: Option<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeScanner {
    pub fn new() -> Self {
        FakeScanner::default()
    }

    pub fn with_hits(mut self, sequence: &str, patterns: &[&str]) -> Self {
        let hits = patterns.iter().map(|p| MotifHit::unscored(*p)).collect();
        self.table.insert(sequence.to_string(), hits);
        self
    }

    /// Make scans of `sequence` fail like a crashing tool.
    pub fn failing_on(mut self, sequence: &str) -> Self {
        self.failing = Some(sequence.to_string());
        self
    }
}

impl MotifScanner for FakeScanner {
    fn name(&self) -> &str {
        "fake"
    }

    fn scan(&self, sequence: &str, _database: &Path) -> Result<HitList> {
        self.calls.borrow_mut().push(sequence.to_string());

        if self.failing.as_deref() == Some(sequence) {
            return Err(SnptfError::ScannerOutput {
                tool: "fake".to_string(),
                line: sequence.to_string(),
                reason: "simulated failure".to_string(),
            });
        }

        Ok(self.table.get(sequence).cloned().unwrap_or_default())
    }
}
