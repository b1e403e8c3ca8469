use std::path::Path;

use snptf_core::{HitList, Result};

///
/// A motif scanning backend.
///
/// `scan` returns the motifs matching `sequence` that overlap the window
/// center, in the order the backend reports them. A backend that cannot run
/// must return an error rather than an empty list: an empty list means "no
/// motif here", which is a result.
///
pub trait MotifScanner {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    fn scan(&self, sequence: &str, database: &Path) -> Result<HitList>;
}

impl<T: MotifScanner + ?Sized> MotifScanner for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn scan(&self, sequence: &str, database: &Path) -> Result<HitList> {
        (**self).scan(sequence, database)
    }
}

impl<T: MotifScanner + ?Sized> MotifScanner for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn scan(&self, sequence: &str, database: &Path) -> Result<HitList> {
        (**self).scan(sequence, database)
    }
}
