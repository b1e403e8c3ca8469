use std::collections::HashSet;

use snptf_core::{HitList, MotifHit};

///
/// Hits of `a` whose pattern does not occur anywhere in `b`.
///
/// Only the pattern is compared; scores are ignored. The result keeps `a`'s
/// order and its duplicates. The operation is one-sided: call it with the
/// arguments swapped to get the other direction.
///
pub fn diff(a: &[MotifHit], b: &[MotifHit]) -> HitList {
    let seen: HashSet<&str> = b.iter().map(|hit| hit.pattern.as_str()).collect();

    a.iter()
        .filter(|hit| !seen.contains(hit.pattern.as_str()))
        .cloned()
        .collect()
}
