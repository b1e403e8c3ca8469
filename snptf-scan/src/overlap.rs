///
/// Whether a hit spanning `start..=stop` covers `center`.
///
/// Scanner coordinates are 1-based inclusive and `center` is the window
/// radius, the same value used to build the scanned window. Both bounds are
/// inclusive.
///
pub fn overlaps_center(start: u64, stop: u64, center: u64) -> bool {
    start <= center && stop >= center
}
