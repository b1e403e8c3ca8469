//! Nucleotide helpers.

///
/// Complement of a single IUPAC nucleotide code. Case is preserved and
/// characters outside the IUPAC alphabet become `N`.
///
pub fn complement(base: char) -> char {
    let upper = base.to_ascii_uppercase();
    let comp = match upper {
        'A' => 'T',
        'T' | 'U' => 'A',
        'C' => 'G',
        'G' => 'C',
        'R' => 'Y',
        'Y' => 'R',
        'K' => 'M',
        'M' => 'K',
        'S' => 'S',
        'W' => 'W',
        'B' => 'V',
        'V' => 'B',
        'D' => 'H',
        'H' => 'D',
        _ => 'N',
    };

    if base.is_ascii_lowercase() {
        comp.to_ascii_lowercase()
    } else {
        comp
    }
}

/// Reverse complement of a nucleotide sequence; same length as the input.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}
