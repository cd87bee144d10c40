//! DNA sequence utilities

/// Reverse complement a DNA sequence
///
/// Reverses the sequence and complements each nucleotide:
/// - A <-> T
/// - G <-> C
/// - Case is preserved
/// - Non-ATGC characters (N, IUPAC ambiguity codes) pass through unchanged
///
/// # Examples
///
/// ```
/// use ferro_annotate::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement("ATGC"), "GCAT");
/// assert_eq!(reverse_complement("aattggcc"), "ggccaatt");
/// assert_eq!(reverse_complement("ATGN"), "NCAT");
/// ```
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}

/// Complement a single base, passing unknown characters through
pub fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        _ => base,
    }
}

/// Check that a sequence uses only the `ACGTN` alphabet (either case)
///
/// The empty string is accepted; callers that require a base check length
/// separately.
pub fn is_dna(seq: &str) -> bool {
    seq.bytes()
        .all(|b| matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'N'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_basic() {
        assert_eq!(reverse_complement("ATGC"), "GCAT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_reverse_complement_single_base() {
        assert_eq!(reverse_complement("A"), "T");
        assert_eq!(reverse_complement("T"), "A");
        assert_eq!(reverse_complement("G"), "C");
        assert_eq!(reverse_complement("C"), "G");
    }

    #[test]
    fn test_reverse_complement_mixed_case() {
        assert_eq!(reverse_complement("AtGc"), "gCaT");
    }

    #[test]
    fn test_reverse_complement_with_n() {
        assert_eq!(reverse_complement("ATGN"), "NCAT");
        assert_eq!(reverse_complement("ANT"), "ANT");
    }

    #[test]
    fn test_reverse_complement_involution() {
        let seq = "ATGCATGCCCGTTANNAGT";
        assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
    }

    #[test]
    fn test_reverse_complement_real_codon() {
        // ATG (start codon) -> CAT
        assert_eq!(reverse_complement("ATG"), "CAT");
        // TGA (stop codon) -> TCA
        assert_eq!(reverse_complement("TGA"), "TCA");
    }

    #[test]
    fn test_is_dna() {
        assert!(is_dna("ACGTN"));
        assert!(is_dna("acgtn"));
        assert!(is_dna(""));
        assert!(!is_dna("ACGU"));
        assert!(!is_dna("AC-GT"));
        assert!(!is_dna("ACGR"));
    }
}
