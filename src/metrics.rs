//! Per-read numeric metrics used by the filter predicates.

/// ASCII offset of the Phred+33 quality encoding.
pub const PHRED_OFFSET: u8 = 33;

/// GC content as a percentage in [0, 100]. Counts both cases; an empty
/// sequence is defined as 0.0 rather than a division fault.
pub fn gc_fraction(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .bytes()
        .filter(|&b| matches!(b, b'G' | b'C' | b'g' | b'c'))
        .count();
    gc as f64 / sequence.len() as f64 * 100.0
}

/// Mean Phred+33-decoded score of a quality string; 0.0 when empty.
pub fn mean_quality(quality: &str) -> f64 {
    if quality.is_empty() {
        return 0.0;
    }
    let total: u64 = quality
        .bytes()
        .map(|b| u64::from(b.saturating_sub(PHRED_OFFSET)))
        .sum();
    total as f64 / quality.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gc_extremes() {
        assert_eq!(gc_fraction("GCGCGCGCGC"), 100.0);
        assert_eq!(gc_fraction("ATATAT"), 0.0);
        assert_eq!(gc_fraction(""), 0.0);
    }

    #[test]
    fn gc_counts_both_cases() {
        assert_eq!(gc_fraction("AgTc"), 50.0);
        assert_eq!(gc_fraction("ATGC"), 50.0);
    }

    #[test]
    fn quality_decoding() {
        // 'I' is Phred 40, '!' is Phred 0
        assert_eq!(mean_quality("IIII"), 40.0);
        assert_eq!(mean_quality("!"), 0.0);
        assert_eq!(mean_quality(""), 0.0);
    }

    #[test]
    fn quality_averages() {
        // '!' = 0 and 'I' = 40 average to 20
        assert_eq!(mean_quality("!I"), 20.0);
    }
}
