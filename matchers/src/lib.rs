mod kmp;
mod naive;

/// Common seam for the exact-match algorithms so the benchmark driver can
/// stay generic over them. Both matchers are pure functions of
/// (text, pattern); neither keeps state between calls.
///
/// Policy shared by all implementors: an empty pattern matches nothing,
/// and a pattern longer than the text matches nothing. Offsets are
/// zero-based and strictly increasing; overlapping matches are all
/// reported.
pub trait StringSearch {
    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize>;

    fn find_all(text: &str, pattern: &str) -> Vec<usize> {
        Self::find_all_bytes(text.as_bytes(), pattern.as_bytes())
    }
}

pub use kmp::{KMP, kmp_comparisons, kmp_find_all};
pub use naive::{BruteForce, naive_comparisons, naive_find_all};
