use crate::StringSearch;

pub struct KMP;

impl StringSearch for KMP {
    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        kmp_find_all(text, pattern)
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table.
/// Entry i holds the length of the longest proper prefix of pattern[..=i]
/// that is also a suffix of it. Single pass, O(m) time and space.
fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // Fall back to the next-longest candidate prefix and retry
            // without advancing i.
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Knuth-Morris-Pratt scan, O(n+m). The LPS table is rebuilt on every call
/// and dropped when the search returns; after a full match the pattern
/// cursor falls back through the table so overlapping occurrences are
/// reported too.
pub fn kmp_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 || m > n {
        return Vec::new();
    }

    let lps = build_lps(pattern);
    log::debug!("kmp_find_all: lps table built, m={}", m);

    let mut result = Vec::new();
    let mut i = 0; // cursor over text
    let mut j = 0; // cursor over pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                result.push(i - j);
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    result
}

/// Instrumented twin of `kmp_find_all`, counting character comparisons
/// (table construction included). Only the scaling tests use this.
pub fn kmp_comparisons(text: &[u8], pattern: &[u8]) -> (Vec<usize>, u64) {
    let n = text.len();
    let m = pattern.len();
    let mut comparisons = 0u64;

    if m == 0 || m > n {
        return (Vec::new(), comparisons);
    }

    let mut lps = vec![0; m];
    let mut len = 0;
    let mut i = 1;
    while i < m {
        comparisons += 1;
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < n {
        comparisons += 1;
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                result.push(i - j);
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    (result, comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lps_table_matches_hand_computed_values() {
        assert_eq!(build_lps(b"ABABAC"), vec![0, 0, 1, 2, 3, 0]);
        assert_eq!(build_lps(b"AAAA"), vec![0, 1, 2, 3]);
        assert_eq!(build_lps(b"ACGT"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn finds_all_occurrences_in_order() {
        assert_eq!(kmp_find_all(b"ACGTACGT", b"ACGT"), vec![0, 4]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert_eq!(kmp_find_all(b"AAAA", b"TT"), Vec::<usize>::new());
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        assert_eq!(kmp_find_all(b"ACGT", b""), Vec::<usize>::new());
    }

    #[test]
    fn pattern_longer_than_text_matches_nothing() {
        assert_eq!(kmp_find_all(b"AC", b"ACGT"), Vec::<usize>::new());
    }

    #[test]
    fn overlapping_matches_are_all_reported() {
        assert_eq!(kmp_find_all(b"AAAA", b"AA"), vec![0, 1, 2]);
    }

    #[test]
    fn full_text_match() {
        assert_eq!(kmp_find_all(b"ACGT", b"ACGT"), vec![0]);
    }

    #[test]
    fn worst_case_comparisons_stay_linear() {
        // Repetitive text with a pattern that nearly matches at every even
        // offset: the classic quadratic input for the brute-force scan.
        let n = 4000;
        let m = 40;
        let text: Vec<u8> = b"AB".iter().copied().cycle().take(n).collect();
        let mut pattern: Vec<u8> = b"AB".iter().copied().cycle().take(m - 2).collect();
        pattern.extend_from_slice(b"AC");

        let (kmp_hits, kmp_cmp) = kmp_comparisons(&text, &pattern);
        let (naive_hits, naive_cmp) = crate::naive_comparisons(&text, &pattern);

        assert_eq!(kmp_hits, naive_hits);
        assert!(kmp_hits.is_empty());

        // KMP is bounded by 2n + 2m comparisons; brute force does ~m per
        // even offset here and must land far above that bound.
        assert!(kmp_cmp <= 2 * (n as u64) + 2 * (m as u64));
        assert!(naive_cmp > 5 * kmp_cmp);
    }
}
