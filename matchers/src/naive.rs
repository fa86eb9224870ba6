use crate::StringSearch;

pub struct BruteForce;

impl StringSearch for BruteForce {
    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        naive_find_all(text, pattern)
    }
}

/// Brute-force scan: every alignment offset is tried in increasing order,
/// each window compared left to right. O(n*m) worst case, O(n) best case.
pub fn naive_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut result = Vec::new();

    if m == 0 || m > n {
        return result;
    }

    for i in 0..=n - m {
        let mut matched = true;
        for j in 0..m {
            if text[i + j] != pattern[j] {
                matched = false;
                break;
            }
        }
        if matched {
            result.push(i);
        }
    }

    result
}

/// Instrumented twin of `naive_find_all`: same scan, but also counts every
/// character comparison. Used by the asymptotic-scaling tests; the timed
/// entry point above stays counter-free.
pub fn naive_comparisons(text: &[u8], pattern: &[u8]) -> (Vec<usize>, u64) {
    let n = text.len();
    let m = pattern.len();
    let mut result = Vec::new();
    let mut comparisons = 0u64;

    if m == 0 || m > n {
        return (result, comparisons);
    }

    for i in 0..=n - m {
        let mut matched = true;
        for j in 0..m {
            comparisons += 1;
            if text[i + j] != pattern[j] {
                matched = false;
                break;
            }
        }
        if matched {
            result.push(i);
        }
    }

    (result, comparisons)
}
