use rand::Rng;

pub const DNA_ALPHABET: &[u8] = b"ACGT";

/// Generates a sequence of `length` symbols drawn uniformly from
/// `alphabet`. The RNG is passed in so callers control seeding; the
/// benchmark driver seeds it per scenario for reproducible runs.
pub fn random_sequence(rng: &mut impl Rng, length: usize, alphabet: &[u8]) -> Vec<u8> {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Watson-Crick reverse complement: the sequence reversed, with A<->T and
/// C<->G swapped. Anything outside {A,C,G,T} becomes the wildcard 'N'.
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence
        .iter()
        .rev()
        .map(|&base| match base {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            _ => b'N',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn reverse_complement_basic() {
        assert_eq!(reverse_complement(b"ACGT"), b"ACGT");
        assert_eq!(reverse_complement(b"AACC"), b"GGTT");
        assert_eq!(reverse_complement(b"GATTACA"), b"TGTAATC");
    }

    #[test]
    fn unknown_bases_map_to_wildcard() {
        assert_eq!(reverse_complement(b"AXGT"), b"ACNT");
        assert_eq!(reverse_complement(b"NNN"), b"NNN");
    }

    #[test]
    fn double_reverse_complement_is_identity() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for _ in 0..20 {
            let seq = random_sequence(&mut rng, 100, DNA_ALPHABET);
            assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
        }
    }

    #[test]
    fn random_sequence_has_requested_length_and_alphabet() {
        let mut rng = SmallRng::seed_from_u64(99);
        let seq = random_sequence(&mut rng, 5000, DNA_ALPHABET);
        assert_eq!(seq.len(), 5000);
        assert!(seq.iter().all(|b| DNA_ALPHABET.contains(b)));
    }

    #[test]
    fn same_seed_reproduces_the_same_sequence() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(
            random_sequence(&mut a, 256, DNA_ALPHABET),
            random_sequence(&mut b, 256, DNA_ALPHABET)
        );
    }
}
