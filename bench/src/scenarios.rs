use rand::SeedableRng;
use rand::rngs::SmallRng;

use seqio::{DNA_ALPHABET, random_sequence};

/// One synthetic (text, pattern) pair, ready to be searched. Owned by the
/// runner for exactly one report cycle, then dropped.
pub struct Scenario {
    pub label: String,
    pub text: Vec<u8>,
    pub pattern: Vec<u8>,
}

/// Build recipe for a scenario. All parameters, seeds included, are fixed
/// at build time; the runner materializes specs one at a time so only a
/// single text lives in memory at once. Text and pattern carry separate
/// seeds: specs that share a pattern seed search the exact same pattern
/// (scenario 1), specs that share a text seed search the exact same text
/// (scenario 2), even though each is regenerated on demand.
pub enum ScenarioSpec {
    /// Uniform random text and pattern over {A,C,G,T}.
    Random {
        label: &'static str,
        n: usize,
        m: usize,
        text_seed: u64,
        pattern_seed: u64,
    },
    /// Adversarial input for the brute-force scan: text is "AB" repeated,
    /// the pattern is "AB" repeated but ends in "AC", so every even offset
    /// nearly matches before failing on the last symbol.
    WorstCase { label: &'static str, n: usize, m: usize },
}

impl ScenarioSpec {
    pub fn build(&self) -> Scenario {
        match *self {
            ScenarioSpec::Random { label, n, m, text_seed, pattern_seed } => Scenario {
                label: format!("{} (n={}, m={})", label, n, m),
                text: random_sequence(&mut SmallRng::seed_from_u64(text_seed), n, DNA_ALPHABET),
                pattern: random_sequence(
                    &mut SmallRng::seed_from_u64(pattern_seed),
                    m,
                    DNA_ALPHABET,
                ),
            },
            ScenarioSpec::WorstCase { label, n, m } => Scenario {
                label: format!("{} (n={}, m={})", label, n, m),
                text: worst_case_text(n),
                pattern: worst_case_pattern(m),
            },
        }
    }
}

/// The fixed experiment plan: scaling in n with the pattern held constant,
/// scaling in m with the text held constant, then the adversarial
/// repetitive input. Sizes match the reference experiments.
pub fn synthetic_specs(run_seed: u64) -> Vec<ScenarioSpec> {
    const S1: &str = "Scenario 1: fixed pattern, growing text";
    const S2: &str = "Scenario 2: fixed text, growing pattern";

    vec![
        ScenarioSpec::Random {
            label: S1,
            n: 10_000_000,
            m: 100,
            text_seed: run_seed,
            pattern_seed: run_seed + 100,
        },
        ScenarioSpec::Random {
            label: S1,
            n: 20_000_000,
            m: 100,
            text_seed: run_seed + 1,
            pattern_seed: run_seed + 100,
        },
        ScenarioSpec::Random {
            label: S2,
            n: 10_000_000,
            m: 100,
            text_seed: run_seed + 2,
            pattern_seed: run_seed + 101,
        },
        ScenarioSpec::Random {
            label: S2,
            n: 10_000_000,
            m: 500,
            text_seed: run_seed + 2,
            pattern_seed: run_seed + 102,
        },
        ScenarioSpec::WorstCase {
            label: "Scenario 3: brute-force worst case",
            n: 20_000_000,
            m: 400,
        },
    ]
}

fn worst_case_text(n: usize) -> Vec<u8> {
    b"AB".iter().copied().cycle().take(n).collect()
}

fn worst_case_pattern(m: usize) -> Vec<u8> {
    let mut pattern: Vec<u8> = b"AB".iter().copied().cycle().take(m.saturating_sub(2)).collect();
    pattern.extend_from_slice(b"AC");
    pattern
}
