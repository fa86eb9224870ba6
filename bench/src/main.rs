mod scenarios;

use std::path::Path;
use std::time::{Duration, Instant};

use matchers::{BruteForce, KMP, StringSearch};
use seqio::{read_sequence, reverse_complement};

use crate::scenarios::synthetic_specs;

/// Run seed for the synthetic scenarios. Fixed so two runs of the binary
/// time the exact same inputs.
const RUN_SEED: u64 = 42;

/// COMT exon 4 (hg38), searched against chromosome 22.
const COMT_EXON: &[u8] = b"GACGCCATCACCGTGGTGACCACCAGCAACCCCAGCCTGACCGAGGACACCATCCAGGAGATGGGCCACGCCGGGGCCAAGCACGAGGGCGTGGCCGCCGACGTGGGCATCGGCCCGGAGCTGCTGGCGCCGCTGTACGACGGGCTGGGCCTGGCCAACCCCAAGGCCAAGGACATCGACACGTACGTGGAGGAGTTCTACAGCCCCCTCAAGCTC";

fn main() {
    env_logger::init();

    println!("{:=^70}", " SYNTHETIC EXPERIMENTS ");
    for spec in synthetic_specs(RUN_SEED) {
        let scenario = spec.build();
        println!("\n--- {} ---", scenario.label);
        run_matcher::<BruteForce>("Brute force", &scenario.text, &scenario.pattern);
        run_matcher::<KMP>("KMP", &scenario.text, &scenario.pattern);
    }

    println!("\n\n{:=^70}", " REAL DATA: E. COLI GENOME VS LACZ GENE ");
    match load_input(Path::new("data/gene_lacz.fna")) {
        Some(gene) => run_real_scenario(Path::new("data/sequence_ecoli.fasta"), &gene),
        None => log::warn!("skipping E. coli scenario: query gene unavailable"),
    }

    println!("\n\n{:=^70}", " REAL DATA: CHROMOSOME 22 VS COMT EXON ");
    run_real_scenario(chr22_path(), COMT_EXON);
}

/// chr22 may be present either unpacked or still gzip-compressed as
/// downloaded from UCSC; prefer the unpacked copy.
fn chr22_path() -> &'static Path {
    let plain = Path::new("data/chr22.fa");
    if plain.exists() { plain } else { Path::new("data/chr22.fa.gz") }
}

/// Times one matcher on one (text, pattern) pair. Only the search itself
/// is inside the timed window.
fn run_matcher<S: StringSearch>(name: &str, text: &[u8], pattern: &[u8]) {
    let start = Instant::now();
    let occurrences = S::find_all_bytes(text, pattern);
    let elapsed = start.elapsed();

    println!(
        "  {:<12} {} occurrence(s) in {:.4} seconds",
        format!("{}:", name),
        occurrences.len(),
        elapsed.as_secs_f64()
    );
}

/// Searches a loaded reference sequence for a query motif in both its
/// given orientation and its reverse complement, timing the two searches
/// together per algorithm. Missing or empty inputs skip the scenario.
fn run_real_scenario(genome_path: &Path, pattern: &[u8]) {
    let Some(genome) = load_input(genome_path) else {
        log::warn!("skipping scenario: {} unavailable", genome_path.display());
        return;
    };

    let pattern_rc = reverse_complement(pattern);
    println!("Text length: {} | Pattern length: {}", genome.len(), pattern.len());

    run_both_orientations::<BruteForce>("Brute force", &genome, pattern, &pattern_rc);
    run_both_orientations::<KMP>("KMP", &genome, pattern, &pattern_rc);
}

fn run_both_orientations<S: StringSearch>(
    name: &str,
    genome: &[u8],
    forward: &[u8],
    reverse: &[u8],
) {
    let start = Instant::now();
    let fwd = S::find_all_bytes(genome, forward);
    let rev = S::find_all_bytes(genome, reverse);
    let elapsed: Duration = start.elapsed();

    println!("\n--- {} ---", name);
    println!("Elapsed: {:.4} seconds", elapsed.as_secs_f64());
    println!("Occurrences: {} (forward), {} (reverse complement)", fwd.len(), rev.len());
}

/// Loads a FASTA input, treating both read failures and empty payloads as
/// "input unavailable" so the caller can skip the dependent scenario
/// without aborting the rest of the run.
fn load_input(path: &Path) -> Option<Vec<u8>> {
    match read_sequence(path) {
        Ok(sequence) if sequence.is_empty() => {
            log::warn!("{} contained no sequence data", path.display());
            None
        }
        Ok(sequence) => Some(sequence),
        Err(err) => {
            log::warn!("could not read {}: {}", path.display(), err);
            None
        }
    }
}
