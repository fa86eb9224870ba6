pub mod fasta;
pub mod sequence;

pub use fasta::{parse_sequence, read_sequence};
pub use sequence::{DNA_ALPHABET, random_sequence, reverse_complement};
