use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Reads FASTA-formatted data into one flat uppercase sequence: header
/// lines (starting with '>') are dropped, all remaining lines are
/// concatenated. Multi-record files collapse into a single sequence.
pub fn parse_sequence(reader: impl BufRead) -> io::Result<Vec<u8>> {
    let mut sequence = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() || trimmed.starts_with('>') {
            continue;
        }
        sequence.extend(trimmed.bytes().map(|b| b.to_ascii_uppercase()));
    }

    Ok(sequence)
}

/// Opens a FASTA file and parses it with `parse_sequence`. Files ending in
/// `.gz` are decompressed on the fly, so a downloaded `chr22.fa.gz` can be
/// read without a separate gunzip step.
pub fn read_sequence(path: &Path) -> io::Result<Vec<u8>> {
    log::debug!("reading sequence from {}", path.display());
    let file = File::open(path)?;

    let sequence = if path.extension().is_some_and(|ext| ext == "gz") {
        parse_sequence(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_sequence(BufReader::new(file))?
    };

    log::debug!("loaded {} bases from {}", sequence.len(), path.display());
    Ok(sequence)
}
