//! FASTA reader.

use std::fs;
use std::path::Path;
use log::debug;

use rt_structure::Rna;

use crate::FormatError;


/// True for non-empty lines made of nucleotide letters only.
pub(crate) fn is_sequence_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| matches!(c,
        'A' | 'C' | 'G' | 'U' | 'T' | 'a' | 'c' | 'g' | 'u' | 't'))
}

/// Parse all records of a FASTA text. Lines that are neither headers nor
/// pure sequence are skipped.
pub fn parse_fasta(content: &str) -> Result<Vec<Rna>, FormatError> {
    let mut records = Vec::new();
    let mut name: Option<String> = None;
    let mut seq = String::new();

    for (k, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('>') {
            if !seq.is_empty() {
                records.push(Rna::new(name.take(), &seq)?);
                seq.clear();
            }
            name = Some(header.trim().to_string());
        } else if is_sequence_line(line) {
            seq.push_str(line);
        } else if !line.is_empty() {
            debug!("Skipping FASTA line {}: '{}'.", k + 1, line);
        }
    }
    if !seq.is_empty() {
        records.push(Rna::new(name, &seq)?);
    }
    Ok(records)
}

pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<Rna>, FormatError> {
    parse_fasta(&fs::read_to_string(path)?)
}
