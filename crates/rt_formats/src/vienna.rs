//! Vienna (dot-bracket) reader.
//!
//! ```text
//! >optional name
//! GGGAAACCC
//! (((...))) (-1.20)
//! ```
//!

use std::fs;
use std::path::Path;

use rt_structure::Rna;

use crate::fasta::is_sequence_line;
use crate::FormatError;


/// Returns the sequence and the bracket string. A trailing energy
/// annotation on the structure line is dropped.
pub fn parse_vienna(content: &str) -> Result<(Rna, String), FormatError> {
    let mut name: Option<String> = None;
    let mut seq = String::new();
    let mut bn = String::new();

    for line in content.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix('>') {
            if name.is_none() {
                name = Some(header.trim().to_string());
            }
        } else if is_sequence_line(line) {
            seq.push_str(line);
        } else if let Some(structure) = line.split_whitespace().next() {
            bn.push_str(structure);
        }
    }

    if seq.is_empty() {
        return Err(FormatError::NoSequence);
    }
    Ok((Rna::new(name, &seq)?, bn))
}

pub fn read_vienna(path: impl AsRef<Path>) -> Result<(Rna, String), FormatError> {
    parse_vienna(&fs::read_to_string(path)?)
}
