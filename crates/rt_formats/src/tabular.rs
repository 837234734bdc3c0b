//! Connectivity table (CT) and BPSEQ readers.
//!
//! Both formats list one nucleotide per line together with the index of
//! its partner (0 = unpaired). Every pair shows up twice; it is emitted once,
//! from the line of its 3' partner. Self pairs are reported and skipped.
//!

use std::fs;
use std::path::Path;
use log::debug;
use log::warn;

use rt_structure::BasePair;
use rt_structure::Rna;
use rt_structure::NAIDX;

use crate::FormatError;


fn parse_index(token: &str, line: usize, what: &str) -> Result<NAIDX, FormatError> {
    token.parse().map_err(|_| FormatError::Malformed {
        line,
        message: format!("cannot read {what} from '{token}'"),
    })
}

/// Shared record handling: append the base, emit the pair if due.
fn take_record(
    index: NAIDX,
    base: &str,
    partner: NAIDX,
    seq: &mut String,
    pairs: &mut Vec<BasePair>,
) {
    seq.push_str(base);
    if partner != 0 && partner == index {
        warn!("Skipping self pair at position {}.", index);
    } else if partner != 0 && partner < index {
        match BasePair::new(index, partner) {
            Ok(bp) => pairs.push(bp),
            Err(e) => warn!("Skipping pair ({}, {}): {}.", index, partner, e),
        }
    }
}

/// Parse a single-structure CT file:
///
/// ```text
/// 9  ENERGY = -1.2  hairpin
/// 1 G 0 2 9 1
/// ...
/// ```
pub fn parse_ct(content: &str) -> Result<(Rna, Vec<BasePair>), FormatError> {
    let mut lines = content.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    let name = lines.next().and_then(|(_, header)| {
        let title: Vec<&str> = header.split_whitespace().skip(1).collect();
        (!title.is_empty()).then(|| title.join(" "))
    });

    let mut seq = String::new();
    let mut pairs = Vec::new();
    for (k, line) in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 6 {
            debug!("Skipping CT line {}: '{}'.", k + 1, line.trim());
            continue;
        }
        let index = parse_index(tokens[0], k + 1, "index")?;
        let partner = parse_index(tokens[4], k + 1, "partner")?;
        take_record(index, tokens[1], partner, &mut seq, &mut pairs);
    }

    if seq.is_empty() {
        return Err(FormatError::NoSequence);
    }
    Ok((Rna::new(name, &seq)?, pairs))
}

/// Parse a BPSEQ file: `index base partner` per line, `#` comments and
/// free-text header lines are ignored.
pub fn parse_bpseq(content: &str) -> Result<(Rna, Vec<BasePair>), FormatError> {
    let mut seq = String::new();
    let mut pairs = Vec::new();

    for (k, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 || tokens[0].parse::<NAIDX>().is_err() {
            debug!("Skipping BPSEQ line {}: '{}'.", k + 1, line);
            continue;
        }
        let index = parse_index(tokens[0], k + 1, "index")?;
        let partner = parse_index(tokens[2], k + 1, "partner")?;
        take_record(index, tokens[1], partner, &mut seq, &mut pairs);
    }

    if seq.is_empty() {
        return Err(FormatError::NoSequence);
    }
    Ok((Rna::new(None, &seq)?, pairs))
}

pub fn read_ct(path: impl AsRef<Path>) -> Result<(Rna, Vec<BasePair>), FormatError> {
    parse_ct(&fs::read_to_string(path)?)
}

pub fn read_bpseq(path: impl AsRef<Path>) -> Result<(Rna, Vec<BasePair>), FormatError> {
    parse_bpseq(&fs::read_to_string(path)?)
}
