//! The nucleotide sequence a structure is defined on.

use std::fmt;
use std::ops::Add;
use regex::Regex;
use serde::Serialize;

use crate::Block;
use crate::Location;
use crate::StructureError;
use crate::NAIDX;

/// An RNA (or DNA) sequence over `A, C, G, U, T`, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rna {
    name: Option<String>,
    seq: String,
}

impl Rna {
    /// Uppercases `seq` and rejects anything outside `ACGUT`.
    pub fn new(name: Option<String>, seq: &str) -> Result<Self, StructureError> {
        let seq = seq.to_ascii_uppercase();
        if let Some((position, symbol)) = seq
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, 'A' | 'C' | 'G' | 'U' | 'T'))
        {
            return Err(StructureError::InvalidNucleotide { symbol, position: position + 1 });
        }
        Ok(Rna { name, seq })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn seq(&self) -> &str {
        &self.seq
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Nucleotide at a 1-based position.
    pub fn base(&self, position: NAIDX) -> Option<char> {
        let idx = (position as usize).checked_sub(1)?;
        self.seq.as_bytes().get(idx).map(|&b| b as char)
    }

    /// Concatenated bases of every block of `location`. Positions beyond
    /// the sequence are skipped.
    pub fn subsequence(&self, location: &Location) -> String {
        location.blocks().iter().map(|b| self.block_seq(b)).collect()
    }

    /// One sub-sequence per block.
    pub fn split(&self, blocks: &[Block]) -> Vec<Rna> {
        blocks.iter()
            .map(|b| Rna { name: None, seq: self.block_seq(b) })
            .collect()
    }

    /// Non-overlapping matches of the regular expression `pattern`, as
    /// 1-based blocks. The sequence is uppercase, so patterns should be too.
    /// Empty matches are skipped.
    pub fn find_motif(&self, pattern: &str) -> Result<Vec<Block>, StructureError> {
        let re = Regex::new(pattern).map_err(|e| StructureError::InvalidMotif {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(re.find_iter(&self.seq)
            .filter(|m| !m.is_empty())
            .map(|m| Block::new(m.start() as NAIDX + 1, m.end() as NAIDX))
            .collect())
    }

    fn block_seq(&self, block: &Block) -> String {
        let from = (block.start() as usize).saturating_sub(1).min(self.seq.len());
        let to = (block.end() as usize).min(self.seq.len());
        self.seq[from..to].to_string()
    }
}

impl Add<&Rna> for &Rna {
    type Output = Rna;

    fn add(self, rhs: &Rna) -> Rna {
        Rna { name: None, seq: format!("{}{}", self.seq, rhs.seq) }
    }
}

impl TryFrom<&str> for Rna {
    type Error = StructureError;

    fn try_from(seq: &str) -> Result<Self, Self::Error> {
        Rna::new(None, seq)
    }
}

impl fmt::Display for Rna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, ">{}\n{}", name, self.seq),
            None => write!(f, "{}", self.seq),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_and_validation() {
        let rna = Rna::try_from("ggGAaacCC").unwrap();
        assert_eq!(rna.seq(), "GGGAAACCC");
        assert_eq!(rna.len(), 9);
        assert_eq!(rna.base(1), Some('G'));
        assert_eq!(rna.base(9), Some('C'));
        assert_eq!(rna.base(0), None);
        assert_eq!(rna.base(10), None);

        assert_eq!(
            Rna::try_from("GGXA"),
            Err(StructureError::InvalidNucleotide { symbol: 'X', position: 3 })
        );
    }

    #[test]
    fn test_subsequence_and_split() {
        let rna = Rna::new(Some("toy".to_string()), "GGGAAACCC").unwrap();
        let loc: Location = "1-2,8-9".parse().unwrap();
        assert_eq!(rna.subsequence(&loc), "GGCC");
        let parts = rna.split(&[Block::new(1, 3), Block::new(4, 6)]);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].seq(), "AAA");
        assert_eq!(format!("{}", rna), ">toy\nGGGAAACCC");
    }

    #[test]
    fn test_concat_and_motif() {
        let a = Rna::try_from("GGAA").unwrap();
        let b = Rna::try_from("AACC").unwrap();
        let ab = &a + &b;
        assert_eq!(ab.seq(), "GGAAAACC");
        assert_eq!(ab.find_motif("AAA").unwrap(), vec![Block::new(3, 5)]);
        assert!(ab.find_motif("UUU").unwrap().is_empty());
        assert!(ab.find_motif("").unwrap().is_empty());
    }

    #[test]
    fn test_motif_pattern() {
        let rna = Rna::try_from("GAAGUACCGGAUGUA").unwrap();
        assert_eq!(
            rna.find_motif("G[AU]A").unwrap(),
            vec![Block::new(1, 3), Block::new(4, 6), Block::new(13, 15)]
        );
        assert_eq!(rna.find_motif("C+").unwrap(), vec![Block::new(7, 8)]);
        assert_eq!(rna.find_motif("^GA").unwrap(), vec![Block::new(1, 2)]);
        assert!(matches!(
            rna.find_motif("G[AU"),
            Err(StructureError::InvalidMotif { .. })
        ));
    }
}
