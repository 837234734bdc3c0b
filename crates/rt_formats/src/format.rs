//! Format detection and one-call loading of a structure input.

use std::path::Path;
use std::str::FromStr;
use log::info;

use rt_structure::BasePair;
use rt_structure::Rna;
use rt_structure::SecondaryStructure;
use rt_structure::StructureConfig;

use crate::read_bpseq;
use crate::read_ct;
use crate::read_fasta;
use crate::read_vienna;
use crate::FormatError;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Fasta,
    Vienna,
    Ct,
    Bpseq,
}

impl Format {
    /// Guess the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
            .ok_or_else(|| FormatError::UnknownFormat(path.display().to_string()))
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fa" | "fasta" | "fna" => Ok(Format::Fasta),
            "dbn" | "db" | "vienna" | "dotbracket" => Ok(Format::Vienna),
            "ct" => Ok(Format::Ct),
            "bpseq" => Ok(Format::Bpseq),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// What a file gave us: either a bracket string or explicit pairs (or
/// nothing but a sequence, for FASTA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureInput {
    Sequence(Rna),
    Bracket { rna: Rna, bn: String },
    Pairs { rna: Rna, pairs: Vec<BasePair> },
}

impl StructureInput {
    pub fn rna(&self) -> &Rna {
        match self {
            StructureInput::Sequence(rna) => rna,
            StructureInput::Bracket { rna, .. } => rna,
            StructureInput::Pairs { rna, .. } => rna,
        }
    }

    pub fn into_structure(self, config: &StructureConfig) -> SecondaryStructure {
        match self {
            StructureInput::Sequence(rna) => SecondaryStructure::from_base_pairs(rna, &[], config),
            StructureInput::Bracket { rna, bn } => SecondaryStructure::from_dot_bracket(rna, &bn, config),
            StructureInput::Pairs { rna, pairs } => SecondaryStructure::from_base_pairs(rna, &pairs, config),
        }
    }
}

/// Read a structure input. FASTA files contribute their first record only.
pub fn read_input(path: impl AsRef<Path>, format: Option<Format>) -> Result<StructureInput, FormatError> {
    let path = path.as_ref();
    let format = match format {
        Some(f) => f,
        None => Format::from_path(path)?,
    };
    info!("Reading {} as {:?}.", path.display(), format);

    Ok(match format {
        Format::Fasta => {
            let rna = read_fasta(path)?.into_iter().next().ok_or(FormatError::NoSequence)?;
            StructureInput::Sequence(rna)
        }
        Format::Vienna => {
            let (rna, bn) = read_vienna(path)?;
            StructureInput::Bracket { rna, bn }
        }
        Format::Ct => {
            let (rna, pairs) = read_ct(path)?;
            StructureInput::Pairs { rna, pairs }
        }
        Format::Bpseq => {
            let (rna, pairs) = read_bpseq(path)?;
            StructureInput::Pairs { rna, pairs }
        }
    })
}
