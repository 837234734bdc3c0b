use thiserror::Error;

use crate::NAIDX;

/// Everything that can go wrong while building structural objects.
///
/// None of these are fatal for a whole reconstruction: callers are expected
/// to drop the offending input and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("cannot build a location from an empty set of positions")]
    EmptyLocation,

    #[error("malformed location descriptor '{descr}': {reason}")]
    MalformedDescriptor { descr: String, reason: String },

    #[error("position {0} cannot pair with itself")]
    SelfPair(NAIDX),

    #[error("positions are 1-based, got a pair involving position 0")]
    ZeroPosition,

    #[error("invalid nucleotide '{symbol}' at position {position}")]
    InvalidNucleotide { symbol: char, position: usize },

    #[error("invalid motif pattern '{pattern}': {reason}")]
    InvalidMotif { pattern: String, reason: String },
}
