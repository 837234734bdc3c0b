//! Knobs for the structural reconstruction.

use serde::Deserialize;
use serde::Serialize;

/// Which helix to give up when two crossing helices have the same number
/// of rungs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Remove the helix with the larger 5' start.
    #[default]
    RemoveLater,
    /// Remove the helix with the smaller 5' start.
    RemoveEarlier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Turn base pairs without a stacking neighbor into length-1 helices
    /// instead of leaving them as tertiary interactions.
    pub isolated_pairs_as_helices: bool,
    pub pseudoknot_tie_break: TieBreak,
}

impl StructureConfig {
    pub fn with_isolated_pairs(mut self, yes: bool) -> Self {
        self.isolated_pairs_as_helices = yes;
        self
    }

    pub fn with_tie_break(mut self, tie: TieBreak) -> Self {
        self.pseudoknot_tie_break = tie;
        self
    }
}
