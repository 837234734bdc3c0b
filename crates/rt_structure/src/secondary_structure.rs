//! The SecondaryStructure aggregate.
//!
//! Construction runs the whole reconstruction pipeline:
//!  1) decode dot-bracket notation (if that is the input),
//!  2) assemble helices from the base pairs,
//!  3) drop crossing helices (pseudoknots),
//!  4) keep every pair not absorbed by a helix as a tertiary interaction,
//!  5) walk the helix ends to find the junctions.
//!
//! Helices and junctions refer to each other through `HelixId` and
//! `JunctionId`, which are plain indices into the vectors owned here.
//! Removing a helix shifts the ids of all helices after it.
//!

use ahash::AHashSet;
use log::debug;
use log::trace;
use log::warn;
use nohash_hasher::IntSet;
use serde::Serialize;

use crate::assemble_helices;
use crate::resolve_pseudoknots;
use crate::BasePair;
use crate::BracketFamily;
use crate::DotBracket;
use crate::DotBracketVec;
use crate::Helix;
use crate::HelixId;
use crate::Junction;
use crate::JunctionId;
use crate::Location;
use crate::PseudoknotResolution;
use crate::Rna;
use crate::StructureConfig;
use crate::NAIDX;


/// A closed walk around one loop: the positions it covers, the helices it
/// met in order, and the helix ends it left from.
#[derive(Debug, Default)]
struct LoopWalk {
    positions: Vec<NAIDX>,
    linked: Vec<HelixId>,
    entries: Vec<NAIDX>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecondaryStructure {
    name: Option<String>,
    source: Option<String>,
    rna: Rna,
    helices: Vec<Helix>,
    junctions: Vec<Junction>,
    tertiary: Vec<BasePair>,
}

impl SecondaryStructure {
    /// Reconstruct from dot-bracket notation aligned with the sequence.
    pub fn from_dot_bracket(rna: Rna, bn: &str, config: &StructureConfig) -> Self {
        let dbv = DotBracketVec::from(bn);
        if dbv.len() != rna.len() {
            warn!("Bracket notation has {} symbols for a sequence of length {}.",
                dbv.len(), rna.len());
        }
        SecondaryStructure::from_base_pairs(rna, &dbv.to_base_pairs(), config)
    }

    /// Reconstruct from an explicit list of base pairs.
    pub fn from_base_pairs(rna: Rna, pairs: &[BasePair], config: &StructureConfig) -> Self {
        let (valid, out_of_range): (Vec<BasePair>, Vec<BasePair>) = pairs
            .iter()
            .copied()
            .partition(|bp| (bp.j() as usize) <= rna.len());
        for bp in &out_of_range {
            warn!("Dropping pair {} beyond sequence length {}.", bp, rna.len());
        }

        let helices = assemble_helices(&valid, config);
        let PseudoknotResolution { kept, removed } =
            resolve_pseudoknots(helices, config.pseudoknot_tie_break);
        if !removed.is_empty() {
            debug!("Removed {} pseudoknotted helices.", removed.len());
        }

        let secondary: AHashSet<BasePair> = kept.iter()
            .flat_map(|h| h.pairs().iter().copied())
            .collect();
        let mut tertiary: Vec<BasePair> = valid.into_iter()
            .filter(|bp| !secondary.contains(bp))
            .collect();
        tertiary.sort_unstable();
        tertiary.dedup();

        let mut ss = SecondaryStructure {
            name: None,
            source: None,
            rna,
            helices: kept,
            junctions: Vec::new(),
            tertiary,
        };
        ss.find_junctions();
        ss
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn rna(&self) -> &Rna {
        &self.rna
    }

    pub fn length(&self) -> usize {
        self.rna.len()
    }

    pub fn helices(&self) -> &[Helix] {
        &self.helices
    }

    pub fn helix(&self, id: HelixId) -> Option<&Helix> {
        self.helices.get(id.0)
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    pub fn junction(&self, id: JunctionId) -> Option<&Junction> {
        self.junctions.get(id.0)
    }

    /// The (up to two) junctions bordering a helix.
    pub fn junctions_of(&self, id: HelixId) -> Vec<&Junction> {
        self.helix(id)
            .map(|h| h.junctions_linked()
                .iter()
                .flatten()
                .filter_map(|&j| self.junction(j))
                .collect())
            .unwrap_or_default()
    }

    /// All base pairs absorbed in helices.
    pub fn secondary_interactions(&self) -> impl Iterator<Item = &BasePair> + '_ {
        self.helices.iter().flat_map(|h| h.pairs().iter())
    }

    /// Pseudoknots and every pair that did not make it into a helix.
    pub fn tertiary_interactions(&self) -> &[BasePair] {
        &self.tertiary
    }

    /// Partner of `position`, looking at helices first and tertiary
    /// interactions second. `None` if the position is unpaired.
    pub fn paired_position(&self, position: NAIDX) -> Option<NAIDX> {
        self.secondary_interactions()
            .chain(self.tertiary.iter())
            .find_map(|bp| bp.partner_of(position))
    }

    /// The closest helix end strictly after `position` that opens a strand
    /// (outer 5' start or inner 3' start), with its paired position and
    /// the helix it belongs to.
    pub fn next_helix_end(&self, position: NAIDX) -> Option<(NAIDX, NAIDX, HelixId)> {
        let mut best: Option<(NAIDX, NAIDX, HelixId)> = None;
        for (k, h) in self.helices.iter().enumerate() {
            let [outer_i, inner_i, inner_j, outer_j] = h.ends();
            for (end, partner) in [(outer_i, outer_j), (inner_j, inner_i)] {
                if end > position && best.is_none_or(|(b, _, _)| end < b) {
                    best = Some((end, partner, HelixId(k)));
                }
            }
        }
        best
    }

    /// Recompute all junctions from the current helices.
    ///
    /// A loop is entered from the inner start or the outer end of a helix.
    /// Every such entry is walked at most once: a closed walk marks all the
    /// entries it passes through. The two positions of a one-rung helix
    /// border both of its loops, so they show up in two junctions; all other
    /// positions belong to at most one junction.
    pub fn find_junctions(&mut self) {
        self.junctions.clear();
        for h in &mut self.helices {
            h.clear_junctions();
        }

        let mut walked: IntSet<NAIDX> = IntSet::default();
        for k in 0..self.helices.len() {
            let [_, inner_i, _, outer_j] = self.helices[k].ends();
            for start in [inner_i, outer_j] {
                if walked.contains(&start) {
                    continue;
                }
                let Some(walk) = self.walk_loop(start) else {
                    continue;
                };
                walked.extend(walk.entries.iter().copied());
                if let Ok(location) = Location::from_positions(&walk.positions) {
                    self.push_junction(location, walk.linked);
                }
            }
        }
        debug!("Found {} junctions.", self.junctions.len());
    }

    /// Follow helix ends from `start` until we are back at `start`.
    fn walk_loop(&self, start: NAIDX) -> Option<LoopWalk> {
        let max_steps = 2 * self.helices.len() + 1;
        let mut walk = LoopWalk::default();
        let mut pos = start;
        loop {
            let Some((next_end, partner, helix)) = self.next_helix_end(pos) else {
                trace!("Loop walk from {} is open at {}.", start, pos);
                return None;
            };
            walk.entries.push(pos);
            walk.positions.extend(pos..=next_end);
            walk.linked.push(helix);
            pos = partner;
            if pos == start {
                return Some(walk);
            }
            if walk.linked.len() > max_steps {
                trace!("Loop walk from {} does not close.", start);
                return None;
            }
        }
    }

    fn push_junction(&mut self, location: Location, linked: Vec<HelixId>) {
        let id = JunctionId(self.junctions.len());
        for h in &linked {
            self.helices[h.0].set_junction(id);
        }
        self.junctions.push(Junction::new(format!("J{}", id.0 + 1), location, linked));
    }

    /// Remove a helix, demote its pairs to tertiary interactions, and
    /// recompute the junctions.
    pub fn remove_helix(&mut self, id: HelixId) -> Option<Helix> {
        if id.0 >= self.helices.len() {
            return None;
        }
        let helix = self.helices.remove(id.0);
        self.tertiary.extend_from_slice(helix.pairs());
        self.tertiary.sort_unstable();
        self.tertiary.dedup();
        self.find_junctions();
        Some(helix)
    }

    /// Dot-bracket rendering of the helices; tertiary pairs are dots.
    pub fn dot_bracket(&self) -> DotBracketVec {
        let length = self.length() as NAIDX;
        DotBracketVec((1..=length).map(|i| {
            for h in &self.helices {
                let [a, b, c, d] = h.ends();
                if a <= i && i <= b {
                    return DotBracket::Open(BracketFamily::Round);
                } else if c <= i && i <= d {
                    return DotBracket::Close(BracketFamily::Round);
                }
            }
            DotBracket::Unpaired
        }).collect())
    }

    /// Bracket notation as a string.
    pub fn bn(&self) -> String {
        self.dot_bracket().to_string()
    }
}
