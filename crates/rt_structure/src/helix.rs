//! Helix definition.
//!
//! A `Helix` is a maximal stack of nested base pairs `(i, j), (i+1, j-1), …`.
//! Its pairs are kept sorted from the outermost to the innermost rung, and
//! everything else (location, length, ends) is derived from them.
//!

use std::fmt;
use serde::Serialize;

use crate::BasePair;
use crate::JunctionId;
use crate::Location;
use crate::NAIDX;


/// Index of a helix inside its `SecondaryStructure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HelixId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Helix {
    name: String,
    pairs: Vec<BasePair>,
    junctions_linked: [Option<JunctionId>; 2],
}

impl Helix {
    /// Build a helix from its rungs, in any order. Returns `None` for an
    /// empty set of pairs.
    pub fn new(name: impl Into<String>, mut pairs: Vec<BasePair>) -> Option<Self> {
        if pairs.is_empty() {
            return None;
        }
        pairs.sort_unstable();
        pairs.dedup();
        Some(Helix {
            name: name.into(),
            pairs,
            junctions_linked: [None, None],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rungs, outermost first.
    pub fn pairs(&self) -> &[BasePair] {
        &self.pairs
    }

    pub fn outer_pair(&self) -> &BasePair {
        &self.pairs[0]
    }

    pub fn inner_pair(&self) -> &BasePair {
        &self.pairs[self.pairs.len() - 1]
    }

    /// All paired positions of the helix.
    pub fn location(&self) -> Location {
        self.pairs.iter()
            .map(BasePair::location)
            .reduce(|acc, loc| acc.union(&loc))
            .unwrap_or_else(|| self.outer_pair().location())
    }

    /// Number of rungs: paired positions / 2.
    pub fn length(&self) -> usize {
        self.location().length() / 2
    }

    /// `[outer start, inner start, inner end, outer end]`, ascending.
    pub fn ends(&self) -> [NAIDX; 4] {
        let outer = self.outer_pair();
        let inner = self.inner_pair();
        [outer.i(), inner.i(), inner.j(), outer.j()]
    }

    /// 5' start of the outermost rung.
    pub fn start(&self) -> NAIDX {
        self.outer_pair().i()
    }

    /// 3' end of the outermost rung.
    pub fn end(&self) -> NAIDX {
        self.outer_pair().j()
    }

    /// True if the two helices interleave, `a < c < b < d`, rather than
    /// nest or sit side by side.
    pub fn crosses(&self, other: &Helix) -> bool {
        let (a, b) = (self.start(), self.end());
        let (c, d) = (other.start(), other.end());
        (a < c && c < b && b < d) || (c < a && a < d && d < b)
    }

    /// Position paired to `position` within this helix.
    pub fn paired_position(&self, position: NAIDX) -> Option<NAIDX> {
        self.pairs.iter().find_map(|bp| bp.partner_of(position))
    }

    pub fn junctions_linked(&self) -> [Option<JunctionId>; 2] {
        self.junctions_linked
    }

    /// Fill the first free junction slot, or overwrite the second one.
    pub(crate) fn set_junction(&mut self, junction: JunctionId) {
        if self.junctions_linked[0].is_some() {
            self.junctions_linked[1] = Some(junction);
        } else {
            self.junctions_linked[0] = Some(junction);
        }
    }

    pub(crate) fn clear_junctions(&mut self) {
        self.junctions_linked = [None, None];
    }
}

impl fmt::Display for Helix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.ends();
        write!(f, "{} {}-{},{}-{} ({} bp)", self.name, a, b, c, d, self.length())
    }
}
