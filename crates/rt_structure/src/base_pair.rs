//! BasePair definition.
//!
//! A `BasePair` relates exactly two 1-based positions `i < j` and carries
//! its pairing geometry in Leontis–Westhof terms: the edge used by the
//! 5' and the 3' partner, and the glycosidic bond orientation.
//!
//! Equality and hashing cover positions *and* geometry, so a cis WC/WC pair
//! and a trans Hoogsteen/Sugar pair between the same bases are distinct.
//!

use std::fmt;
use serde::Serialize;

use crate::Location;
use crate::StructureError;
use crate::NAIDX;
use crate::P1KEY;


/// The base edge involved in a pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Edge {
    #[default]
    WatsonCrick,
    Hoogsteen,
    Sugar,
    Unknown,
}

impl Edge {
    /// One-letter Leontis–Westhof symbol.
    pub fn symbol(&self) -> char {
        match self {
            Edge::WatsonCrick => 'W',
            Edge::Hoogsteen => 'H',
            Edge::Sugar => 'S',
            Edge::Unknown => '?',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Orientation {
    #[default]
    Cis,
    Trans,
    Unknown,
}

impl Orientation {
    pub fn symbol(&self) -> char {
        match self {
            Orientation::Cis => 'c',
            Orientation::Trans => 't',
            Orientation::Unknown => '?',
        }
    }
}

/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BasePair {
    i: NAIDX,
    j: NAIDX,
    edge5: Edge,
    edge3: Edge,
    orientation: Orientation,
}

impl BasePair {
    /// A canonical (cis Watson-Crick/Watson-Crick) pair between two
    /// positions, given in any order.
    pub fn new(p1: NAIDX, p2: NAIDX) -> Result<Self, StructureError> {
        if p1 == 0 || p2 == 0 {
            return Err(StructureError::ZeroPosition);
        }
        if p1 == p2 {
            return Err(StructureError::SelfPair(p1));
        }
        let (i, j) = if p1 < p2 { (p1, p2) } else { (p2, p1) };
        Ok(BasePair {
            i,
            j,
            edge5: Edge::default(),
            edge3: Edge::default(),
            orientation: Orientation::default(),
        })
    }

    /// Same as `new`, with explicit geometry. The edges refer to the 5'
    /// and the 3' partner *after* ordering the positions.
    pub fn with_geometry(
        p1: NAIDX,
        p2: NAIDX,
        edge5: Edge,
        edge3: Edge,
        orientation: Orientation,
    ) -> Result<Self, StructureError> {
        let mut bp = BasePair::new(p1, p2)?;
        bp.edge5 = edge5;
        bp.edge3 = edge3;
        bp.orientation = orientation;
        Ok(bp)
    }

    /// Return the 5'-side position.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side position.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    pub fn edge5(&self) -> Edge {
        self.edge5
    }

    pub fn edge3(&self) -> Edge {
        self.edge3
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The two paired positions as a location.
    pub fn location(&self) -> Location {
        &Location::new(self.i, self.i) + &[self.j][..]
    }

    /// If `position` is one side of this pair, return the other side.
    pub fn partner_of(&self, position: NAIDX) -> Option<NAIDX> {
        if position == self.i {
            Some(self.j)
        } else if position == self.j {
            Some(self.i)
        } else {
            None
        }
    }

    pub fn involves(&self, position: NAIDX) -> bool {
        self.i == position || self.j == position
    }

    /// Compact key encoding both positions (geometry is ignored).
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << NAIDX::BITS) | (self.j as P1KEY)
    }

    /// Leontis–Westhof family name, e.g. `cWW` or `tHS`.
    pub fn family(&self) -> String {
        format!("{}{}{}",
            self.orientation.symbol(),
            self.edge5.symbol(),
            self.edge3.symbol())
    }

    /// True if `other` is stacked directly inside this pair:
    /// `(i+1, j-1)` positionally.
    pub fn stacks_on(&self, other: &BasePair) -> bool {
        self.i + 1 == other.i && self.j - 1 == other.j
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.i, self.j, self.family())
    }
}
