//! Dot-bracket notation.
//!
//! Three bracket families are recognized, each with its own stack so that
//! simple pseudoknots can be annotated: `()` for Watson-Crick, `{}` for
//! Sugar and `[]` for Hoogsteen pairing edges. Every other symbol is
//! unpaired. Unmatched closing brackets are skipped without complaint.
//!

use std::fmt;
use log::debug;

use crate::BasePair;
use crate::Edge;
use crate::Orientation;
use crate::NAIDX;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketFamily {
    Round,
    Curly,
    Square,
}

impl BracketFamily {
    /// The pairing edge a bracket family stands for.
    pub fn edge(&self) -> Edge {
        match self {
            BracketFamily::Round => Edge::WatsonCrick,
            BracketFamily::Curly => Edge::Sugar,
            BracketFamily::Square => Edge::Hoogsteen,
        }
    }

    fn index(&self) -> usize {
        match self {
            BracketFamily::Round => 0,
            BracketFamily::Curly => 1,
            BracketFamily::Square => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired,
    Open(BracketFamily),
    Close(BracketFamily),
}

impl From<char> for DotBracket {
    fn from(c: char) -> Self {
        use BracketFamily::*;
        match c {
            '(' => DotBracket::Open(Round),
            '{' => DotBracket::Open(Curly),
            '[' => DotBracket::Open(Square),
            ')' => DotBracket::Close(Round),
            '}' => DotBracket::Close(Curly),
            ']' => DotBracket::Close(Square),
            _ => DotBracket::Unpaired,
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        use BracketFamily::*;
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open(Round) => '(',
            DotBracket::Open(Curly) => '{',
            DotBracket::Open(Square) => '[',
            DotBracket::Close(Round) => ')',
            DotBracket::Close(Curly) => '}',
            DotBracket::Close(Square) => ']',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode into 1-based base pairs, in order of their closing bracket.
    ///
    /// `edge5` is the opening bracket's edge, `edge3` the closing one's;
    /// with one stack per family they always agree.
    pub fn to_base_pairs(&self) -> Vec<BasePair> {
        let mut stacks: [Vec<(NAIDX, Edge)>; 3] = Default::default();
        let mut pairs = Vec::new();

        for (k, db) in self.0.iter().enumerate() {
            let pos = k as NAIDX + 1;
            match db {
                DotBracket::Unpaired => {}
                DotBracket::Open(family) => stacks[family.index()].push((pos, family.edge())),
                DotBracket::Close(family) => match stacks[family.index()].pop() {
                    Some((open, edge5)) => {
                        if let Ok(bp) = BasePair::with_geometry(
                            open, pos, edge5, family.edge(), Orientation::Cis)
                        {
                            pairs.push(bp);
                        }
                    }
                    None => debug!("Ignoring unmatched '{}' at position {}.", char::from(*db), pos),
                },
            }
        }
        let dangling: usize = stacks.iter().map(Vec::len).sum();
        if dangling > 0 {
            debug!("Ignoring {} unmatched opening bracket(s).", dangling);
        }
        pairs
    }
}

impl From<&str> for DotBracketVec {
    fn from(s: &str) -> Self {
        DotBracketVec(s.chars().map(DotBracket::from).collect())
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|&db| char::from(db)).collect();
        write!(f, "{}", s)
    }
}
