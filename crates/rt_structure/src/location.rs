//! Block and Location definitions.
//!
//! A `Location` is an arbitrary set of sequence positions, stored as the
//! minimal list of contiguous `Block`s: sorted by start, never overlapping
//! and never adjacent. Every constructor renormalizes, so two Locations
//! holding the same positions are always structurally equal.
//!
//! Positions are **1-based**, as everywhere in this crate.
//!

use std::fmt;
use std::ops::Add;
use std::ops::Sub;
use std::str::FromStr;
use itertools::Itertools;
use nohash_hasher::IntSet;
use serde::Serialize;

use crate::NAIDX;
use crate::StructureError;


/// A contiguous, closed range of positions `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    start: NAIDX,
    end: NAIDX,
}

impl Block {
    /// Create a block, swapping the bounds if given in reverse.
    pub fn new(start: NAIDX, end: NAIDX) -> Self {
        if start <= end {
            Block { start, end }
        } else {
            Block { start: end, end: start }
        }
    }

    pub fn start(&self) -> NAIDX {
        self.start
    }

    pub fn end(&self) -> NAIDX {
        self.end
    }

    /// Number of positions in the block (never zero).
    pub fn length(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn contains(&self, position: NAIDX) -> bool {
        self.start <= position && position <= self.end
    }

    pub fn positions(&self) -> impl Iterator<Item = NAIDX> + use<> {
        self.start..=self.end
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Add<&[NAIDX]> for Block {
    type Output = Location;

    fn add(self, rhs: &[NAIDX]) -> Location {
        &Location::from(self) + rhs
    }
}

impl Sub<&[NAIDX]> for Block {
    type Output = Option<Location>;

    fn sub(self, rhs: &[NAIDX]) -> Option<Location> {
        &Location::from(self) - rhs
    }
}

/// A normalized, possibly discontiguous set of positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    blocks: Vec<Block>,
}

impl Location {
    /// A single-block location. Always succeeds, swapping reversed bounds.
    pub fn new(start: NAIDX, end: NAIDX) -> Self {
        Location { blocks: vec![Block::new(start, end)] }
    }

    /// Normalize an arbitrary list of positions (any order, duplicates allowed).
    pub fn from_positions(positions: &[NAIDX]) -> Result<Self, StructureError> {
        let blocks = to_blocks(positions.iter().copied())?;
        Ok(Location { blocks })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn start(&self) -> NAIDX {
        self.blocks[0].start
    }

    pub fn end(&self) -> NAIDX {
        self.blocks[self.blocks.len() - 1].end
    }

    /// Number of positions contained, which is *not* `end - start + 1`
    /// for discontiguous locations.
    pub fn length(&self) -> usize {
        self.blocks.iter().map(Block::length).sum()
    }

    /// Materialize all positions in ascending order. O(length).
    pub fn positions(&self) -> Vec<NAIDX> {
        self.iter_positions().collect()
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = NAIDX> + '_ {
        self.blocks.iter().flat_map(Block::positions)
    }

    pub fn contains(&self, position: NAIDX) -> bool {
        self.block_containing(position).is_some()
    }

    /// The block holding `position`, if any.
    pub fn block_containing(&self, position: NAIDX) -> Option<&Block> {
        let idx = self.blocks.partition_point(|b| b.end < position);
        self.blocks.get(idx).filter(|b| b.contains(position))
    }

    /// The first contiguous run starting strictly after `position`.
    pub fn next_block_after(&self, position: NAIDX) -> Option<&Block> {
        let idx = self.blocks.partition_point(|b| b.start <= position);
        self.blocks.get(idx)
    }

    /// Add a single position; returns true if it was not present before.
    pub fn insert(&mut self, position: NAIDX) -> bool {
        if self.contains(position) {
            return false;
        }
        let mut blocks = std::mem::take(&mut self.blocks);
        blocks.push(Block::new(position, position));
        self.blocks = merge_blocks(blocks);
        true
    }

    /// Set union with another location.
    pub fn union(&self, other: &Location) -> Location {
        let blocks = self.blocks.iter().chain(other.blocks.iter()).copied().collect();
        Location { blocks: merge_blocks(blocks) }
    }

    /// Set difference; `None` if nothing is left.
    pub fn difference(&self, other: &Location) -> Option<Location> {
        let remaining: Vec<NAIDX> = self.iter_positions()
            .filter(|&p| !other.contains(p))
            .collect();
        Location::from_positions(&remaining).ok()
    }
}

impl From<Block> for Location {
    fn from(block: Block) -> Self {
        Location { blocks: vec![block] }
    }
}

impl TryFrom<&[NAIDX]> for Location {
    type Error = StructureError;

    fn try_from(positions: &[NAIDX]) -> Result<Self, Self::Error> {
        Location::from_positions(positions)
    }
}

impl Add<&[NAIDX]> for &Location {
    type Output = Location;

    fn add(self, rhs: &[NAIDX]) -> Location {
        let mut blocks = self.blocks.clone();
        blocks.extend(rhs.iter().map(|&p| Block::new(p, p)));
        Location { blocks: merge_blocks(blocks) }
    }
}

impl Add<&Location> for &Location {
    type Output = Location;

    fn add(self, rhs: &Location) -> Location {
        self.union(rhs)
    }
}

impl Sub<&[NAIDX]> for &Location {
    type Output = Option<Location>;

    fn sub(self, rhs: &[NAIDX]) -> Option<Location> {
        let drop: IntSet<NAIDX> = rhs.iter().copied().collect();
        let remaining: Vec<NAIDX> = self.iter_positions()
            .filter(|p| !drop.contains(p))
            .collect();
        Location::from_positions(&remaining).ok()
    }
}

impl Sub<&Location> for &Location {
    type Output = Option<Location>;

    fn sub(self, rhs: &Location) -> Option<Location> {
        self.difference(rhs)
    }
}

impl FromStr for Location {
    type Err = StructureError;

    /// Parse a descriptor such as `"3-5,9-9,12-20"`.
    fn from_str(descr: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| StructureError::MalformedDescriptor {
            descr: descr.to_string(),
            reason,
        };

        let mut blocks = Vec::new();
        for token in descr.split(',') {
            let token = token.trim();
            let (a, b) = token
                .split_once('-')
                .ok_or_else(|| malformed(format!("'{token}' is not a start-end range")))?;
            let start: NAIDX = a.trim().parse()
                .map_err(|_| malformed(format!("bad start in '{token}'")))?;
            let end: NAIDX = b.trim().parse()
                .map_err(|_| malformed(format!("bad end in '{token}'")))?;
            if start == 0 || end == 0 {
                return Err(malformed(format!("'{token}' uses position 0")));
            }
            blocks.push(Block::new(start, end));
        }
        Ok(Location { blocks: merge_blocks(blocks) })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.blocks.iter().join(","))
    }
}

/// Sort, deduplicate and compact positions into maximal runs.
fn to_blocks(positions: impl IntoIterator<Item = NAIDX>) -> Result<Vec<Block>, StructureError> {
    let mut sorted: Vec<NAIDX> = positions.into_iter().collect();
    if sorted.is_empty() {
        return Err(StructureError::EmptyLocation);
    }
    sorted.sort_unstable();
    sorted.dedup();

    let mut blocks = Vec::new();
    let mut start = sorted[0];
    let mut end = sorted[0];
    for &p in &sorted[1..] {
        if p == end + 1 {
            end = p;
        } else {
            blocks.push(Block { start, end });
            start = p;
            end = p;
        }
    }
    blocks.push(Block { start, end });
    Ok(blocks)
}

/// Merge overlapping or adjacent blocks.
fn merge_blocks(mut blocks: Vec<Block>) -> Vec<Block> {
    blocks.sort_unstable_by_key(|b| (b.start, b.end));
    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
    for b in blocks {
        match merged.last_mut() {
            Some(last) if b.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(b.end);
            }
            _ => merged.push(b),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    #[test]
    fn test_block_swaps_bounds() {
        let b = Block::new(9, 3);
        assert_eq!((b.start(), b.end()), (3, 9));
        assert_eq!(b.length(), 7);
        assert!(b.contains(3) && b.contains(9));
        assert!(!b.contains(10));
        assert_eq!(format!("{}", b), "3-9");
    }

    #[test]
    fn test_normalization_is_order_independent() {
        let a = Location::from_positions(&[5, 3, 4, 1]).unwrap();
        let b = Location::from_positions(&[1, 3, 4, 5]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.blocks(), &[Block::new(1, 1), Block::new(3, 5)]);
        assert_eq!(a.to_string(), "1-1,3-5");
        assert_eq!(a.start(), 1);
        assert_eq!(a.end(), 5);
        assert_eq!(a.length(), 4);
    }

    #[test]
    fn test_normalization_shuffled_with_duplicates() {
        let mut rng = StdRng::seed_from_u64(42);
        let base: Vec<NAIDX> = vec![2, 3, 4, 8, 9, 15, 21, 22, 23, 24];
        let reference = Location::from_positions(&base).unwrap();
        for _ in 0..20 {
            let mut input = base.clone();
            input.extend_from_slice(&base[..4]);
            input.shuffle(&mut rng);
            let loc = Location::from_positions(&input).unwrap();
            assert_eq!(loc, reference);
            assert_eq!(loc.positions(), base);
            // idempotent
            let again = Location::from_positions(&loc.positions()).unwrap();
            assert_eq!(again, loc);
        }
    }

    #[test]
    fn test_empty_positions_fail() {
        assert_eq!(Location::from_positions(&[]), Err(StructureError::EmptyLocation));
        assert!(Location::try_from(&[] as &[NAIDX]).is_err());
    }

    #[test]
    fn test_single_block_constructor() {
        let loc = Location::new(12, 4);
        assert_eq!(loc.blocks().len(), 1);
        assert_eq!(loc.to_string(), "4-12");
        assert_eq!(loc.length(), 9);
    }

    #[test]
    fn test_union_and_difference() {
        let a = Location::from_positions(&[1, 2, 3, 10, 11]).unwrap();
        let b = Location::from_positions(&[4, 5, 20]).unwrap();

        let u = &a + &b;
        assert_eq!(u.positions(), vec![1, 2, 3, 4, 5, 10, 11, 20]);
        assert_eq!(u.to_string(), "1-5,10-11,20-20");

        let d = (&u - &b).unwrap();
        assert_eq!(d.positions(), a.positions());

        let plus = &a + &[12, 13][..];
        assert_eq!(plus.to_string(), "1-3,10-13");
        let minus = (&a - &[2, 10][..]).unwrap();
        assert_eq!(minus.to_string(), "1-1,3-3,11-11");

        assert_eq!(&a - &a, None);
        assert_eq!(Block::new(1, 3) - &[1, 2, 3][..], None);
        assert_eq!((Block::new(1, 3) + &[5][..]).to_string(), "1-3,5-5");
    }

    #[test]
    fn test_contains_and_successor() {
        let loc: Location = "2-4,8-8,12-15".parse().unwrap();
        assert!(loc.contains(3));
        assert!(loc.contains(8));
        assert!(!loc.contains(5));
        assert!(!loc.contains(16));
        assert_eq!(loc.block_containing(13), Some(&Block::new(12, 15)));
        assert_eq!(loc.block_containing(1), None);
        assert_eq!(loc.next_block_after(3), Some(&Block::new(8, 8)));
        assert_eq!(loc.next_block_after(8), Some(&Block::new(12, 15)));
        assert_eq!(loc.next_block_after(1), Some(&Block::new(2, 4)));
        assert_eq!(loc.next_block_after(12), None);
    }

    #[test]
    fn test_insert_merges_runs() {
        let mut loc = Location::from_positions(&[1, 2, 4, 5]).unwrap();
        assert!(loc.insert(3));
        assert!(!loc.insert(3));
        assert_eq!(loc.to_string(), "1-5");
        assert!(loc.insert(9));
        assert_eq!(loc.to_string(), "1-5,9-9");
    }

    #[test]
    fn test_descriptor_parsing() {
        let loc: Location = "5-3, 7-9".parse().unwrap();
        assert_eq!(loc.to_string(), "3-5,7-9");

        // adjacent and overlapping descriptors collapse
        let loc: Location = "1-3,4-6,5-8".parse().unwrap();
        assert_eq!(loc.to_string(), "1-8");

        for bad in ["", "3", "1-3,x-4", "1-", "0-2", "1-3;4-5"] {
            assert!(
                matches!(bad.parse::<Location>(), Err(StructureError::MalformedDescriptor { .. })),
                "{bad} should not parse"
            );
        }
    }
}
