//! Helix assembly: group raw base pairs into stacked ladders.
//!
//! Pairs are sorted by their 5' position and scanned as neighbors. Whenever
//! `(i, j)` is directly followed by `(i+1, j-1)` both go into the open
//! helix; any other neighbor closes it. Pairs without a stacking neighbor
//! stay out of all helices unless the configuration asks otherwise.
//!

use log::debug;
use nohash_hasher::IntSet;

use crate::BasePair;
use crate::Helix;
use crate::StructureConfig;
use crate::NAIDX;


/// Build helices from an unordered collection of base pairs.
///
/// The result is sorted by 5' start and named `H1`, `H2`, … in that order.
pub fn assemble_helices(pairs: &[BasePair], config: &StructureConfig) -> Vec<Helix> {
    let mut sorted = pairs.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut stems: Vec<Vec<BasePair>> = Vec::new();
    let mut claimed: IntSet<NAIDX> = IntSet::default();
    let mut current: Vec<BasePair> = Vec::new();

    for w in sorted.windows(2) {
        let (a, b) = (&w[0], &w[1]);
        if claimed.contains(&a.i()) || claimed.contains(&a.j()) {
            continue;
        }
        if a.stacks_on(b) {
            if current.last() != Some(a) {
                current.push(*a);
            }
            current.push(*b);
        } else if !current.is_empty() {
            seal(&mut current, &mut claimed, &mut stems);
        }
    }
    if !current.is_empty() {
        seal(&mut current, &mut claimed, &mut stems);
    }

    if config.isolated_pairs_as_helices {
        for bp in &sorted {
            if !claimed.contains(&bp.i()) && !claimed.contains(&bp.j()) {
                debug!("Isolated pair {} becomes a helix of its own.", bp);
                let mut single = vec![*bp];
                seal(&mut single, &mut claimed, &mut stems);
            }
        }
    }

    stems.sort_unstable_by_key(|s| s[0].i());
    let helices: Vec<Helix> = stems.into_iter()
        .enumerate()
        .filter_map(|(k, stem)| Helix::new(format!("H{}", k + 1), stem))
        .collect();

    debug!("Assembled {} helices from {} base pairs.", helices.len(), sorted.len());
    helices
}

fn seal(current: &mut Vec<BasePair>, claimed: &mut IntSet<NAIDX>, stems: &mut Vec<Vec<BasePair>>) {
    for bp in current.iter() {
        claimed.insert(bp.i());
        claimed.insert(bp.j());
    }
    stems.push(std::mem::take(current));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bps(pairs: &[(NAIDX, NAIDX)]) -> Vec<BasePair> {
        pairs.iter().map(|&(i, j)| BasePair::new(i, j).unwrap()).collect()
    }

    #[test]
    fn test_single_stem() {
        let pairs = bps(&[(3, 7), (1, 9), (2, 8)]);
        let helices = assemble_helices(&pairs, &StructureConfig::default());
        assert_eq!(helices.len(), 1);
        assert_eq!(helices[0].name(), "H1");
        assert_eq!(helices[0].pairs(), &bps(&[(1, 9), (2, 8), (3, 7)])[..]);
        assert_eq!(helices[0].length(), 3);
    }

    #[test]
    fn test_bulge_splits_stems() {
        // ((.((...))))
        let pairs = bps(&[(1, 12), (2, 11), (4, 10), (5, 9)]);
        let helices = assemble_helices(&pairs, &StructureConfig::default());
        assert_eq!(helices.len(), 2);
        assert_eq!(helices[0].ends(), [1, 2, 11, 12]);
        assert_eq!(helices[1].ends(), [4, 5, 9, 10]);
        assert_eq!(helices[1].name(), "H2");
    }

    #[test]
    fn test_isolated_pairs_are_dropped_by_default() {
        // stem 1-2/14-15 plus a lonely pair (5,10)
        let pairs = bps(&[(1, 15), (2, 14), (5, 10)]);
        let helices = assemble_helices(&pairs, &StructureConfig::default());
        assert_eq!(helices.len(), 1);
        assert_eq!(helices[0].ends(), [1, 2, 14, 15]);

        let cfg = StructureConfig::default().with_isolated_pairs(true);
        let helices = assemble_helices(&pairs, &cfg);
        assert_eq!(helices.len(), 2);
        assert_eq!(helices[1].ends(), [5, 5, 10, 10]);
        assert_eq!(helices[1].length(), 1);
    }

    #[test]
    fn test_duplicates_and_order_do_not_matter() {
        let a = bps(&[(1, 9), (2, 8), (3, 7), (12, 20), (13, 19)]);
        let b = bps(&[(13, 19), (3, 7), (1, 9), (12, 20), (2, 8), (1, 9)]);
        let cfg = StructureConfig::default();
        assert_eq!(assemble_helices(&a, &cfg), assemble_helices(&b, &cfg));
    }

    #[test]
    fn test_side_by_side_stems() {
        // ((..))((..))
        let pairs = bps(&[(1, 6), (2, 5), (7, 12), (8, 11)]);
        let helices = assemble_helices(&pairs, &StructureConfig::default());
        assert_eq!(helices.len(), 2);
        assert_eq!(helices[0].ends(), [1, 2, 5, 6]);
        assert_eq!(helices[1].ends(), [7, 8, 11, 12]);
    }

    #[test]
    fn test_no_pairs() {
        assert!(assemble_helices(&[], &StructureConfig::default()).is_empty());
    }
}
