//! Pseudoknot removal.
//!
//! Every pair of crossing helices is inspected independently and the
//! shorter helix of each pair is dropped. This is greedy: it does not look
//! for the largest non-crossing subset, and a helix crossing two others may
//! cost more helices than strictly necessary.
//!

use log::debug;

use crate::Helix;
use crate::TieBreak;


/// The canonical (non-crossing) helices and the ones given up for it.
#[derive(Debug, Clone, Default)]
pub struct PseudoknotResolution {
    pub kept: Vec<Helix>,
    pub removed: Vec<Helix>,
}

/// Index pairs `(a, b)`, `a < b`, of all crossing helices.
pub fn crossing_pairs(helices: &[Helix]) -> Vec<(usize, usize)> {
    let mut crossings = Vec::new();
    for a in 0..helices.len() {
        for b in a + 1..helices.len() {
            if helices[a].crosses(&helices[b]) {
                crossings.push((a, b));
            }
        }
    }
    crossings
}

/// Split `helices` into a non-crossing set and the removed pseudoknots.
/// Input order is preserved in both halves.
pub fn resolve_pseudoknots(helices: Vec<Helix>, tie_break: TieBreak) -> PseudoknotResolution {
    let mut marked = vec![false; helices.len()];

    for (a, b) in crossing_pairs(&helices) {
        let (ha, hb) = (&helices[a], &helices[b]);
        let victim = match ha.length().cmp(&hb.length()) {
            std::cmp::Ordering::Less => a,
            std::cmp::Ordering::Greater => b,
            std::cmp::Ordering::Equal => {
                let (early, late) = if ha.start() <= hb.start() { (a, b) } else { (b, a) };
                match tie_break {
                    TieBreak::RemoveLater => late,
                    TieBreak::RemoveEarlier => early,
                }
            }
        };
        debug!("{} crosses {}, removing {}.", ha.name(), hb.name(), helices[victim].name());
        marked[victim] = true;
    }

    let mut resolution = PseudoknotResolution::default();
    for (helix, gone) in helices.into_iter().zip(marked) {
        if gone {
            resolution.removed.push(helix);
        } else {
            resolution.kept.push(helix);
        }
    }
    resolution
}
