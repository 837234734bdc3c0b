mod error;
mod config;
mod location;
mod base_pair;
mod sequence;
mod helix;
mod junction;
mod assembly;
mod pseudoknot;
mod dotbracket;
mod secondary_structure;

pub use error::*;
pub use config::*;
pub use location::*;
pub use base_pair::*;
pub use sequence::*;
pub use helix::*;
pub use junction::*;
pub use assembly::*;
pub use pseudoknot::*;
pub use dotbracket::*;
pub use secondary_structure::*;


/// Nucleic Acid INdeX: a **1-based** sequence position. `u32` is plenty for
/// any RNA we care about, and position zero is reserved as "no position" by
/// the tabular formats that feed this crate.
pub type NAIDX = u32;

/// Pair key. Must be >= 2×`NAIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u64;

/// Compile-time sanity check: 2×NAIDX bits must fit into P1KEY.
const _: () = {
    debug_assert!(2 * NAIDX::BITS <= P1KEY::BITS);
};
