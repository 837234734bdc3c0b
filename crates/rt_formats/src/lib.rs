//! The rt_formats crate.
//!
//! Readers for the text formats that carry RNA sequences and structures:
//!  - FASTA (sequences only)
//!  - Vienna / dot-bracket (sequence + bracket string)
//!  - CT, connectivity tables (sequence + base pairs)
//!  - BPSEQ (sequence + base pairs)
//!
//! Readers only tokenize. All structural reasoning is left to `rt_structure`.
//!

mod error;
mod fasta;
mod vienna;
mod tabular;
mod format;

pub use error::*;
pub use fasta::*;
pub use vienna::*;
pub use tabular::*;
pub use format::*;
