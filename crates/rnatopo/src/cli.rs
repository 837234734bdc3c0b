use std::path::PathBuf;
use clap::Parser;
use clap::ValueEnum;

use rt_formats::Format;
use rt_structure::TieBreak;

/// Reconstruct helices, pseudoknots and junctions of an RNA secondary structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file (.dbn/.vienna, .ct, .bpseq or .fa/.fasta).
    pub input: PathBuf,

    /// Input format, guessed from the extension if omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Print JSON instead of a text summary.
    #[arg(long)]
    pub json: bool,

    /// Turn isolated base pairs into length-1 helices.
    #[arg(long)]
    pub isolated_pairs: bool,

    /// Which of two equally long crossing helices to remove.
    #[arg(long, value_enum)]
    pub tie_break: Option<TieArg>,

    /// JSON file with reconstruction settings; flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Fasta,
    Vienna,
    Ct,
    Bpseq,
}

impl From<InputFormat> for Format {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Fasta => Format::Fasta,
            InputFormat::Vienna => Format::Vienna,
            InputFormat::Ct => Format::Ct,
            InputFormat::Bpseq => Format::Bpseq,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieArg {
    /// Remove the helix starting further downstream.
    Later,
    /// Remove the helix starting further upstream.
    Earlier,
}

impl From<TieArg> for TieBreak {
    fn from(t: TieArg) -> Self {
        match t {
            TieArg::Later => TieBreak::RemoveLater,
            TieArg::Earlier => TieBreak::RemoveEarlier,
        }
    }
}
