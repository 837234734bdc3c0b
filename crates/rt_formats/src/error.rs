use thiserror::Error;
use rt_structure::StructureError;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("no sequence found in input")]
    NoSequence,

    #[error("cannot guess the format of '{0}'")]
    UnknownFormat(String),
}
