use std::io;

use bilabel_core::MatrixError;

#[cfg(doc)]
use super::parse_matrix;

/// The errors that can be encountered by [`parse_matrix`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read from source: {0}")]
    IoError(#[from] io::Error),

    #[error("failed to parse line {line_nr} {span:?}: {reason}")]
    ParseError {
        line_nr: usize,
        reason: String,
        span: (usize, usize),
    },

    #[error("malformed matrix: {0}")]
    MalformedMatrix(#[from] MatrixError),
}
