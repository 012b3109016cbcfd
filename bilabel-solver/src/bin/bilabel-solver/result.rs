use std::fmt::Display;

use bilabel_solver::core::MatrixError;
use relation_format::reader;
use thiserror::Error;

pub(crate) type BilabelResult<T> = Result<T, BilabelError>;

#[derive(Error, Debug)]
pub(crate) enum BilabelError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("could not read the matrix file {path}: {reason}")]
    UnreadableFile { path: String, reason: std::io::Error },
    #[error("{0}")]
    InvalidMatrix(#[from] reader::Error),
    #[error("the built-in sample matrix is malformed: {0}")]
    InvalidSample(#[from] MatrixError),
}

impl BilabelError {
    pub(crate) fn unreadable_file(path: impl Display, reason: std::io::Error) -> Self {
        Self::UnreadableFile {
            path: format!("{path}"),
            reason,
        }
    }
}
