//! Parse relation matrices from text.
mod error;
mod parser;

use std::io::Read;

use bilabel_core::RelationMatrix;
pub use error::*;
use parser::MatrixParser;

use crate::MatrixFormat;

/// Parses a matrix in either format, chosen with [`MatrixFormat::detect`].
///
/// Input consisting only of whitespace is the empty matrix.
pub fn parse_matrix(source: &str) -> Result<RelationMatrix, Error> {
    if source.trim().is_empty() {
        return Ok(RelationMatrix::empty());
    }

    parse_matrix_in(source, MatrixFormat::detect(source))
}

/// Parses a matrix in the given format.
pub fn parse_matrix_in(source: &str, format: MatrixFormat) -> Result<RelationMatrix, Error> {
    let parser = MatrixParser::new(source.as_bytes());

    match format {
        MatrixFormat::Sized => parser.parse_sized(),
        MatrixFormat::Literal => parser.parse_literal(),
    }
}

/// Reads `source` to the end and parses it with [`parse_matrix`].
pub fn read_matrix(mut source: impl Read) -> Result<RelationMatrix, Error> {
    let mut text = String::new();
    let _ = source.read_to_string(&mut text)?;

    parse_matrix(&text)
}
