/// The textual layouts of a relation matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatrixFormat {
    /// The number of entities `n`, followed by the `n * n` cell values in row-major order. Values
    /// are separated by any whitespace, so line breaks between rows are optional.
    #[default]
    Sized,
    /// A bracketed list of rows, each a bracketed list of comma separated values. Round and square
    /// brackets may be used interchangeably but must match, and trailing commas are allowed.
    Literal,
}

impl MatrixFormat {
    /// Guesses the format of `source` from its first non-whitespace character.
    pub fn detect(source: &str) -> MatrixFormat {
        match source.trim_start().bytes().next() {
            Some(b'[' | b'(') => MatrixFormat::Literal,
            _ => MatrixFormat::Sized,
        }
    }
}
