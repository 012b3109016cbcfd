use std::iter::Copied;
use std::iter::Peekable;
use std::slice::Iter;

use bilabel_core::Relation;
use bilabel_core::RelationMatrix;

use crate::reader::Error;

/// Parses the complete text of a relation matrix.
///
/// See [`MatrixParser::parse_sized`] and [`MatrixParser::parse_literal`] for the grammars.
pub(super) struct MatrixParser<'src> {
    bytes: Peekable<Copied<Iter<'src, u8>>>,
    /// The line of the next byte, starting at 1.
    line_nr: usize,
    /// The column of the next byte within its line, starting at 0.
    column: usize,
}

impl<'src> MatrixParser<'src> {
    pub(super) fn new(source: &'src [u8]) -> Self {
        MatrixParser {
            bytes: source.iter().copied().peekable(),
            line_nr: 1,
            column: 0,
        }
    }

    /// Parses input in the following shape, where tokens are separated by any whitespace:
    /// ```ignored
    /// <unsigned integer n> (<signed integer>){n * n}
    /// ```
    pub(super) fn parse_sized(mut self) -> Result<RelationMatrix, Error> {
        self.skip_whitespace();

        let size = self.consume_unsigned_integer()?;
        if size.checked_mul(size).is_none() {
            return Err(self.error("the matrix size is too large"));
        }

        let mut cells = vec![];

        loop {
            self.consume_separator_or_end()?;
            if self.peek().is_none() {
                break;
            }

            let value = self.consume_signed_integer()?;
            cells.push(Relation::try_from(value)?);
        }

        Ok(RelationMatrix::from_row_major(size, cells)?)
    }

    /// Parses input in the following shape:
    /// ```ignored
    /// matrix := list(list(<signed integer>))
    /// list(item) := open (item ("," item)* ","?)? close
    /// open := "[" | "("
    /// close := "]" | ")"
    /// ```
    /// where an opening bracket must be closed by the matching bracket and whitespace may appear
    /// between any two tokens.
    pub(super) fn parse_literal(mut self) -> Result<RelationMatrix, Error> {
        self.skip_whitespace();

        let rows = self.parse_list(|parser| parser.parse_list(Self::consume_signed_integer))?;

        self.skip_whitespace();
        if self.peek().is_some() {
            return Err(self.error("unexpected input after the matrix"));
        }

        Ok(RelationMatrix::from_values(rows)?)
    }

    fn parse_list<Item>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> Result<Item, Error>,
    ) -> Result<Vec<Item>, Error> {
        let close = match self.peek() {
            Some(b'[') => b']',
            Some(b'(') => b')',
            _ => return Err(self.error("expected '[' or '('")),
        };
        let _ = self.next();

        let mut items = vec![];

        loop {
            self.skip_whitespace();

            match self.peek() {
                Some(byte) if byte == close => {
                    let _ = self.next();
                    return Ok(items);
                }
                Some(b']' | b')') => {
                    return Err(self.error(format!("expected '{}'", close as char)));
                }
                None => {
                    return Err(self.error(format!(
                        "unexpected input: expected '{}' - got EOF",
                        close as char
                    )));
                }
                Some(_) => {}
            }

            items.push(parse_item(self)?);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    let _ = self.next();
                }
                Some(byte) if byte == close => {}
                _ => return Err(self.error(format!("expected ',' or '{}'", close as char))),
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
            let _ = self.next();
        }
    }

    /// Consume whitespace up to the next token, which must be separated from the previous one.
    fn consume_separator_or_end(&mut self) -> Result<(), Error> {
        match self.peek() {
            None => Ok(()),
            Some(byte) if byte.is_ascii_whitespace() => {
                self.skip_whitespace();
                Ok(())
            }
            Some(byte) => Err(self.error(if byte.is_ascii() {
                format!("expected whitespace. got '{}'", byte as char)
            } else {
                "expected whitespace".to_owned()
            })),
        }
    }

    /// Consume the next byte in the input.
    fn next(&mut self) -> Option<u8> {
        let byte = self.bytes.next()?;

        if byte == b'\n' {
            self.line_nr += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(byte)
    }

    /// Look one byte ahead.
    fn peek(&mut self) -> Option<u8> {
        self.bytes.peek().copied()
    }

    fn consume_unsigned_integer(&mut self) -> Result<usize, Error> {
        let mut number = self.consume_digit()?;

        while self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
            let digit = self.consume_digit()?;
            number = number
                .checked_mul(10)
                .and_then(|shifted| shifted.checked_add(digit))
                .ok_or_else(|| self.error("integer too large"))?;
        }

        Ok(number)
    }

    fn consume_signed_integer(&mut self) -> Result<i64, Error> {
        // Remove an optional leading '-'.
        let is_positive = if let Some(b'-') = self.peek() {
            let _ = self.next();
            false
        } else {
            true
        };

        let magnitude = self.consume_unsigned_integer()?;
        let number = i64::try_from(magnitude).map_err(|_| self.error("integer too large"))?;

        if is_positive {
            Ok(number)
        } else {
            Ok(-number)
        }
    }

    fn consume_digit(&mut self) -> Result<usize, Error> {
        match self.peek() {
            Some(byte) if byte.is_ascii_digit() => {
                let _ = self.next();
                Ok(usize::from(byte - b'0'))
            }
            Some(byte) if byte.is_ascii() => Err(self.error(format!(
                "unexpected input: expected digit. got '{}'",
                byte as char
            ))),
            Some(_) => Err(self.error("unexpected input: expected digit")),
            None => Err(self.error("unexpected input: expected digit - got EOF")),
        }
    }

    /// An error spanning the next byte.
    fn error(&self, reason: impl Into<String>) -> Error {
        Error::ParseError {
            line_nr: self.line_nr,
            reason: reason.into(),
            span: (self.column, self.column + 1),
        }
    }
}
