//! Write relation matrices in either [`MatrixFormat`].
use std::io;
use std::io::Write;

use bilabel_core::RelationMatrix;

use crate::MatrixFormat;

/// Writes `matrix` to `writer` in the given format, followed by a new-line.
pub fn write_matrix(
    mut writer: impl Write,
    matrix: &RelationMatrix,
    format: MatrixFormat,
) -> io::Result<()> {
    match format {
        MatrixFormat::Sized => {
            writeln!(writer, "{}", matrix.size())?;
            write!(writer, "{matrix}")?;
        }

        MatrixFormat::Literal => {
            write!(writer, "[")?;
            for from in matrix.entities() {
                if from.id > 0 {
                    write!(writer, ", ")?;
                }

                write!(writer, "[")?;
                for (column, relation) in matrix.row(from).iter().enumerate() {
                    if column > 0 {
                        write!(writer, ", ")?;
                    }
                    write!(writer, "{}", relation.value())?;
                }
                write!(writer, "]")?;
            }
            writeln!(writer, "]")?;
        }
    }

    Ok(())
}
