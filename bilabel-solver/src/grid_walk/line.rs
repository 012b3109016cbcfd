use super::GridCell;

/// The cells on the straight line from `from` to `to`, both included, as chosen by Bresenham's
/// line algorithm.
///
/// The error terms are kept in `i128`, so any two `i64` cells can be joined.
pub fn line_cells(from: GridCell, to: GridCell) -> LineCells {
    let dx = (i128::from(to.x) - i128::from(from.x)).abs();
    let dy = (i128::from(to.y) - i128::from(from.y)).abs();

    LineCells {
        current: from,
        end: to,
        dx,
        dy,
        step_x: if from.x < to.x { 1 } else { -1 },
        step_y: if from.y < to.y { 1 } else { -1 },
        error: dx - dy,
        finished: false,
    }
}

/// Iterator returned by [`line_cells`].
#[derive(Clone, Copy, Debug)]
pub struct LineCells {
    current: GridCell,
    end: GridCell,
    dx: i128,
    dy: i128,
    step_x: i64,
    step_y: i64,
    error: i128,
    finished: bool,
}

impl Iterator for LineCells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.finished {
            return None;
        }

        let cell = self.current;
        if cell == self.end {
            self.finished = true;
            return Some(cell);
        }

        let doubled_error = 2 * self.error;
        if doubled_error > -self.dy {
            self.error -= self.dy;
            self.current.x += self.step_x;
        }
        if doubled_error < self.dx {
            self.error += self.dx;
            self.current.y += self.step_y;
        }

        Some(cell)
    }
}
