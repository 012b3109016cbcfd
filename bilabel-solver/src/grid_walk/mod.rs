//! Counting the grid cells visited when walking in straight segments between waypoints.
//!
//! Every segment is rasterised with Bresenham's line algorithm, see [`line_cells`].
mod line;
mod points;

pub use line::*;
pub use points::*;

use crate::core::containers::HashSet;

/// A cell of an unbounded square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    pub const fn new(x: i64, y: i64) -> Self {
        GridCell { x, y }
    }
}

/// The distinct cells visited when walking from each waypoint to the next, in order of first
/// visit.
///
/// The first cell of every segment after the first is the last cell of the segment before it,
/// and is not visited again.
pub fn visited_cells(waypoints: &[GridCell]) -> Vec<GridCell> {
    let mut seen: HashSet<GridCell> = HashSet::default();
    let mut visited = vec![];

    for (segment, pair) in waypoints.windows(2).enumerate() {
        let skip = usize::from(segment > 0);

        for cell in line_cells(pair[0], pair[1]).skip(skip) {
            if seen.insert(cell) {
                visited.push(cell);
            }
        }
    }

    visited
}

/// The number of distinct cells visited when walking from each waypoint to the next.
///
/// With fewer than two waypoints nothing is walked, and the number of waypoints is returned.
pub fn count_unique_cells(waypoints: &[GridCell]) -> usize {
    if waypoints.len() < 2 {
        return waypoints.len();
    }

    visited_cells(waypoints).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coordinates: &[(i64, i64)]) -> Vec<GridCell> {
        coordinates
            .iter()
            .map(|&(x, y)| GridCell::new(x, y))
            .collect()
    }

    #[test]
    fn segments_share_their_joint_cell() {
        let waypoints = cells(&[(0, 0), (4, 2), (6, 6)]);

        assert_eq!(
            cells(&[
                (0, 0),
                (1, 0),
                (2, 1),
                (3, 1),
                (4, 2),
                (4, 3),
                (5, 4),
                (5, 5),
                (6, 6)
            ]),
            visited_cells(&waypoints)
        );
        assert_eq!(9, count_unique_cells(&waypoints));
    }

    #[test]
    fn walking_back_does_not_count_cells_twice() {
        let waypoints = cells(&[(0, 0), (3, 0), (0, 0)]);

        assert_eq!(4, count_unique_cells(&waypoints));
    }

    #[test]
    fn fewer_than_two_waypoints_count_themselves() {
        assert_eq!(0, count_unique_cells(&[]));
        assert_eq!(1, count_unique_cells(&cells(&[(5, 5)])));
    }

    #[test]
    fn repeated_waypoint_visits_one_cell() {
        assert_eq!(1, count_unique_cells(&cells(&[(2, 3), (2, 3)])));
    }
}
