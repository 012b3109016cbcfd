use std::num::ParseIntError;
use std::sync::OnceLock;

use regex::Captures;
use regex::Regex;
use thiserror::Error;

use super::GridCell;

#[derive(Debug, Error)]
pub enum PointsError {
    #[error("no points found. A valid example: [[0,0],[4,2],[6,6]]")]
    NoPoints,
    #[error("coordinate does not fit in a 64-bit integer: {0}")]
    CoordinateTooLarge(#[from] ParseIntError),
}

/// Matches `[x, y]` or `(x, y)`.
fn point_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    PATTERN.get_or_init(|| {
        Regex::new(r"\[\s*(-?\d+)\s*,\s*(-?\d+)\s*\]|\(\s*(-?\d+)\s*,\s*(-?\d+)\s*\)")
            .expect("the point pattern is a valid regex")
    })
}

/// Parses waypoints written as `[[x, y], [x, y], ...]`, with or without the outer brackets, in
/// any layout of whitespace and new-lines. Pairs may also be written as tuples.
///
/// Every `[x, y]` pair in the text is taken in order of appearance; text around the pairs is
/// ignored. Input consisting only of whitespace gives no waypoints.
pub fn parse_points(text: &str) -> Result<Vec<GridCell>, PointsError> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }

    let points = point_pattern()
        .captures_iter(text)
        .map(|captures| parse_point(&captures))
        .collect::<Result<Vec<_>, _>>()?;

    if points.is_empty() {
        return Err(PointsError::NoPoints);
    }

    Ok(points)
}

fn parse_point(captures: &Captures<'_>) -> Result<GridCell, PointsError> {
    let coordinate = |square: usize, round: usize| {
        captures
            .get(square)
            .or_else(|| captures.get(round))
            .map_or("", |capture| capture.as_str())
            .parse::<i64>()
    };

    Ok(GridCell::new(coordinate(1, 3)?, coordinate(2, 4)?))
}
