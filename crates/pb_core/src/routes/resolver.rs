//! Relative → absolute path resolution

use crate::geometry::Point;

/// Walk `segments` from `anchor`, emitting the cursor after every step.
///
/// The anchor itself is not part of the output; renderers prepend the
/// player's position when drawing. No segments means no movement, which is
/// an empty path (not "no route").
pub fn resolve_absolute_path(anchor: Point, segments: &[Point]) -> Vec<Point> {
    let mut cursor = anchor;
    segments
        .iter()
        .map(|segment| {
            cursor = cursor.offset(*segment);
            cursor
        })
        .collect()
}
