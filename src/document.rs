//! Building paths from key/value documents of 2D control points.
//!
//! A document maps string keys to `[x, y]` coordinates. Keys are consumed in
//! lexicographic order; every fourth point closes a segment and is reused as
//! the first point of the next one, so `N` segments take `3N + 1` points.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{DocumentError, Result};
use crate::geometry::{BezierPath, CubicBezier};
use crate::math::Point3;

/// Builds a path from `(key, coordinates)` pairs.
///
/// Each coordinate list must hold exactly two numbers; the point is placed
/// at `z = 0`. Trailing points that do not complete a segment are ignored.
///
/// # Errors
///
/// Returns an error if a coordinate list does not have two components, or
/// if consecutive segments fail to connect.
pub fn path_from_keyed_points<K, I>(entries: I) -> Result<BezierPath>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Vec<f64>)>,
{
    let sorted: BTreeMap<String, Vec<f64>> =
        entries.into_iter().map(|(k, v)| (k.into(), v)).collect();

    let mut path = BezierPath::new();
    let mut pending: Vec<Point3> = Vec::with_capacity(4);
    for (key, xy) in sorted {
        let &[x, y] = xy.as_slice() else {
            return Err(DocumentError::InvalidCoordinate { key, len: xy.len() }.into());
        };
        pending.push(Point3::new(x, y, 0.0));
        if pending.len() == 4 {
            let end = pending[3];
            path.push(CubicBezier::new(pending[0], pending[1], pending[2], end))?;
            pending.clear();
            pending.push(end);
        }
    }

    // The last point of a finished segment is always carried over.
    let leftover = if path.is_empty() { pending.len() } else { pending.len() - 1 };
    if leftover > 0 {
        warn!(leftover, "ignoring points that do not complete a segment");
    }
    debug!(segments = path.len(), "built path from document");
    Ok(path)
}

/// Parses a JSON object of `"key": [x, y]` entries into a path.
///
/// # Errors
///
/// Returns an error if the text is not such an object, or for any reason
/// listed on [`path_from_keyed_points`].
pub fn path_from_json(text: &str) -> Result<BezierPath> {
    let entries: BTreeMap<String, Vec<f64>> =
        serde_json::from_str(text).map_err(DocumentError::from)?;
    path_from_keyed_points(entries)
}
