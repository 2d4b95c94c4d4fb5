//! Planar coordinates and polygon utilities.
//!
//! Floor-plan coordinates are `f64` in whatever unit the plan was drawn in
//! (centimetres for the venues this engine was built for; see
//! [`FlowConfig::units_per_meter`][crate::FlowConfig::units_per_meter]).
//! Polygons are plain ordered vertex slices; the last vertex implicitly
//! connects back to the first.

use crate::{VfError, VfResult};

/// A point on the floor plan.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in plan units.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move from `self` toward `target` by at most `step` units.
    ///
    /// Returns `target` exactly when `step` covers the remaining distance, so
    /// repeated calls never overshoot.
    pub fn step_toward(self, target: Point, step: f64) -> Point {
        let distance = self.distance(target);
        if step >= distance {
            return target;
        }
        let ratio = step / distance;
        Point {
            x: self.x + (target.x - self.x) * ratio,
            y: self.y + (target.y - self.y) * ratio,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn enclosing<I: IntoIterator<Item = Point>>(points: I) -> Option<Bounds> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds { min: p, max: p },
                Some(b) => Bounds {
                    min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                },
            })
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

// ── Polygon functions ─────────────────────────────────────────────────────────

/// Arithmetic mean of the polygon's vertices.
///
/// # Errors
///
/// [`VfError::InvalidGeometry`] if `polygon` is empty.
pub fn centroid(polygon: &[Point]) -> VfResult<Point> {
    if polygon.is_empty() {
        return Err(VfError::InvalidGeometry(
            "cannot take the centroid of a polygon with no vertices".into(),
        ));
    }
    let n = polygon.len() as f64;
    let (sx, sy) = polygon
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Ok(Point::new(sx / n, sy / n))
}

/// Unsigned polygon area via the shoelace formula.
///
/// Winding order does not matter.  Degenerate input (fewer than three
/// vertices, or all vertices collinear) yields `0.0`.
pub fn area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}
