//! Decoded input records.
//!
//! These mirror the two files a venue planner exports: the floor plan
//! (`PlayArea`) and the per-block dwell table (`BlockData`).  With the
//! `serde` feature the field names match the exported PascalCase shape:
//!
//! ```json
//! { "Name": "1-1", "Index": 0,
//!   "Points": [ { "Point": { "X": 0, "Y": 0 } }, ... ],
//!   "Entrance": { "Point": { "X": 0, "Y": 50 } },
//!   "Exit":     { "Point": { "X": 400, "Y": 50 } },
//!   "DeltaYaw": 0 }
//!
//! { "BlockName": "1-1", "BlockDuration": 300 }
//! ```
//!
//! `Index`, `Entrance`, `Exit` and `DeltaYaw` are carried for the host; the
//! engine orders blocks by their position in the input list and walks
//! centroid to centroid.

use vf_core::Point;

/// A bare `{ X, Y }` coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PlanPoint {
    #[cfg_attr(feature = "serde", serde(rename = "X"))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: f64,
}

/// One polygon vertex, wrapped the way the floor-plan export nests it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct VertexRecord {
    #[cfg_attr(feature = "serde", serde(rename = "Point"))]
    pub point: PlanPoint,
}

impl From<VertexRecord> for Point {
    fn from(v: VertexRecord) -> Point {
        Point::new(v.point.x, v.point.y)
    }
}

impl From<Point> for VertexRecord {
    fn from(p: Point) -> VertexRecord {
        VertexRecord { point: PlanPoint { x: p.x, y: p.y } }
    }
}

/// A named floor-plan polygon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct PlayAreaRecord {
    pub name:      String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub index:     i64,
    pub points:    Vec<VertexRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entrance:  Option<VertexRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exit:      Option<VertexRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub delta_yaw: f64,
}

impl PlayAreaRecord {
    /// Convenience constructor for hosts that build plans in code.
    pub fn new(name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            name: name.into(),
            points: points.into_iter().map(VertexRecord::from).collect(),
            ..Default::default()
        }
    }

    /// The outline as engine points.
    pub fn outline(&self) -> Vec<Point> {
        self.points.iter().copied().map(Point::from).collect()
    }
}

/// Dwell time for the block with the same name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct DurationRecord {
    pub block_name:     String,
    /// Simulated seconds.
    pub block_duration: f64,
}

impl DurationRecord {
    pub fn new(block_name: impl Into<String>, block_duration: f64) -> Self {
        Self { block_name: block_name.into(), block_duration }
    }
}
