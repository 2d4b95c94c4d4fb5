//! Blocks and the immutable traversal sequence.

use std::sync::Arc;

use vf_core::geo::{area, centroid};
use vf_core::{BlockId, Bounds, Point};

use crate::{VenueError, VenueResult};

// ── Block ─────────────────────────────────────────────────────────────────────

/// A named polygonal zone that teams occupy in sequence.
///
/// Centroid and area are derived once at construction.  Fields are read-only
/// after that; build a new sequence to change anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    name:          String,
    duration_secs: Option<f64>,
    centroid:      Point,
    area:          f64,
    polygon:       Vec<Point>,
}

impl Block {
    /// Build a block from its outline.
    ///
    /// `duration_secs = None` means no duration record exists for this block:
    /// teams entering it never leave by elapsed time.
    ///
    /// # Errors
    ///
    /// - [`VenueError::Geometry`] if `polygon` has no vertices.
    /// - [`VenueError::InvalidDuration`] if the duration is negative or not
    ///   finite.  [`merge_records`][crate::merge_records] never hits this:
    ///   it drops such records first and keeps the block without a duration.
    pub fn new(
        name:          impl Into<String>,
        polygon:       Vec<Point>,
        duration_secs: Option<f64>,
    ) -> VenueResult<Self> {
        let name = name.into();
        let centroid = centroid(&polygon).map_err(|source| VenueError::Geometry {
            name: name.clone(),
            source,
        })?;
        if let Some(d) = duration_secs {
            if !d.is_finite() || d < 0.0 {
                return Err(VenueError::InvalidDuration { name, duration: d });
            }
        }
        Ok(Self {
            area: area(&polygon),
            name,
            duration_secs,
            centroid,
            polygon,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dwell time in simulated seconds, if a duration record was supplied.
    #[inline]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Where teams stand while dwelling in this block.
    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Shoelace area in plan square units.  `0.0` for degenerate outlines.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// `true` once `dwell_secs` reaches the block's duration.  Always `false`
    /// for a block without a duration.
    #[inline]
    pub fn dwell_complete(&self, dwell_secs: f64) -> bool {
        self.duration_secs.is_some_and(|d| dwell_secs >= d)
    }
}

// ── BlockSequence ─────────────────────────────────────────────────────────────

/// Ordered, immutable list of blocks.
///
/// Backed by an `Arc<[Block]>`, so cloning is a reference-count bump and a
/// sequence can be handed to the stepper and a renderer at the same time.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSequence {
    blocks: Arc<[Block]>,
}

impl BlockSequence {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks: blocks.into() }
    }

    /// A sequence with no blocks.  Nothing spawns into it.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.index())
    }

    /// Block 0, where every team spawns.
    #[inline]
    pub fn entry(&self) -> Option<&Block> {
        self.get(BlockId::ENTRY)
    }

    /// The block after `id`, or `None` if `id` is the last block.
    pub fn next_after(&self, id: BlockId) -> Option<(BlockId, &Block)> {
        let next = id.next();
        self.get(next).map(|b| (next, b))
    }

    /// Iterate `(BlockId, &Block)` in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, b)| (BlockId(i as u32), b))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    /// Bounding box over every vertex of every block, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(
            self.blocks
                .iter()
                .flat_map(|b| b.polygon.iter().copied()),
        )
    }
}

impl Default for BlockSequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Block>> for BlockSequence {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}
