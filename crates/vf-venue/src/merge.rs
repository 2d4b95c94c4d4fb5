//! Pair floor-plan polygons with their dwell durations.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{Block, BlockSequence, DurationRecord, PlayAreaRecord, VenueError};

/// Result of [`merge_records`].
///
/// Loading never fails as a whole: bad polygons are dropped and reported,
/// blocks without a usable duration are kept and reported.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// The traversable sequence, in floor-plan order.
    pub sequence:  BlockSequence,
    /// Polygons that could not become blocks, with the reason.
    pub excluded:  Vec<VenueError>,
    /// Names of blocks that had no usable duration record.
    pub unmatched: Vec<String>,
    /// Duration records ignored because their value is negative or not
    /// finite.
    pub rejected:  Vec<VenueError>,
}

impl LoadOutcome {
    /// `true` when every polygon loaded and every block has a duration.
    pub fn is_clean(&self) -> bool {
        self.excluded.is_empty() && self.unmatched.is_empty() && self.rejected.is_empty()
    }
}

/// Build a [`BlockSequence`] from decoded floor-plan and duration records.
///
/// Blocks keep the order of `areas`.  Durations are matched by exact name;
/// when several usable records share a name the first one wins.  A record
/// with a negative or non-finite duration is set aside in
/// [`LoadOutcome::rejected`], so its block loads as if it had no record.
/// Duration records naming no polygon are ignored.
pub fn merge_records(areas: &[PlayAreaRecord], durations: &[DurationRecord]) -> LoadOutcome {
    let mut by_name: FxHashMap<&str, f64> = FxHashMap::default();
    let mut rejected = Vec::new();
    for d in durations {
        if !d.block_duration.is_finite() || d.block_duration < 0.0 {
            warn!(block = %d.block_name, duration = d.block_duration, "ignoring unusable duration record");
            rejected.push(VenueError::InvalidDuration {
                name:     d.block_name.clone(),
                duration: d.block_duration,
            });
            continue;
        }
        by_name.entry(d.block_name.as_str()).or_insert(d.block_duration);
    }

    let mut blocks    = Vec::with_capacity(areas.len());
    let mut excluded  = Vec::new();
    let mut unmatched = Vec::new();

    for area in areas {
        let duration = by_name.get(area.name.as_str()).copied();
        match Block::new(area.name.clone(), area.outline(), duration) {
            Ok(block) => {
                if duration.is_none() {
                    warn!(block = %area.name, "no duration record; teams will dwell here indefinitely");
                    unmatched.push(area.name.clone());
                }
                blocks.push(block);
            }
            Err(e) => {
                warn!(block = %area.name, error = %e, "excluding block from sequence");
                excluded.push(e);
            }
        }
    }

    debug!(
        blocks    = blocks.len(),
        excluded  = excluded.len(),
        unmatched = unmatched.len(),
        rejected  = rejected.len(),
        "merged floor plan with duration table"
    );

    LoadOutcome {
        sequence: BlockSequence::new(blocks),
        excluded,
        unmatched,
        rejected,
    }
}
