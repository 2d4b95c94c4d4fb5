//! Synthetic floor plan: five 6 m × 5 m rooms in a row, 2 m corridors
//! between them, drawn in centimetres.

use anyhow::Result;

use vf_venue::{DurationRecord, LoadOutcome, PlayAreaRecord, merge_records};

// ── Floor plan export ─────────────────────────────────────────────────────────

// "1-X" is a stray polygon with no vertices; the loader drops it.
const PLAY_AREA_JSON: &str = r#"[
  { "Name": "1-1", "Index": 0, "DeltaYaw": 0,
    "Points": [ { "Point": { "X": 0,    "Y": 0 } }, { "Point": { "X": 600,  "Y": 0 } },
                { "Point": { "X": 600,  "Y": 500 } }, { "Point": { "X": 0,    "Y": 500 } } ],
    "Entrance": { "Point": { "X": 0, "Y": 250 } },
    "Exit":     { "Point": { "X": 600, "Y": 250 } } },
  { "Name": "1-2", "Index": 1,
    "Points": [ { "Point": { "X": 800,  "Y": 0 } }, { "Point": { "X": 1400, "Y": 0 } },
                { "Point": { "X": 1400, "Y": 500 } }, { "Point": { "X": 800,  "Y": 500 } } ] },
  { "Name": "1-X", "Index": 2, "Points": [] },
  { "Name": "1-3", "Index": 3,
    "Points": [ { "Point": { "X": 1600, "Y": 0 } }, { "Point": { "X": 2200, "Y": 0 } },
                { "Point": { "X": 2200, "Y": 500 } }, { "Point": { "X": 1600, "Y": 500 } } ] },
  { "Name": "1-4", "Index": 4,
    "Points": [ { "Point": { "X": 2400, "Y": 0 } }, { "Point": { "X": 3000, "Y": 0 } },
                { "Point": { "X": 3000, "Y": 500 } }, { "Point": { "X": 2400, "Y": 500 } } ] },
  { "Name": "1-5", "Index": 5,
    "Points": [ { "Point": { "X": 3200, "Y": 0 } }, { "Point": { "X": 3800, "Y": 0 } },
                { "Point": { "X": 3800, "Y": 500 } }, { "Point": { "X": 3200, "Y": 500 } } ] }
]"#;

// Dwell time per room in seconds.  "9-9" names no room and is ignored.
const BLOCK_DATA_JSON: &str = r#"[
  { "BlockName": "1-1", "BlockDuration": 120 },
  { "BlockName": "1-2", "BlockDuration": 240 },
  { "BlockName": "1-3", "BlockDuration": 180 },
  { "BlockName": "1-4", "BlockDuration": 300 },
  { "BlockName": "1-5", "BlockDuration": 90 },
  { "BlockName": "9-9", "BlockDuration": 60 }
]"#;

/// Decode both exports and merge them into a traversal sequence.
pub fn load_plan() -> Result<LoadOutcome> {
    let areas: Vec<PlayAreaRecord>     = serde_json::from_str(PLAY_AREA_JSON)?;
    let durations: Vec<DurationRecord> = serde_json::from_str(BLOCK_DATA_JSON)?;
    Ok(merge_records(&areas, &durations))
}
