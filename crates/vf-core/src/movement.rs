//! Team movement state shared by the team state machine and occupancy.

/// Whether a team is dwelling inside its current block or walking to it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementState {
    /// Stationary inside the current block, accumulating dwell time.
    #[default]
    Waiting,
    /// Walking toward the current block's centroid.
    Moving,
}

impl MovementState {
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, MovementState::Moving)
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            MovementState::Waiting => "waiting",
            MovementState::Moving  => "moving",
        }
    }
}

impl std::fmt::Display for MovementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
