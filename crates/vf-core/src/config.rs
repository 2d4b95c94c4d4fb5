//! Simulation configuration.
//!
//! Typically filled from a UI form or a TOML/JSON file by the host
//! application and handed to the stepper.  The stepper validates every
//! config it receives and keeps the previous one when validation fails.

use crate::{VfError, VfResult};

/// Largest team the engine models.
pub const MAX_TEAM_SIZE: u8 = 4;

/// How many people a newly spawned team contains.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TeamSizeMode {
    /// Uniform draw from `1..=MAX_TEAM_SIZE` per spawn.
    #[default]
    Random,
    /// Every team has exactly this many people (`1..=MAX_TEAM_SIZE`).
    Fixed(u8),
}

/// Throughput and crowding assumptions for one simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowConfig {
    /// Team size, fixed or random.
    pub team_size: TeamSizeMode,

    /// Simulated seconds between consecutive spawns.
    pub spawn_interval_secs: f64,

    /// Simulated seconds per real second.
    pub time_scale: f64,

    /// Walking speed in metres per simulated second.
    pub player_speed: f64,

    /// Crowding threshold in square metres per person.
    pub min_area_per_person: f64,

    /// Floor-plan units per metre.  Scales `player_speed` into plan units,
    /// and (squared) `min_area_per_person` into plan square units.
    /// Default: 100 (plans drawn in centimetres).
    pub units_per_meter: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            team_size:           TeamSizeMode::Random,
            spawn_interval_secs: 120.0,
            time_scale:          60.0,
            player_speed:        0.5,
            min_area_per_person: 3.0,
            units_per_meter:     100.0,
        }
    }
}

impl FlowConfig {
    /// Check every field; the first violation is reported.
    pub fn validate(&self) -> VfResult<()> {
        if let TeamSizeMode::Fixed(n) = self.team_size {
            if n == 0 || n > MAX_TEAM_SIZE {
                return Err(VfError::InvalidConfig(format!(
                    "team_size must be 1..={MAX_TEAM_SIZE}, got {n}"
                )));
            }
        }
        positive("spawn_interval_secs", self.spawn_interval_secs)?;
        positive("time_scale", self.time_scale)?;
        positive("player_speed", self.player_speed)?;
        positive("min_area_per_person", self.min_area_per_person)?;
        positive("units_per_meter", self.units_per_meter)?;
        Ok(())
    }

    /// Walking speed in plan units per simulated second.
    #[inline]
    pub fn speed_units_per_sec(&self) -> f64 {
        self.player_speed * self.units_per_meter
    }

    /// Crowding threshold in plan square units per person.
    #[inline]
    pub fn min_area_units(&self) -> f64 {
        self.min_area_per_person * self.units_per_meter * self.units_per_meter
    }

    /// Convert an area in plan square units to square metres.
    #[inline]
    pub fn area_to_square_meters(&self, area_units: f64) -> f64 {
        area_units / (self.units_per_meter * self.units_per_meter)
    }
}

fn positive(field: &str, value: f64) -> VfResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VfError::InvalidConfig(format!(
            "{field} must be finite and > 0, got {value}"
        )))
    }
}
