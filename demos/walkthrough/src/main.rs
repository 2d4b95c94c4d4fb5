//! walkthrough — one hour of teams walking a five-room venue.
//!
//! Decodes an embedded floor plan and dwell table, runs the stepper at a
//! fixed one-second step, and prints a progress line every ten simulated
//! minutes plus a final per-room occupancy table.
//!
//! Set `RUST_LOG=vf_sim=debug` to see every spawn, departure and finish.

mod plan;

use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vf_core::{FlowConfig, TeamSizeMode};
use vf_sim::{SimBuilder, SimObserver, TickSnapshot};
use vf_team::Team;

use plan::load_plan;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const STEP_SECS:         f64 = 1.0;
const RUN_SECS:          u64 = 3_600; // one simulated hour at STEP_SECS
const REPORT_EVERY_SECS: f64 = 600.0;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ProgressObserver {
    spawned:        usize,
    finished:       usize,
    peak_players:   u32,
    total_in_field: f64,
    next_report:    f64,
}

impl SimObserver for ProgressObserver {
    fn on_spawn(&mut self, _team: &Team) {
        self.spawned += 1;
    }

    fn on_finish(&mut self, team: &Team, now: f64) {
        self.finished += 1;
        self.total_in_field += team.time_in_field(now);
    }

    fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
        let players = snapshot.player_count();
        self.peak_players = self.peak_players.max(players);
        if snapshot.simulated_time_secs >= self.next_report {
            println!(
                "  t={:>6.0}s  teams={:>3}  players={:>3}  spawned={:>3}  finished={:>3}",
                snapshot.simulated_time_secs,
                snapshot.teams.len(),
                players,
                self.spawned,
                self.finished,
            );
            self.next_report += REPORT_EVERY_SECS;
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .init();

    println!("=== walkthrough — venueflow crowd-flow engine ===");

    // 1. Floor plan.
    let loaded = load_plan()?;
    for e in &loaded.excluded {
        warn!(error = %e, "room skipped");
    }
    for e in &loaded.rejected {
        warn!(error = %e, "dwell time ignored");
    }
    println!(
        "Floor plan: {} rooms ({} excluded, {} without a dwell time)",
        loaded.sequence.len(),
        loaded.excluded.len(),
        loaded.unmatched.len(),
    );

    // 2. Config: centimetre plan, real-time clock, random team sizes.
    let config = FlowConfig {
        team_size:           TeamSizeMode::Random,
        spawn_interval_secs: 45.0,
        time_scale:          1.0,
        player_speed:        0.5,
        min_area_per_person: 3.0,
        units_per_meter:     100.0,
    };
    println!(
        "Spawn every {:.0}s  |  speed {} m/s  |  crowded below {} m²/person  |  seed {SEED}",
        config.spawn_interval_secs, config.player_speed, config.min_area_per_person,
    );
    println!();

    // 3. Build and run.
    let mut sim = SimBuilder::new(loaded.sequence)
        .config(config)
        .seed(SEED)
        .build()?;
    let mut obs = ProgressObserver::default();

    let t0 = Instant::now();
    sim.start();
    sim.advance_with(0.0, &mut obs);
    sim.run_ticks(RUN_SECS, STEP_SECS, &mut obs);
    let elapsed = t0.elapsed();
    info!(ticks = sim.clock().tick, wall_ms = elapsed.as_millis() as u64, "run complete");

    // 4. Summary.
    let stats = sim.stats();
    println!();
    println!("Simulated {} in {:.3} s", stats.clock(), elapsed.as_secs_f64());
    println!(
        "  teams in venue: {}  players: {}  peak players: {}",
        stats.team_count, stats.player_count, obs.peak_players,
    );
    println!(
        "  venue footprint: {:.1} m²  ({} m² per player)",
        stats.total_area_m2, stats.area_per_player_m2,
    );
    if obs.finished > 0 {
        println!(
            "  finished teams: {}  mean time in venue: {:.0} s",
            obs.finished,
            obs.total_in_field / obs.finished as f64,
        );
    }
    println!();

    // 5. Per-room occupancy.
    println!("{:<6} {:>8} {:>10} {:>12} {:>8}", "Room", "Area m²", "Occupants", "m²/person", "Crowded");
    println!("{}", "-".repeat(48));
    for (occ, block) in sim.occupancy().iter().zip(sim.blocks().as_slice()) {
        let per_person = if occ.area_per_occupant.is_finite() {
            format!("{:.1}", sim.config().area_to_square_meters(occ.area_per_occupant))
        } else {
            "-".to_string()
        };
        println!(
            "{:<6} {:>8.1} {:>10} {:>12} {:>8}",
            block.name(),
            sim.config().area_to_square_meters(occ.area),
            occ.occupants,
            per_person,
            if occ.is_crowded { "yes" } else { "no" },
        );
    }

    Ok(())
}
