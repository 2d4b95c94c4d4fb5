//! `FrameDriver` — turns host frame callbacks into [`Sim::advance`] calls.
//!
//! The stepper itself is timer-free.  A host with a per-frame callback (a
//! render loop, a UI timer) owns one `FrameDriver` per simulation and calls
//! [`frame`](FrameDriver::frame) once per frame; the driver measures the
//! real time since the previous frame and feeds it to the stepper.
//!
//! The first frame after the simulation starts covers zero real time, so
//! the immediate first spawn lands at exactly t = 0.

use std::time::Instant;

use crate::{Sim, SimObserver, TickSnapshot};

#[derive(Debug, Default, Clone)]
pub struct FrameDriver {
    last_frame: Option<Instant>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame; the next one covers zero real time.
    pub fn restart(&mut self) {
        self.last_frame = None;
    }

    /// Advance `sim` by the real time elapsed since the previous frame.
    pub fn frame<'s, O: SimObserver>(&mut self, sim: &'s mut Sim, observer: &mut O) -> &'s TickSnapshot {
        self.frame_at(sim, Instant::now(), observer)
    }

    /// Like [`frame`](Self::frame) with an explicit frame timestamp.
    ///
    /// While `sim` is stopped the driver forgets its last frame, so time
    /// spent stopped never reaches the stepper.
    pub fn frame_at<'s, O: SimObserver>(
        &mut self,
        sim:      &'s mut Sim,
        now:      Instant,
        observer: &mut O,
    ) -> &'s TickSnapshot {
        if !sim.is_running() {
            self.last_frame = None;
            return sim.snapshot();
        }
        let real_dt = self
            .last_frame
            .map_or(0.0, |prev| now.saturating_duration_since(prev).as_secs_f64());
        self.last_frame = Some(now);
        sim.advance_with(real_dt, observer)
    }
}
