//! Fixed timestep accumulator
//!
//! Turns variable frame times into a whole number of `SIM_DT` ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's elapsed seconds and return how many ticks to run now.
    ///
    /// Negative and NaN frames count as zero. Frames longer than
    /// `MAX_FRAME_DT` are shortened, and time left over after `MAX_SUBSTEPS`
    /// ticks is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // `max` maps NaN to 0
        self.accumulator += frame_dt.max(0.0).min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Unconsumed time, in seconds
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
