// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use nalgebra::Vector3;

// Ring depth. A four-tap boxcar at the 100 Hz orientation tick gives a
// ~6 dB cut at a quarter of the tick rate for near-zero cost, with no
// floating-point accumulation drift. Output lags the sensor by ~2 ticks.
const TAPS: usize = 4;

/// Equal-weight moving average over the four most recent samples. The ring
/// starts zeroed, so the average ramps up over the first four pushes.
#[derive(Debug, Clone)]
pub struct SlidingFilter {
    ring: [Vector3<f64>; TAPS],
    cursor: usize,
}

impl SlidingFilter {
    pub fn new() -> Self {
        SlidingFilter {
            ring: [Vector3::zeros(); TAPS],
            cursor: 0,
        }
    }

    /// Overwrites the oldest slot and advances the cursor mod 4.
    pub fn push(&mut self, sample: Vector3<f64>) {
        self.ring[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % TAPS;
    }

    /// Arithmetic mean of the four ring slots.
    pub fn average(&self) -> Vector3<f64> {
        let mut sum = Vector3::zeros();
        for slot in &self.ring {
            sum += *slot;
        }
        sum / TAPS as f64
    }
}

impl Default for SlidingFilter {
    fn default() -> Self {
        Self::new()
    }
}

// mod tests.
