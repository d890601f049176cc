// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use log::info;
use rand::Rng;

use altair_elements::sensor_trait::{RawSample, SensorError, ThreeAxisSensor};

/// Stand-in three-axis device for bench runs and tests. Serves a settable
/// device-frame sample, optionally dithered by uniform count noise, through
/// the same trait a hardware driver implements.
pub struct SimulatedSensor {
    model: String,
    raw: RawSample,
    offsets: RawSample,
    noise_counts: i16,
    fail_init: bool,
    initialized: bool,
}

impl SimulatedSensor {
    pub fn new(model: &str) -> Self {
        SimulatedSensor {
            model: model.to_string(),
            raw: RawSample::default(),
            offsets: RawSample::default(),
            noise_counts: 0,
            fail_init: false,
            initialized: false,
        }
    }

    pub fn set_raw(&mut self, raw: RawSample) {
        self.raw = raw;
    }

    pub fn set_offsets(&mut self, offsets: RawSample) {
        self.offsets = offsets;
    }

    /// Uniform dither of +/- `counts` applied to each axis per read.
    pub fn set_noise_counts(&mut self, counts: i16) {
        self.noise_counts = counts;
    }

    /// Makes the next `init()` report the device as missing.
    pub fn fail_init(&mut self) {
        self.fail_init = true;
    }
}

impl ThreeAxisSensor for SimulatedSensor {
    fn init(&mut self) -> Result<(), SensorError> {
        if self.fail_init {
            return Err(SensorError::Unavailable(
                format!("{} not fitted", self.model)));
        }
        self.initialized = true;
        info!("Simulated sensor online: {}", self.model);
        Ok(())
    }

    fn read_raw(&mut self) -> Result<RawSample, SensorError> {
        if !self.initialized {
            return Err(SensorError::Bus(
                format!("{} read before init", self.model)));
        }
        if self.noise_counts == 0 {
            return Ok(self.raw);
        }
        let mut rng = rand::thread_rng();
        let span = -self.noise_counts..=self.noise_counts;
        Ok(RawSample::new(
            self.raw.x.saturating_add(rng.gen_range(span.clone())),
            self.raw.y.saturating_add(rng.gen_range(span.clone())),
            self.raw.z.saturating_add(rng.gen_range(span))))
    }

    fn offsets(&self) -> RawSample {
        self.offsets
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_free_read_is_exact() {
        let mut sensor = SimulatedSensor::new("bench");
        sensor.set_raw(RawSample::new(11, -22, 33));
        sensor.init().unwrap();
        assert_eq!(sensor.read_raw().unwrap(), RawSample::new(11, -22, 33));
    }

    #[test]
    fn test_noise_is_bounded() {
        let mut sensor = SimulatedSensor::new("bench");
        sensor.set_raw(RawSample::new(1000, 1000, 1000));
        sensor.set_noise_counts(5);
        sensor.init().unwrap();
        for _ in 0..100 {
            let sample = sensor.read_raw().unwrap();
            assert!((sample.x - 1000).abs() <= 5);
            assert!((sample.y - 1000).abs() <= 5);
            assert!((sample.z - 1000).abs() <= 5);
        }
    }

    #[test]
    fn test_read_before_init_fails() {
        let mut sensor = SimulatedSensor::new("bench");
        assert!(sensor.read_raw().is_err());
    }

    #[test]
    fn test_init_failure() {
        let mut sensor = SimulatedSensor::new("bench");
        sensor.fail_init();
        assert!(matches!(sensor.init(),
                         Err(SensorError::Unavailable(_))));
    }

}  // mod tests.
