// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use log::info;
use nalgebra::Vector3;

use altair_elements::axis_map::AxisMap;
use altair_elements::sensor_trait::{RawSample, SensorError, ThreeAxisSensor};
use altair_elements::sliding_filter::SlidingFilter;

use crate::config::AccelDevice;

const STANDARD_GRAVITY: f64 = 9.81; // m/s².

/// Accelerometer leg of the orientation pipeline. Each tick reads the
/// device, maps the sample into the telescope body frame, scales it to
/// m/s², and pushes it through the sliding filter. Pitch and roll are
/// refreshed from the filter output on every `run()`; the getters return
/// the cached pair.
pub struct AccelChannel {
    sensor: Box<dyn ThreeAxisSensor>,
    axes: AxisMap,
    offsets: RawSample,
    filter: SlidingFilter,
    scaling: f64,
    g_range: f64,
    pitch: f64,
    roll: f64,
}

impl AccelChannel {
    pub fn new(device: AccelDevice, axes: AxisMap,
               mut sensor: Box<dyn ThreeAxisSensor>)
               -> Result<Self, SensorError> {
        sensor.init()?;
        let offsets = sensor.offsets();
        let scaling = device.lsb_scaling();
        let g_range = device.g_range();
        info!("Accelerometer channel ready: {} ({} LSB/g, +/-{} g)",
              sensor.model(), scaling, g_range);
        Ok(AccelChannel {
            sensor,
            axes,
            offsets,
            filter: SlidingFilter::new(),
            scaling,
            g_range,
            pitch: 0.0,
            roll: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), SensorError> {
        let raw = self.sensor.read_raw()?;
        let body = self.axes.apply(raw, self.offsets);
        let accel = Vector3::new(self.counts_to_ms2(body[0]),
                                 self.counts_to_ms2(body[1]),
                                 self.counts_to_ms2(body[2]));
        self.filter.push(accel);
        self.update_pitch_and_roll();
        Ok(())
    }

    fn counts_to_ms2(&self, counts: i32) -> f64 {
        (counts as f64 / self.scaling) * self.g_range * STANDARD_GRAVITY
    }

    fn update_pitch_and_roll(&mut self) {
        let a = self.filter.average();
        let magnitude = (a.x * a.x + a.y * a.y + a.z * a.z).sqrt();
        self.pitch = (a.x / magnitude).asin();
        self.roll = -((a.y / magnitude) / self.pitch.cos()).asin();
    }

    /// Latest filtered acceleration in m/s², body frame.
    pub fn acceleration(&self) -> Vector3<f64> {
        self.filter.average()
    }

    /// Gravity-derived pitch (radians) as of the last `run()`. NaN while
    /// the filtered vector is zero.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Gravity-derived roll (radians) as of the last `run()`. NaN at
    /// pitch +/- pi/2 where the roll axis degenerates.
    pub fn roll(&self) -> f64 {
        self.roll
    }
}

#[cfg(test)]
mod tests {
    extern crate approx;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use altair_elements::axis_map::{Axis, AxisBinding, AxisMap, Polarity};
    use altair_elements::sensor_trait::RawSample;

    use crate::simulated_sensor::SimulatedSensor;
    use super::*;

    fn channel_with_raw(raw: RawSample) -> AccelChannel {
        let mut sensor = SimulatedSensor::new("test accel");
        sensor.set_raw(raw);
        AccelChannel::new(AccelDevice::Mpu6050, AxisMap::identity(),
                          Box::new(sensor)).unwrap()
    }

    #[test]
    fn test_full_scale_x_reads_two_g() {
        // 16384 counts on a +/-2 g MPU-6050 scales to 2 g = 19.62 m/s².
        let mut channel = channel_with_raw(RawSample::new(16384, 0, 0));
        for _ in 0..4 {
            channel.run().unwrap();
        }
        let a = channel.acceleration();
        assert_abs_diff_eq!(a.x, 19.62, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.z, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(channel.pitch(), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_filter_ramp_up() {
        let mut channel = channel_with_raw(RawSample::new(16384, 0, 0));
        channel.run().unwrap();
        assert_abs_diff_eq!(channel.acceleration().x, 19.62 / 4.0,
                            epsilon = 1e-9);
    }

    #[test]
    fn test_level_tube_has_zero_pitch_and_roll() {
        let mut channel = channel_with_raw(RawSample::new(0, 0, 16384));
        for _ in 0..4 {
            channel.run().unwrap();
        }
        assert_abs_diff_eq!(channel.pitch(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(channel.roll(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_device_bias_and_axis_binding_applied() {
        let mut sensor = SimulatedSensor::new("test accel");
        sensor.set_raw(RawSample::new(0, 8000, 0));
        sensor.set_offsets(RawSample::new(0, 192, 0));
        // Body X reads the device's inverted Y axis.
        let axes = AxisMap::new([
            AxisBinding::new(Axis::Y, Polarity::Minus),
            AxisBinding::new(Axis::X, Polarity::Plus),
            AxisBinding::new(Axis::Z, Polarity::Plus),
        ]).unwrap();
        let mut channel = AccelChannel::new(AccelDevice::Mpu6050, axes,
                                            Box::new(sensor)).unwrap();
        for _ in 0..4 {
            channel.run().unwrap();
        }
        let expected = -(8192.0 / 16384.0) * 2.0 * 9.81;
        assert_abs_diff_eq!(channel.acceleration().x, expected,
                            epsilon = 1e-9);
    }

    #[test]
    fn test_zero_gravity_vector_yields_nan_attitude() {
        let mut channel = channel_with_raw(RawSample::new(0, 0, 0));
        channel.run().unwrap();
        assert!(channel.pitch().is_nan());
        assert!(channel.roll().is_nan());
    }

}  // mod tests.
