// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use log::info;
use nalgebra::Vector3;

use altair_elements::axis_map::AxisMap;
use altair_elements::sensor_trait::{RawSample, SensorError, ThreeAxisSensor};
use altair_elements::sliding_filter::SlidingFilter;

use crate::config::MagDevice;

/// Magnetometer leg of the orientation pipeline. Same tick shape as the
/// accelerometer channel, without the attitude helpers: read, map to the
/// body frame, scale to gauss, filter. Hard-iron correction happens
/// downstream in the orientation engine.
pub struct MagChannel {
    sensor: Box<dyn ThreeAxisSensor>,
    axes: AxisMap,
    offsets: RawSample,
    filter: SlidingFilter,
    scaling: f64,
}

impl MagChannel {
    pub fn new(device: MagDevice, axes: AxisMap,
               mut sensor: Box<dyn ThreeAxisSensor>)
               -> Result<Self, SensorError> {
        sensor.init()?;
        let offsets = sensor.offsets();
        let scaling = device.lsb_scaling();
        info!("Magnetometer channel ready: {} ({} LSB/gauss)",
              sensor.model(), scaling);
        Ok(MagChannel {
            sensor,
            axes,
            offsets,
            filter: SlidingFilter::new(),
            scaling,
        })
    }

    pub fn run(&mut self) -> Result<(), SensorError> {
        let raw = self.sensor.read_raw()?;
        let body = self.axes.apply(raw, self.offsets);
        let field = Vector3::new(body[0] as f64 / self.scaling,
                                 body[1] as f64 / self.scaling,
                                 body[2] as f64 / self.scaling);
        self.filter.push(field);
        Ok(())
    }

    /// Latest filtered field in gauss, body frame.
    pub fn field(&self) -> Vector3<f64> {
        self.filter.average()
    }
}

#[cfg(test)]
mod tests {
    extern crate approx;
    use approx::assert_abs_diff_eq;

    use altair_elements::sensor_trait::RawSample;

    use crate::simulated_sensor::SimulatedSensor;
    use super::*;

    #[test]
    fn test_counts_scale_to_gauss() {
        let mut sensor = SimulatedSensor::new("test mag");
        sensor.set_raw(RawSample::new(327, -218, 545));
        let mut channel = MagChannel::new(MagDevice::Hmc5883l,
                                          AxisMap::identity(),
                                          Box::new(sensor)).unwrap();
        for _ in 0..4 {
            channel.run().unwrap();
        }
        let field = channel.field();
        assert_abs_diff_eq!(field.x, 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(field.y, -0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(field.z, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_filter_delay() {
        let mut sensor = SimulatedSensor::new("test mag");
        sensor.set_raw(RawSample::new(1090, 0, 0));
        let mut channel = MagChannel::new(MagDevice::Hmc5883l,
                                          AxisMap::identity(),
                                          Box::new(sensor)).unwrap();
        channel.run().unwrap();
        channel.run().unwrap();
        // Two of four ring slots are still the zeroed startup samples.
        assert_abs_diff_eq!(channel.field().x, 0.5, epsilon = 1e-9);
    }

}  // mod tests.
