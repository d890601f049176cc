// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use astro::angle::limit_to_two_PI;
use log::debug;
use nalgebra::Vector3;

use altair_elements::axis_map::Axis;
use altair_elements::sensor_trait::{SensorError, ThreeAxisSensor};

use crate::accel_channel::AccelChannel;
use crate::config::{MountConfig, ScaleCalibration};
use crate::mag_channel::MagChannel;

// Smallest/largest value seen on one axis of one channel while calibration
// mode is active. Both start at zero, so extents only grow outward from
// the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisExtents {
    pub min: f64,
    pub max: f64,
}

impl AxisExtents {
    fn track(&mut self, value: f64) {
        // Explicit comparisons: a NaN sample must leave the extents alone.
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    fn reset(&mut self, extreme: Extreme) {
        match extreme {
            Extreme::Min => self.min = 0.0,
            Extreme::Max => self.max = 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelExtents {
    pub x: AxisExtents,
    pub y: AxisExtents,
    pub z: AxisExtents,
}

impl ChannelExtents {
    fn track(&mut self, v: Vector3<f64>) {
        self.x.track(v.x);
        self.y.track(v.y);
        self.z.track(v.z);
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisExtents {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Per-axis extents observed on both channels during calibration mode.
/// The operator slews the tube through its full range of motion, reads
/// these off, and bakes them into the mount configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalibrationBounds {
    pub accel: ChannelExtents,
    pub mag: ChannelExtents,
}

// Selects which half of an extents pair to reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

/// The mount's attitude: pitch and roll from gravity, heading from the
/// tilt-compensated magnetic field. All radians; heading is in [0, 2π)
/// clockwise from magnetic north. Degenerate sensor input (zero gravity
/// vector, zero calibration span) propagates as NaN.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub pitch: f64,
    pub roll: f64,
    pub heading: f64,
}

/// Fuses the accelerometer and magnetometer channels into a
/// tilt-compensated compass orientation, and hosts the interactive
/// calibration mode. One instance is owned by the composition root and
/// ticked from the periodic dispatcher; all access is same-context.
pub struct OrientationEngine {
    accel: AccelChannel,
    mag: MagChannel,
    accel_scale: ScaleCalibration,
    mag_scale: ScaleCalibration,
    calibrating: bool,
    bounds: CalibrationBounds,
}

impl OrientationEngine {
    pub fn new(config: &MountConfig,
               accel_sensor: Box<dyn ThreeAxisSensor>,
               mag_sensor: Box<dyn ThreeAxisSensor>)
               -> Result<Self, SensorError> {
        let accel = AccelChannel::new(config.accel_device, config.accel_axes,
                                      accel_sensor)?;
        let mag = MagChannel::new(config.mag_device, config.mag_axes,
                                  mag_sensor)?;
        Ok(OrientationEngine {
            accel,
            mag,
            accel_scale: config.accel_scale,
            mag_scale: config.mag_scale,
            calibrating: false,
            bounds: CalibrationBounds::default(),
        })
    }

    /// One dispatcher tick: runs the magnetometer, then the accelerometer,
    /// then folds the fresh filter outputs into the calibration extents
    /// when calibration mode is on.
    pub fn run(&mut self) -> Result<(), SensorError> {
        self.mag.run()?;
        self.accel.run()?;
        if self.calibrating {
            self.bounds.mag.track(self.mag.field());
            self.bounds.accel.track(self.accel.acceleration());
            debug!("calibration extents: accel {:?} mag {:?}",
                   self.bounds.accel, self.bounds.mag);
        }
        Ok(())
    }

    pub fn set_calibration_mode(&mut self, enabled: bool) {
        self.calibrating = enabled;
    }

    pub fn calibration_mode(&self) -> bool {
        self.calibrating
    }

    pub fn bounds(&self) -> CalibrationBounds {
        self.bounds
    }

    /// Zeroes a single accelerometer extent.
    pub fn reset_accel_bound(&mut self, axis: Axis, extreme: Extreme) {
        self.bounds.accel.axis_mut(axis).reset(extreme);
    }

    /// Zeroes a single magnetometer extent.
    pub fn reset_mag_bound(&mut self, axis: Axis, extreme: Extreme) {
        self.bounds.mag.axis_mut(axis).reset(extreme);
    }

    pub fn accel(&self) -> &AccelChannel {
        &self.accel
    }

    pub fn mag(&self) -> &MagChannel {
        &self.mag
    }

    /// Current fused orientation, from the filter outputs of the last
    /// `run()`.
    pub fn orientation(&self) -> Orientation {
        let a = self.accel.acceleration();
        let m = self.mag.field();

        // Hard-iron removal, then per-axis span normalization. This is
        // linear scaling axis by axis, not vector normalization: it
        // pre-flattens the magnetic distortion ellipsoid into a unit cube
        // before tilt compensation.
        let m_span = self.mag_scale.max - self.mag_scale.offset;
        let mo = Vector3::new((m.x - self.mag_scale.offset.x) / m_span.x,
                              (m.y - self.mag_scale.offset.y) / m_span.y,
                              (m.z - self.mag_scale.offset.z) / m_span.z);
        let a_span = self.accel_scale.max - self.accel_scale.offset;
        let ao = Vector3::new(a.x / a_span.x,
                              a.y / a_span.y,
                              a.z / a_span.z);

        let pitch = (ao.x
                     / (ao.x * ao.x + ao.y * ao.y + ao.z * ao.z).sqrt())
            .asin();
        let roll = ao.y.atan2(ao.z);

        // Project the field onto the horizontal plane. The east component
        // is synthesized from the Z and Y field axes; body Z is the
        // mechanically constrained axis on this mount.
        // TODO: canonical tilt compensation reads Mx*sin(roll) -
        // My*cos(roll) for the east component; re-derive against the
        // mount geometry before changing this.
        let x_component = mo.x * pitch.cos()
            + mo.y * roll.sin() * pitch.sin()
            + mo.z * roll.cos() * pitch.sin();
        let y_component = mo.z * roll.sin() - mo.y * roll.cos();
        let heading = limit_to_two_PI(y_component.atan2(x_component));

        Orientation { pitch, roll, heading }
    }
}

// mod tests.
