// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use nalgebra::Vector3;

use altair_elements::axis_map::AxisMap;

// Supported accelerometer parts. The tag fixes the raw-count scaling and
// the configured g range; the matching driver is supplied separately at
// composition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelDevice {
    Mpu6050,
    Mpu9150,
}

impl AccelDevice {
    /// Raw LSB per g at the configured range.
    pub fn lsb_scaling(&self) -> f64 {
        match self {
            // ±2 g range.
            AccelDevice::Mpu6050 | AccelDevice::Mpu9150 => 16384.0,
        }
    }

    /// Configured full-scale range in g.
    pub fn g_range(&self) -> f64 {
        match self {
            AccelDevice::Mpu6050 | AccelDevice::Mpu9150 => 2.0,
        }
    }
}

// Supported magnetometer parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagDevice {
    Hmc5883l,
    Lsm303dlhc,
}

impl MagDevice {
    /// Raw LSB per gauss at the configured gain.
    pub fn lsb_scaling(&self) -> f64 {
        match self {
            MagDevice::Hmc5883l => 1090.0,
            MagDevice::Lsm303dlhc => 1100.0,
        }
    }
}

// Per-channel hard-iron and scale extents, learned by running the engine
// in calibration mode and slewing the tube through its full range, then
// baked in here. `offset` is the per-axis bias to subtract; `max` the
// observed per-axis maximum. The orientation math divides each axis by
// `max - offset`, flattening the distortion ellipsoid into a unit cube.
#[derive(Debug, Clone, Copy)]
pub struct ScaleCalibration {
    pub offset: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl ScaleCalibration {
    /// Neutral calibration: zero offset, unit span. Leaves readings
    /// untouched; a freshly assembled mount starts here.
    pub fn neutral() -> Self {
        ScaleCalibration {
            offset: Vector3::zeros(),
            max: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Everything the orientation pipeline needs to know about how the mount
/// was built: which sensor parts are fitted, how their device axes map
/// onto the telescope body frame, and the channel calibration constants.
#[derive(Debug, Clone)]
pub struct MountConfig {
    pub accel_device: AccelDevice,
    pub mag_device: MagDevice,
    pub accel_axes: AxisMap,
    pub mag_axes: AxisMap,
    pub accel_scale: ScaleCalibration,
    pub mag_scale: ScaleCalibration,
}

impl Default for MountConfig {
    fn default() -> Self {
        MountConfig {
            accel_device: AccelDevice::Mpu6050,
            mag_device: MagDevice::Hmc5883l,
            accel_axes: AxisMap::identity(),
            mag_axes: AxisMap::identity(),
            accel_scale: ScaleCalibration::neutral(),
            mag_scale: ScaleCalibration::neutral(),
        }
    }
}

// mod tests.
