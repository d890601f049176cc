// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    // The bus could not be opened or the device did not respond.
    #[error("sensor unavailable: {0}")]
    Unavailable(String),

    // A read or write transaction failed mid-flight.
    #[error("bus transaction failed: {0}")]
    Bus(String),

    // The device answered, but its identity register disagrees.
    #[error("unexpected device identity: expected {expected:#04x}, got {actual:#04x}")]
    WrongDevice { expected: u8, actual: u8 },
}

// One read cycle's worth of signed 16-bit device-frame counts. Also used
// for the static per-device bias triple reported alongside the samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        RawSample { x, y, z }
    }
}

/// Capability contract for a three-axis sensor (accelerometer or
/// magnetometer). Concrete device drivers live outside this crate; the
/// orientation pipeline consumes them only through this trait, with the
/// device chosen at composition time.
///
/// Reads are synchronous blocking bus transactions; the pipeline treats
/// them as instantaneous.
pub trait ThreeAxisSensor {
    /// Brings the device out of reset and caches its factory bias. Must be
    /// called once before `read_raw()` or `offsets()`.
    fn init(&mut self) -> Result<(), SensorError>;

    /// Reads the current device-frame sample in one bus transaction.
    fn read_raw(&mut self) -> Result<RawSample, SensorError>;

    /// Static per-device bias, valid after `init()`.
    fn offsets(&self) -> RawSample;

    /// Returns the sensor's model name.
    fn model(&self) -> String;
}

// mod tests.
