// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use thiserror::Error;

use crate::sensor_trait::RawSample;

// A sensor chip rarely sits in the mount with its silkscreen aligned to the
// telescope. The body frame is fixed by the mechanics: X towards the
// objective end, Y towards telescope-right, Z up. Each body axis is bound
// to one device axis with a polarity, and the three bindings of a channel
// must drain three distinct device axes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn select(&self, sample: RawSample) -> i16 {
        match self {
            Axis::X => sample.x,
            Axis::Y => sample.y,
            Axis::Z => sample.z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Plus,
    Minus,
}

impl Polarity {
    fn factor(&self) -> i32 {
        match self {
            Polarity::Plus => 1,
            Polarity::Minus => -1,
        }
    }
}

// One body axis's view of the device: which device axis to sample, and
// whether it points along or against the body axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBinding {
    pub source: Axis,
    pub polarity: Polarity,
}

impl AxisBinding {
    pub fn new(source: Axis, polarity: Polarity) -> Self {
        AxisBinding { source, polarity }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AxisMapError {
    #[error("body axes must draw from three distinct device axes")]
    DuplicateSource,
}

/// Maps device-frame samples into the telescope body frame. For each body
/// axis the output is `polarity * (sample[source] + offset[source])`,
/// computed in i32 so that bias plus full-scale counts cannot wrap.
#[derive(Debug, Clone, Copy)]
pub struct AxisMap {
    bindings: [AxisBinding; 3],
}

impl AxisMap {
    /// `bindings` are in body-axis order (X, Y, Z). Fails unless the three
    /// source axes are a permutation of the device axes.
    pub fn new(bindings: [AxisBinding; 3]) -> Result<Self, AxisMapError> {
        for i in 0..3 {
            for j in (i + 1)..3 {
                if bindings[i].source == bindings[j].source {
                    return Err(AxisMapError::DuplicateSource);
                }
            }
        }
        Ok(AxisMap { bindings })
    }

    /// The identity mapping: body X/Y/Z read device X/Y/Z, all positive.
    pub fn identity() -> Self {
        AxisMap {
            bindings: [
                AxisBinding::new(Axis::X, Polarity::Plus),
                AxisBinding::new(Axis::Y, Polarity::Plus),
                AxisBinding::new(Axis::Z, Polarity::Plus),
            ],
        }
    }

    /// Applies the three bindings to one raw sample and its device bias.
    /// Returned components are in body-axis order (X, Y, Z).
    pub fn apply(&self, sample: RawSample, offsets: RawSample) -> [i32; 3] {
        let mut out = [0i32; 3];
        for (slot, binding) in out.iter_mut().zip(self.bindings.iter()) {
            let raw = binding.source.select(sample) as i32;
            let offset = binding.source.select(offsets) as i32;
            *slot = binding.polarity.factor() * (raw + offset);
        }
        out
    }
}

// mod tests.
