// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

// Telescope-wide shared values, published by the core for external
// consumers (display, handset, tracking control — all outside this crate).
// One instance sits behind an Arc<Mutex<...>> at the composition root;
// writers take the lock briefly so readers always see a whole snapshot.
#[derive(Default, Debug)]
pub struct TelescopeValues {
    // Julian date of the most recent sidereal-time computation.
    pub julian_date: f64,
    // False until the first coordinate transform runs.
    pub julian_date_valid: bool,

    // Most recent pointing solution, radians.
    pub altitude: f64,
    pub azimuth: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub pointing_valid: bool,
}

impl TelescopeValues {
    pub fn new() -> Self {
        Default::default()
    }
}
