// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

use astro::angle::limit_to_two_PI;

use altair_elements::astro_util;
use altair_elements::sexagesimal::Sexagesimal;

use crate::telescope_values::TelescopeValues;

/// Working set for one coordinate transform. The converter mutates this in
/// place; the caller owns the storage. All angles are radians (azimuth
/// clockwise from north, longitude east positive).
#[derive(Debug, Clone, Default)]
pub struct PointingAngles {
    pub altitude: f64,
    pub azimuth: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub hour_angle: f64,
    pub declination: f64,
    pub right_ascension: f64,
    // LAST as produced by the sidereal-time polynomial; see the unit TODO
    // on astro_util::local_sidereal_time.
    pub local_sidereal_time: f64,
    pub local_sidereal_hms: Sexagesimal,
}

/// Bidirectional horizontal <-> equatorial transforms. Each transform
/// derives LAST for the query instant and publishes the Julian date to the
/// telescope-wide value registry.
pub struct CelestialConverter {
    values: Arc<Mutex<TelescopeValues>>,
}

impl CelestialConverter {
    pub fn new(values: Arc<Mutex<TelescopeValues>>) -> Self {
        CelestialConverter { values }
    }

    /// Fills in declination, hour angle, right ascension, and LAST from
    /// altitude, azimuth, and the observer position.
    pub fn equatorial_from_horizontal(&self, angles: &mut PointingAngles,
                                      unix_time: i64) {
        // sin(dec) = sin(alt) sin(lat) + cos(alt) cos(lat) cos(az)
        let sin_dec = angles.altitude.sin() * angles.latitude.sin()
            + angles.altitude.cos() * angles.latitude.cos()
                * angles.azimuth.cos();
        angles.declination = sin_dec.asin() % (2.0 * PI);

        // cos(ha) = (sin(alt) - sin(dec) sin(lat)) / (cos(dec) cos(lat))
        let cos_ha = (angles.altitude.sin()
                      - angles.declination.sin() * angles.latitude.sin())
            / (angles.declination.cos() * angles.latitude.cos());
        let mut hour_angle = limit_to_two_PI(cos_ha.acos());
        // acos cannot tell east of the meridian from west; the azimuth's
        // sine can.
        if angles.azimuth.sin() > 0.0 {
            hour_angle = 2.0 * PI - hour_angle;
        }
        angles.hour_angle = hour_angle;

        angles.local_sidereal_time =
            self.sidereal_time(unix_time, angles.longitude);
        angles.local_sidereal_hms =
            Sexagesimal::from_decimal(angles.local_sidereal_time);

        angles.right_ascension =
            limit_to_two_PI(angles.local_sidereal_time - angles.hour_angle);
    }

    /// Fills in altitude, azimuth, hour angle, and LAST from right
    /// ascension, declination, and the observer position.
    pub fn horizontal_from_equatorial(&self, angles: &mut PointingAngles,
                                      unix_time: i64) {
        angles.local_sidereal_time =
            self.sidereal_time(unix_time, angles.longitude);
        angles.local_sidereal_hms =
            Sexagesimal::from_decimal(angles.local_sidereal_time);

        angles.hour_angle =
            angles.local_sidereal_time - angles.right_ascension;

        // TODO: these terms read the observer longitude where latitude is
        // canonically expected, so the round trip with
        // equatorial_from_horizontal only closes when the two are equal.
        // Verify against the mount before correcting either transform.
        let azimuth = (angles.hour_angle.sin()
                       / (angles.hour_angle.cos() * angles.longitude.sin()
                          - angles.declination.tan()
                              * angles.longitude.cos()))
            .atan();
        let altitude = (angles.longitude.sin() * angles.declination.sin()
                        + angles.longitude.cos() * angles.declination.cos()
                            * angles.hour_angle.cos())
            .asin();

        angles.altitude = altitude % (2.0 * PI);
        angles.azimuth = azimuth % (2.0 * PI);
    }

    // Computes LAST for the query instant, publishing the Julian date to
    // the shared registry on the way.
    fn sidereal_time(&self, unix_time: i64, longitude: f64) -> f64 {
        let jd = astro_util::julian_date(unix_time);
        {
            let mut values = self.values.lock().unwrap();
            values.julian_date = jd;
            values.julian_date_valid = true;
        }
        astro_util::local_sidereal_time(unix_time, longitude)
    }
}

// mod tests.
