// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use chrono::{DateTime, Timelike, Utc};

/// Julian date for the given Unix time (UTC seconds since 1970-01-01).
pub fn julian_date(unix_time: i64) -> f64 {
    // unix time = (JD - 2440587.5) * 86400
    unix_time as f64 / 86400.0 + 2440587.5
}

/// Decimal UT hours-of-day for the given Unix time. Times outside
/// chrono's representable range yield NaN, which flows through the
/// sidereal-time result like any other domain error.
pub fn ut_hours_of_day(unix_time: i64) -> f64 {
    match DateTime::<Utc>::from_timestamp(unix_time, 0) {
        Some(dt_utc) => {
            dt_utc.time().num_seconds_from_midnight() as f64 / 3600.0
        }
        None => f64::NAN,
    }
}

/// Local Apparent Sidereal Time for the given Unix time and observer
/// longitude (radians, east positive).
///
/// GMST polynomial (hours), per the USNO approximation:
/// `GMST = 6.697374558 + 0.06570982441908 D0 + 1.00273790935 H + 0.000026 T^2`
/// with D0 the Julian days since J2000.0 at the preceding UT midnight, H the
/// UT hours-of-day, and T the integer-truncated Julian centuries since
/// J2000.0. GAST adds the equation of the equinoxes, and LAST subtracts the
/// observer longitude.
///
/// TODO: the polynomial yields hours, but every caller treats the returned
/// value as radians, and the equation-of-the-equinoxes terms feed
/// degree-valued constants straight into radian trig. Pick one unit and
/// convert at a single point; the pointing math downstream must be
/// re-verified against the mount when this changes.
pub fn local_sidereal_time(unix_time: i64, longitude: f64) -> f64 {
    let jd = julian_date(unix_time);
    let days_since_j2000 = jd - 2451545.0;
    let ut_hours = ut_hours_of_day(unix_time);
    let midnight_days = days_since_j2000 - ut_hours / 24.0;

    // Integer truncation of the centuries term is deliberate; it is zero
    // until the year 2100.
    let centuries = (days_since_j2000 as u32) / 36525;
    let mut gmst = 6.697374558
        + 0.06570982441908 * midnight_days
        + 1.00273790935 * ut_hours
        + 0.000026 * ((centuries * centuries) as f64);
    gmst %= 24.0;

    // Equation of the equinoxes: eqeq = nutation * cos(obliquity), with the
    // moon-node and solar-longitude arguments from the USNO GAST note.
    let nutation = -0.000319 * (125.04 - 0.052954 * days_since_j2000).sin()
        - 0.000024 * (2.0 * (280.47 + 0.98565 * days_since_j2000)).sin();
    let obliquity = 23.4393 - 0.0000004 * days_since_j2000;
    let eqeq = nutation * obliquity.cos();

    let gast = gmst + eqeq;
    gast - longitude
}

#[cfg(test)]
mod tests {
    extern crate approx;
    use approx::assert_abs_diff_eq;
    use astro::time::{julian_day, CalType, Date};
    use super::*;

    #[test]
    fn test_julian_date_at_j2000() {
        // 2000-01-01 12:00:00 UTC is the J2000.0 epoch.
        assert_abs_diff_eq!(julian_date(946728000), 2451545.0, epsilon = 1e-9);
    }

    #[test]
    fn test_julian_date_matches_astro_crate() {
        let date = Date {
            year: 2017,
            month: 7,
            decimal_day: 14.0,
            cal_type: CalType::Gregorian,
        };
        // 2017-07-14 00:00:00 UTC.
        assert_abs_diff_eq!(julian_date(1499990400), julian_day(&date),
                            epsilon = 1e-9);
    }

    #[test]
    fn test_ut_hours_of_day() {
        assert_abs_diff_eq!(ut_hours_of_day(946728000), 12.0, epsilon = 1e-9);
        // 2017-07-14 02:40:00 UTC.
        assert_abs_diff_eq!(ut_hours_of_day(1500000000), 2.0 + 40.0 / 60.0,
                            epsilon = 1e-9);
    }

    #[test]
    fn test_sidereal_time_at_j2000_noon() {
        // At the J2000.0 epoch the GMST polynomial evaluates to
        // 18.697374558 hours; the equinox correction shifts it by under a
        // tenth of a second.
        let last = local_sidereal_time(946728000, 0.0);
        assert_abs_diff_eq!(last, 18.697, epsilon = 0.001);
    }

    #[test]
    fn test_sidereal_time_known_value() {
        let last = local_sidereal_time(1500000000, 0.0);
        assert_abs_diff_eq!(last, 22.1442, epsilon = 0.001);
    }

    #[test]
    fn test_longitude_offsets_sidereal_time() {
        let at_meridian = local_sidereal_time(946728000, 0.0);
        let east_of_meridian = local_sidereal_time(946728000, 0.5);
        assert_abs_diff_eq!(at_meridian - east_of_meridian, 0.5,
                            epsilon = 1e-12);
    }

}  // mod tests.
