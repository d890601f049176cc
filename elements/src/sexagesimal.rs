// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::f64::consts::PI;

// Base-60 triple used for both hours/minutes/seconds of time and
// degrees/arc-minutes/arc-seconds of angle; which one is in play depends on
// the conversion that produced it. Sign convention: a negative decimal
// value carries its sign on the hours AND minutes fields, and the seconds
// field holds the negated sub-minute remainder. Non-negative values keep
// all three fields non-negative. Consumers rely on this asymmetric
// encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sexagesimal {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl Sexagesimal {
    pub fn new(hours: i32, minutes: i32, seconds: f64) -> Self {
        Sexagesimal { hours, minutes, seconds }
    }

    /// Splits decimal hours (or degrees) into a sexagesimal triple,
    /// applying the sign convention described above.
    pub fn from_decimal(decimal: f64) -> Self {
        let magnitude = decimal.abs();
        let hours = magnitude.trunc();
        let sub_hour = magnitude.fract() * 60.0;
        let minutes = sub_hour.trunc();
        let seconds = sub_hour.fract() * 60.0;
        if decimal < 0.0 {
            Sexagesimal {
                hours: -(hours as i32),
                minutes: -(minutes as i32),
                seconds: -seconds,
            }
        } else {
            Sexagesimal {
                hours: hours as i32,
                minutes: minutes as i32,
                seconds,
            }
        }
    }

    /// Recombines the triple into decimal hours (or degrees).
    pub fn to_decimal(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }

    /// Interprets `radians` as time (2π = 24h) and splits it.
    pub fn from_time_radians(radians: f64) -> Self {
        Self::from_decimal(radians * (12.0 / PI))
    }

    /// Interprets `radians` as arc and splits it into
    /// degrees/arc-minutes/arc-seconds.
    pub fn from_arc_radians(radians: f64) -> Self {
        Self::from_decimal(radians * (180.0 / PI))
    }

    /// Time triple to angle in decimal degrees (one hour is 15 degrees).
    pub fn to_arc_degrees(&self) -> f64 {
        self.to_decimal() * 15.0
    }

    /// Time triple to angle in radians.
    pub fn to_time_radians(&self) -> f64 {
        self.to_decimal() * 15.0 * (PI / 180.0)
    }

    /// Arc triple (degrees/arc-minutes/arc-seconds) to radians.
    pub fn to_arc_radians(&self) -> f64 {
        self.to_decimal() * (PI / 180.0)
    }

    /// Sum of two time triples, wrapping around one day. Operands are
    /// expected to be normalized non-negative times of day.
    pub fn add_wrapped(&self, other: &Sexagesimal) -> Sexagesimal {
        let mut seconds = self.seconds + other.seconds;
        let mut minutes = self.minutes + other.minutes;
        let mut hours = self.hours + other.hours;
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            hours += 1;
        }
        if hours >= 24 {
            hours -= 24;
        }
        Sexagesimal { hours, minutes, seconds }
    }

    /// Difference of two time triples, wrapping around one day.
    pub fn sub_wrapped(&self, other: &Sexagesimal) -> Sexagesimal {
        let mut seconds = self.seconds - other.seconds;
        let mut minutes = self.minutes - other.minutes;
        let mut hours = self.hours - other.hours;
        if seconds < 0.0 {
            seconds += 60.0;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            hours += 24;
        }
        Sexagesimal { hours, minutes, seconds }
    }
}

#[cfg(test)]
mod tests {
    extern crate approx;
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn test_split_positive() {
        let t = Sexagesimal::from_decimal(13.5);
        assert_eq!(t.hours, 13);
        assert_eq!(t.minutes, 30);
        assert_abs_diff_eq!(t.seconds, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.to_decimal(), 13.5, epsilon = 1e-12);
    }

    #[test]
    fn test_split_negative() {
        // Sign lands on hours and minutes; seconds is the negated
        // remainder.
        let t = Sexagesimal::from_decimal(-1.5);
        assert_eq!(t.hours, -1);
        assert_eq!(t.minutes, -30);
        assert_abs_diff_eq!(t.seconds, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.to_decimal(), -1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_across_the_day() {
        let mut x = -23.9375;
        while x < 24.0 {
            let decimal = Sexagesimal::from_decimal(x).to_decimal();
            assert_abs_diff_eq!(decimal, x, epsilon = 1e-9);
            x += 0.73;
        }
    }

    #[test]
    fn test_seconds_remainder() {
        let t = Sexagesimal::from_decimal(18.697374558);
        assert_eq!(t.hours, 18);
        assert_eq!(t.minutes, 41);
        assert_abs_diff_eq!(t.seconds, 50.548, epsilon = 0.001);
    }

    #[test]
    fn test_time_radians() {
        let t = Sexagesimal::from_time_radians(PI);
        assert_eq!(t.hours, 12);
        assert_eq!(t.minutes, 0);
        assert_abs_diff_eq!(t.seconds, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.to_time_radians(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_arc_radians() {
        let d = Sexagesimal::from_arc_radians(-PI / 4.0);
        assert_eq!(d.hours, -45);
        assert_eq!(d.minutes, 0);
        assert_abs_diff_eq!(d.to_arc_radians(), -PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_to_arc_degrees() {
        let t = Sexagesimal::new(1, 30, 0.0);
        assert_abs_diff_eq!(t.to_arc_degrees(), 22.5, epsilon = 1e-12);
    }

    #[test]
    fn test_add_wrapped() {
        let a = Sexagesimal::new(23, 59, 30.0);
        let b = Sexagesimal::new(0, 0, 45.0);
        let sum = a.add_wrapped(&b);
        assert_eq!(sum.hours, 0);
        assert_eq!(sum.minutes, 0);
        assert_abs_diff_eq!(sum.seconds, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sub_wrapped() {
        let a = Sexagesimal::new(0, 10, 5.0);
        let b = Sexagesimal::new(1, 20, 10.0);
        let diff = a.sub_wrapped(&b);
        assert_eq!(diff.hours, 22);
        assert_eq!(diff.minutes, 49);
        assert_abs_diff_eq!(diff.seconds, 55.0, epsilon = 1e-9);
    }

}  // mod tests.
