// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use altair_elements::sensor_trait::RawSample;
use altair_server::celestial_converter::{CelestialConverter, PointingAngles};
use altair_server::config::MountConfig;
use altair_server::orientation_engine::OrientationEngine;
use altair_server::simulated_sensor::SimulatedSensor;
use altair_server::telescope_values::TelescopeValues;

#[derive(Parser, Debug)]
#[command(about = "Self-locating alt-az mount core, driving simulated sensors")]
struct Args {
    /// Observer latitude, degrees (north positive).
    #[arg(long, default_value = "52.0")]
    latitude: f64,

    /// Observer longitude, degrees (east positive).
    #[arg(long, default_value = "0.0")]
    longitude: f64,

    /// Orientation tick period, milliseconds.
    #[arg(long, default_value = "10")]
    period_ms: u64,

    /// Publish a pointing solution every this many ticks.
    #[arg(long, default_value = "100")]
    report_every: u64,

    /// Number of ticks to run; 0 runs until interrupted.
    #[arg(long, default_value = "0")]
    ticks: u64,

    /// Start in calibration mode and log the learned extents on exit.
    #[arg(long)]
    calibrate: bool,
}

fn report_pointing(engine: &OrientationEngine,
                   converter: &CelestialConverter,
                   values: &Arc<Mutex<TelescopeValues>>,
                   latitude: f64, longitude: f64) -> Result<()> {
    let orientation = engine.orientation();
    let unix_time =
        SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;

    let mut angles = PointingAngles {
        altitude: orientation.pitch,
        azimuth: orientation.heading,
        latitude,
        longitude,
        ..Default::default()
    };
    converter.equatorial_from_horizontal(&mut angles, unix_time);

    {
        let mut locked_values = values.lock().unwrap();
        locked_values.altitude = orientation.pitch;
        locked_values.azimuth = orientation.heading;
        locked_values.right_ascension = angles.right_ascension;
        locked_values.declination = angles.declination;
        locked_values.pointing_valid = !orientation.pitch.is_nan()
            && !orientation.heading.is_nan();
    }

    info!("alt {:.4} az {:.4} -> ra {:.4} dec {:.4} \
           (LST {}h {}m {:.1}s)",
          orientation.pitch, orientation.heading,
          angles.right_ascension, angles.declination,
          angles.local_sidereal_hms.hours,
          angles.local_sidereal_hms.minutes,
          angles.local_sidereal_hms.seconds);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = MountConfig::default();

    // Bench rig: gravity down the body Z axis, a field dipping below the
    // horizontal as in the northern hemisphere, plus a little count noise
    // to exercise the filters.
    let mut accel_sensor = SimulatedSensor::new("MPU-6050 (simulated)");
    accel_sensor.set_raw(RawSample::new(0, 0, 16384));
    accel_sensor.set_noise_counts(64);
    let mut mag_sensor = SimulatedSensor::new("HMC5883L (simulated)");
    mag_sensor.set_raw(RawSample::new(218, 0, -436));
    mag_sensor.set_noise_counts(8);

    let mut engine = OrientationEngine::new(&config,
                                            Box::new(accel_sensor),
                                            Box::new(mag_sensor))?;
    engine.set_calibration_mode(args.calibrate);

    let values = Arc::new(Mutex::new(TelescopeValues::new()));
    let converter = CelestialConverter::new(values.clone());

    let latitude = args.latitude.to_radians();
    let longitude = args.longitude.to_radians();
    info!("Orientation tick every {} ms; observer at {:.4} rad N, \
           {:.4} rad E",
          args.period_ms, latitude, longitude);

    let mut tick: u64 = 0;
    loop {
        // A failed read is logged and retried naturally on the next tick.
        if let Err(e) = engine.run() {
            warn!("Sensor tick failed: {}", e);
        }
        tick += 1;
        if tick % args.report_every == 0 {
            report_pointing(&engine, &converter, &values,
                            latitude, longitude)?;
        }
        if args.ticks > 0 && tick >= args.ticks {
            break;
        }
        std::thread::sleep(Duration::from_millis(args.period_ms));
    }

    if args.calibrate {
        info!("Calibration extents: {:?}", engine.bounds());
    }
    Ok(())
}
