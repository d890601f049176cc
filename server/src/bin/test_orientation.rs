// Copyright (c) 2026 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use anyhow::Result;

use altair_elements::sensor_trait::RawSample;
use altair_server::config::MountConfig;
use altair_server::orientation_engine::OrientationEngine;
use altair_server::simulated_sensor::SimulatedSensor;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Initializing orientation engine...");
    let mut accel_sensor = SimulatedSensor::new("MPU-6050 (simulated)");
    accel_sensor.set_raw(RawSample::new(0, 0, 16384));
    accel_sensor.set_noise_counts(64);
    let mut mag_sensor = SimulatedSensor::new("HMC5883L (simulated)");
    mag_sensor.set_raw(RawSample::new(218, 0, -436));
    mag_sensor.set_noise_counts(8);

    let mut engine = OrientationEngine::new(&MountConfig::default(),
                                            Box::new(accel_sensor),
                                            Box::new(mag_sensor))?;
    log::info!("Both sensor channels initialized successfully!");

    // Read some samples; the first few show the filter ramping up.
    for i in 0..8 {
        engine.run()?;
        let orientation = engine.orientation();
        log::info!("Sample {}: pitch={:.3} roll={:.3} heading={:.3} rad",
                   i + 1, orientation.pitch, orientation.roll,
                   orientation.heading);
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    Ok(())
}
