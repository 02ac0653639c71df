//! Walking-speed estimation from device motion and GPS.
//!
//! # Algorithm
//!
//! 1. Each motion sample supplies gravity-compensated user acceleration in
//!    g.  Its magnitude is converted to m/s².
//! 2. Below `motion_threshold` the walker is treated as standing still: the
//!    integrated velocity and the IMU filter are reset to zero.  This is
//!    what keeps single-integrated accelerometer noise from drifting without
//!    bound.
//! 3. Above it, `velocity += |a| · dt` and the running velocity is fed to
//!    the IMU [`KalmanFilter1D`].
//! 4. A second filter carries the fused estimate.  It takes every valid GPS
//!    speed and every IMU speed produced while moving.  Stillness never
//!    resets it, so a phone carried steadily still converges on GPS.
//!
//! Output is clamped at zero; a negative speed is never reported.

use tracing::trace;

use nav_core::Timestamp;

use crate::KalmanFilter1D;

/// Estimator tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpeedConfig {
    /// Minimum net acceleration (m/s²) that counts as motion.  Default 0.15.
    pub motion_threshold: f64,
    /// Kalman process noise.  Default 0.01.
    pub process_noise: f64,
    /// Kalman measurement noise.  Default 0.1.
    pub measurement_noise: f64,
    /// m/s² per g.  Default 9.81.
    pub gravity: f64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            motion_threshold:  0.15,
            process_noise:     0.01,
            measurement_noise: 0.1,
            gravity:           9.81,
        }
    }
}

/// Latest values from both speed sources.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedSnapshot {
    /// Filtered accelerometer-derived speed (m/s).  GPS never feeds it.
    pub imu_mps: f64,
    /// Last valid GPS speed (m/s), if any fix has reported one.
    pub gps_mps: Option<f64>,
    /// Estimate across both sources (m/s).  Survives stillness resets.
    pub fused_mps: f64,
}

/// Fuses accelerometer integration and GPS speed into one estimate.
#[derive(Clone, Debug)]
pub struct SpeedEstimator {
    config:         SpeedConfig,
    imu_filter:     KalmanFilter1D,
    fused_filter:   KalmanFilter1D,
    velocity:       f64,
    last_sample_at: Option<Timestamp>,
    imu_mps:        f64,
    gps_mps:        Option<f64>,
}

impl SpeedEstimator {
    pub fn new(config: SpeedConfig) -> Self {
        let filter = KalmanFilter1D::new(config.process_noise, config.measurement_noise);
        Self {
            config,
            imu_filter: filter.clone(),
            fused_filter: filter,
            velocity: 0.0,
            last_sample_at: None,
            imu_mps: 0.0,
            gps_mps: None,
        }
    }

    pub fn config(&self) -> &SpeedConfig {
        &self.config
    }

    /// Process one device-motion sample.
    ///
    /// `user_accel_g` is gravity-compensated acceleration in g on the
    /// device's three axes.  Returns the filtered IMU speed in m/s.
    pub fn on_motion(&mut self, user_accel_g: [f64; 3], at: Timestamp) -> f64 {
        let g = self.config.gravity;
        let magnitude = user_accel_g
            .iter()
            .map(|a| (a * g) * (a * g))
            .sum::<f64>()
            .sqrt();

        if magnitude < self.config.motion_threshold {
            self.reset_motion();
            // Integration restarts from the last still sample.
            self.last_sample_at = Some(at);
            return 0.0;
        }

        if let Some(last) = self.last_sample_at {
            let dt = at.since(last).as_secs_f64();
            self.velocity += magnitude * dt;
            let filtered = self.imu_filter.update(self.velocity);
            self.imu_mps = filtered.max(0.0);
            self.fused_filter.update(self.imu_mps);
            trace!(magnitude, dt, velocity = self.velocity, filtered, "motion sample");
        }
        self.last_sample_at = Some(at);
        self.imu_mps
    }

    /// Process a GPS speed reading.  Negative values mean the fix carries no
    /// valid speed and are ignored.  Returns the fused estimate.
    pub fn on_gps_speed(&mut self, speed_mps: f64) -> f64 {
        if speed_mps >= 0.0 {
            self.gps_mps = Some(speed_mps);
            self.fused_filter.update(speed_mps);
        }
        self.fused_mps()
    }

    /// Zero the integrated velocity and the IMU filter.  The fused estimate
    /// is kept.
    pub fn reset_motion(&mut self) {
        self.velocity = 0.0;
        self.imu_mps = 0.0;
        self.imu_filter.reset();
    }

    #[inline]
    pub fn fused_mps(&self) -> f64 {
        self.fused_filter.estimate().max(0.0)
    }

    pub fn snapshot(&self) -> SpeedSnapshot {
        SpeedSnapshot {
            imu_mps: self.imu_mps,
            gps_mps: self.gps_mps,
            fused_mps: self.fused_mps(),
        }
    }
}

impl Default for SpeedEstimator {
    fn default() -> Self {
        Self::new(SpeedConfig::default())
    }
}
