//! One-dimensional Kalman filter with a constant-state model.

/// Error covariance a fresh or reset filter starts from.
pub const INITIAL_ERROR_ESTIMATE: f64 = 1.0;

/// Scalar Kalman filter.
///
/// The state is assumed constant between measurements; `process_noise`
/// is how much it may drift per step and `measurement_noise` how much a
/// single reading is trusted.
#[derive(Clone, Debug)]
pub struct KalmanFilter1D {
    estimate:          f64,
    error_estimate:    f64,
    process_noise:     f64,
    measurement_noise: f64,
}

impl KalmanFilter1D {
    pub fn new(process_noise: f64, measurement_noise: f64) -> Self {
        Self {
            estimate: 0.0,
            error_estimate: INITIAL_ERROR_ESTIMATE,
            process_noise,
            measurement_noise,
        }
    }

    /// Fold one measurement into the estimate and return the new estimate.
    pub fn update(&mut self, measurement: f64) -> f64 {
        // Predict
        self.error_estimate += self.process_noise;

        // Gain
        let k = self.error_estimate / (self.error_estimate + self.measurement_noise);

        // Correct
        self.estimate += k * (measurement - self.estimate);
        self.error_estimate *= 1.0 - k;

        self.estimate
    }

    /// Back to zero estimate and initial covariance.
    pub fn reset(&mut self) {
        self.estimate = 0.0;
        self.error_estimate = INITIAL_ERROR_ESTIMATE;
    }

    #[inline]
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    #[inline]
    pub fn error_estimate(&self) -> f64 {
        self.error_estimate
    }
}
