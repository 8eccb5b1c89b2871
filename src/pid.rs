//! Parallel-form PID controller
//!
//! Implements the standard control law
//!
//!   u(s) = (Kp + Ki/s + Kd*s) * e(s)
//!
//! rewritten over the common denominator s:
//!
//!   C(s) = (Kd*s^2 + Kp*s + Ki) / s

use serde::{Deserialize, Serialize};

use crate::polynomial::Polynomial;
use crate::transfer_function::TransferFunction;

/// Proportional, integral, and derivative gains
///
/// Gains are non-negative reals; no upper bound is enforced (any range limit
/// belongs to the host UI). All three gains may be zero, which yields an
/// inert controller with open-loop gain zero everywhere.
///
/// # Example
///
/// ```rust
/// use pidtune::PidGains;
///
/// let c = PidGains::new(10.0, 0.0, 5.0).transfer_function();
/// assert_eq!(c.numerator().coeffs(), &[5.0, 10.0, 0.0]);
/// assert_eq!(c.denominator().coeffs(), &[1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain Kp
    pub kp: f64,
    /// Integral gain Ki
    pub ki: f64,
    /// Derivative gain Kd
    pub kd: f64,
}

impl PidGains {
    /// Create a gain triple
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    /// Build the controller transfer function C(s) = (Kd*s^2 + Kp*s + Ki)/s
    ///
    /// Note that C(s) is improper whenever Kd > 0 (the ideal derivative
    /// term); it becomes realizable once composed in series with a strictly
    /// proper plant.
    pub fn transfer_function(&self) -> TransferFunction {
        TransferFunction::from_parts(
            Polynomial::new(vec![self.kd, self.kp, self.ki]),
            Polynomial::new(vec![1.0, 0.0]),
        )
    }
}

impl Default for PidGains {
    /// Proportional-derivative starting point: Kp = 10, Ki = 0, Kd = 5
    fn default() -> Self {
        Self {
            kp: 10.0,
            ki: 0.0,
            kd: 5.0,
        }
    }
}
