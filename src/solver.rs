//! Classic 4th-order Runge-Kutta integration (RK4)
//!
//! The workhorse fixed-step explicit method: four stages, 4th order
//! accuracy, excellent accuracy-per-cost for smooth non-stiff dynamics.
//! The right-hand side is supplied as a closure over the state vector, so
//! the same stepper serves any realization.
//!
//! # References
//! - Butcher, J. C. (2016). "Numerical Methods for Ordinary Differential
//!   Equations". John Wiley & Sons, 3rd Edition.

use nalgebra::DVector;

/// Fixed-step RK4 integrator over a dense state vector
#[derive(Debug, Clone)]
pub struct Rk4 {
    state: DVector<f64>,
    initial: DVector<f64>,
}

impl Rk4 {
    /// Create an integrator with the given initial state
    pub fn new(initial: DVector<f64>) -> Self {
        Self {
            state: initial.clone(),
            initial,
        }
    }

    /// Current state vector
    pub fn state(&self) -> &DVector<f64> {
        &self.state
    }

    /// Reset to the initial state
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
    }

    /// Advance the state by one step of size `dt`
    ///
    /// Butcher tableau:
    /// ```text
    /// c = [0, 1/2, 1/2, 1]
    /// b = [1/6, 1/3, 1/3, 1/6]
    /// ```
    pub fn step<F>(&mut self, mut f: F, t: f64, dt: f64)
    where
        F: FnMut(&DVector<f64>, f64) -> DVector<f64>,
    {
        let k1 = f(&self.state, t);
        let k2 = f(&(&self.state + 0.5 * dt * &k1), t + 0.5 * dt);
        let k3 = f(&(&self.state + 0.5 * dt * &k2), t + 0.5 * dt);
        let k4 = f(&(&self.state + dt * &k3), t + dt);

        self.state += dt / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
    }
}
