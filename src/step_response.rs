//! Unit-step response simulation
//!
//! Given a proper transfer function and a time horizon, produces the system
//! output for a Heaviside step input with zero initial conditions. The
//! transfer function is realized in observable canonical form and the state
//! equation dx/dt = Ax + Bu, u = 1 is integrated with fixed-step RK4,
//! sub-stepping each sample interval so the integrator step honors both the
//! default cap and a stability bound derived from the state matrix.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::closed_loop::closed_loop;
use crate::constants::{DEFAULT_SAMPLE_COUNT, SIM_TIMESTEP_MAX, STEP_SETPOINT};
use crate::error::LoopError;
use crate::pid::PidGains;
use crate::solver::Rk4;
use crate::state_space::StateSpace;
use crate::transfer_function::TransferFunction;

/// Step-response time series: parallel time/output vectors
///
/// Times are uniformly spaced, strictly increasing, and cover
/// `[0, duration]` inclusive. The reference the output is tracking is the
/// fixed set-point [`STEP_SETPOINT`]; the consumer draws that line itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResponse {
    /// Sample times in seconds
    pub time: Vec<f64>,
    /// System output at each sample time
    pub output: Vec<f64>,
}

impl StepResponse {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True if the response holds no samples
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterate over (time, output) pairs, ready for plotting
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .copied()
            .zip(self.output.iter().copied())
    }

    /// Output at the final sample time
    pub fn final_output(&self) -> Option<f64> {
        self.output.last().copied()
    }
}

/// One full simulation request: the crate's function-call boundary
///
/// Carries everything the host hands over when a coefficient, gain, or the
/// duration changes. Requests are value objects: identical requests produce
/// identical responses, and nothing persists between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Plant numerator coefficients, descending powers
    pub plant_num: Vec<f64>,
    /// Plant denominator coefficients, descending powers
    pub plant_den: Vec<f64>,
    /// PID controller gains
    #[serde(default)]
    pub gains: PidGains,
    /// Simulation horizon in seconds
    pub duration: f64,
    /// Number of samples over the horizon
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

impl SimulationRequest {
    /// Create a request with the default sample count
    pub fn new(plant_num: Vec<f64>, plant_den: Vec<f64>, gains: PidGains, duration: f64) -> Self {
        Self {
            plant_num,
            plant_den,
            gains,
            duration,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Simulate the closed-loop step response for one request
///
/// Builds the plant transfer function, the controller from the gains, closes
/// the loop, and simulates. Pure and stateless: the host calls this on every
/// input change and may discard superseded results freely.
///
/// # Errors
///
/// - [`LoopError::InvalidSystem`] for an all-zero plant denominator.
/// - [`LoopError::DegenerateLoop`] if the feedback reduction collapses.
/// - [`LoopError::Simulation`] for out-of-range parameters or a divergent
///   response.
pub fn simulate(request: &SimulationRequest) -> Result<StepResponse, LoopError> {
    let plant = TransferFunction::from_coeffs(&request.plant_num, &request.plant_den)?;
    let controller = request.gains.transfer_function();
    let closed = closed_loop(&plant, &controller)?;
    step_response(&closed, request.duration, request.sample_count)
}

/// Compute the unit-step response of `tf` over `[0, duration]`
///
/// Produces exactly `sample_count` uniformly spaced samples, endpoints
/// included. On any failure no partial series is returned.
///
/// # Errors
///
/// Returns [`LoopError::Simulation`] if `duration` is not a positive finite
/// number, `sample_count < 2`, the denominator has effective degree 0, or
/// integration produces non-finite values. An improper `tf` is rejected with
/// [`LoopError::InvalidSystem`].
pub fn step_response(
    tf: &TransferFunction,
    duration: f64,
    sample_count: usize,
) -> Result<StepResponse, LoopError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(LoopError::Simulation(format!(
            "duration must be a positive number of seconds, got {duration}"
        )));
    }
    if sample_count < 2 {
        return Err(LoopError::Simulation(format!(
            "sample count must be at least 2, got {sample_count}"
        )));
    }

    let ss = StateSpace::from_transfer_function(tf)?;
    let interval = duration / (sample_count - 1) as f64;

    // Sub-step each sample interval. The norm of A bounds the spectral
    // radius, so 1/||A|| keeps the fastest mode well inside the RK4
    // stability region.
    let mut max_dt = SIM_TIMESTEP_MAX.min(interval);
    let a_norm = ss.a_matrix().norm();
    if a_norm > 0.0 {
        max_dt = max_dt.min(1.0 / a_norm);
    }
    let substeps = (interval / max_dt).ceil().max(1.0) as usize;
    let dt = interval / substeps as f64;

    let input = STEP_SETPOINT;
    let mut solver = Rk4::new(DVector::zeros(ss.order()));
    let mut time = Vec::with_capacity(sample_count);
    let mut output = Vec::with_capacity(sample_count);

    for i in 0..sample_count {
        let t = if i == sample_count - 1 {
            duration
        } else {
            i as f64 * interval
        };

        let y = ss.output(solver.state(), input);
        if !y.is_finite() || solver.state().iter().any(|x| !x.is_finite()) {
            return Err(LoopError::Simulation(format!(
                "response diverged: non-finite value at t = {t:.6} s"
            )));
        }
        time.push(t);
        output.push(y);

        if i + 1 < sample_count {
            for k in 0..substeps {
                let t_sub = i as f64 * interval + k as f64 * dt;
                solver.step(|x, _t| ss.derivative(x, input), t_sub, dt);
            }
        }
    }

    Ok(StepResponse { time, output })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_order_analytic() {
        // H(s) = 1/(s+1): y(t) = 1 - e^(-t)
        let tf = TransferFunction::from_coeffs(&[1.0], &[1.0, 1.0]).unwrap();
        let response = step_response(&tf, 5.0, 501).unwrap();

        for (t, y) in response.samples() {
            let expected = 1.0 - (-t).exp();
            assert_relative_eq!(y, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_critically_damped_analytic() {
        // H(s) = 1/(s+1)^2: y(t) = 1 - (1 + t) e^(-t)
        let tf = TransferFunction::from_coeffs(&[1.0], &[1.0, 2.0, 1.0]).unwrap();
        let response = step_response(&tf, 10.0, 1000).unwrap();

        for (t, y) in response.samples() {
            let expected = 1.0 - (1.0 + t) * (-t).exp();
            assert_relative_eq!(y, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_biproper_initial_feedthrough() {
        // H(s) = (s+2)/(s+10): y(t) = 0.2 + 0.8 e^(-10t), y(0) = 1
        let tf = TransferFunction::from_coeffs(&[1.0, 2.0], &[1.0, 10.0]).unwrap();
        let response = step_response(&tf, 1.0, 201).unwrap();

        assert_relative_eq!(response.output[0], 1.0);
        for (t, y) in response.samples() {
            let expected = 0.2 + 0.8 * (-10.0 * t).exp();
            assert_relative_eq!(y, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sample_grid() {
        let tf = TransferFunction::from_coeffs(&[1.0], &[1.0, 1.0]).unwrap();
        let response = step_response(&tf, 10.0, 1000).unwrap();

        assert_eq!(response.len(), 1000);
        assert_eq!(response.time[0], 0.0);
        assert_eq!(*response.time.last().unwrap(), 10.0);
        for pair in response.time.windows(2) {
            assert!(pair[1] > pair[0], "sample times must strictly increase");
        }
    }

    #[test]
    fn test_invalid_duration() {
        let tf = TransferFunction::from_coeffs(&[1.0], &[1.0, 1.0]).unwrap();
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = step_response(&tf, duration, 100).unwrap_err();
            assert!(matches!(err, LoopError::Simulation(_)));
        }
    }

    #[test]
    fn test_invalid_sample_count() {
        let tf = TransferFunction::from_coeffs(&[1.0], &[1.0, 1.0]).unwrap();
        for count in [0, 1] {
            let err = step_response(&tf, 1.0, count).unwrap_err();
            assert!(matches!(err, LoopError::Simulation(_)));
        }
    }

    #[test]
    fn test_static_gain_has_no_dynamics() {
        let tf = TransferFunction::from_coeffs(&[3.0], &[2.0]).unwrap();
        let err = step_response(&tf, 1.0, 100).unwrap_err();
        assert!(matches!(err, LoopError::Simulation(_)));
    }

    #[test]
    fn test_divergence_detected() {
        // H(s) = 1/(s - 100): e^(100t) overflows well before t = 10
        let tf = TransferFunction::from_coeffs(&[1.0], &[1.0, -100.0]).unwrap();
        let err = step_response(&tf, 10.0, 1000).unwrap_err();
        assert!(matches!(err, LoopError::Simulation(_)));
    }

    #[test]
    fn test_request_defaults() {
        let request = SimulationRequest::new(
            vec![1.0],
            vec![1.0, 0.5, 2.0],
            PidGains::default(),
            10.0,
        );
        assert_eq!(request.sample_count, DEFAULT_SAMPLE_COUNT);
        let response = simulate(&request).unwrap();
        assert_eq!(response.len(), DEFAULT_SAMPLE_COUNT);
    }
}
