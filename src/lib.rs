//! pidtune - Closed-loop PID step-response engine
//!
//! Computes the unit-step response of the negative-unity-feedback loop formed
//! by a user-supplied plant transfer function and a parallel-form PID
//! controller:
//!
//! ```text
//! r ──>(+)──> [ C(s) ] ──> [ G(s) ] ──┬──> y
//!       ^(-)                          │
//!       └─────────────────────────────┘
//! ```
//!
//! The plant G(s) is a rational function of the Laplace variable given by its
//! numerator and denominator polynomial coefficients (descending powers), and
//! the controller is C(s) = (Kd·s² + Kp·s + Ki) / s. The closed loop
//! T = CG / (1 + CG) is reduced algebraically, realized in observable
//! canonical state-space form, and integrated with fixed-step RK4.
//!
//! The crate is the computation engine only: every call is a pure, synchronous
//! function from (plant coefficients, gains, duration) to a time series or a
//! typed error. Plotting and input handling belong to the host.
//!
//! # Example
//!
//! ```rust
//! use pidtune::{simulate, PidGains, SimulationRequest};
//!
//! // Mass-spring-damper plant 1/(s^2 + 0.5s + 2) under the default gains
//! let request = SimulationRequest::new(
//!     vec![1.0],
//!     vec![1.0, 0.5, 2.0],
//!     PidGains::default(),
//!     10.0,
//! );
//! let response = simulate(&request).unwrap();
//!
//! assert_eq!(response.len(), 1000);
//! assert!(response.output.iter().all(|y| y.is_finite()));
//! ```

pub mod closed_loop;
pub mod constants;
pub mod error;
pub mod pid;
pub mod polynomial;
pub mod solver;
pub mod state_space;
pub mod step_response;
pub mod transfer_function;

pub use closed_loop::closed_loop;
pub use error::LoopError;
pub use pid::PidGains;
pub use polynomial::Polynomial;
pub use step_response::{simulate, step_response, SimulationRequest, StepResponse};
pub use transfer_function::TransferFunction;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::closed_loop::closed_loop;
    pub use crate::constants::{DEFAULT_SAMPLE_COUNT, STEP_SETPOINT};
    pub use crate::error::LoopError;
    pub use crate::pid::PidGains;
    pub use crate::polynomial::Polynomial;
    pub use crate::step_response::{simulate, step_response, SimulationRequest, StepResponse};
    pub use crate::transfer_function::TransferFunction;
}
