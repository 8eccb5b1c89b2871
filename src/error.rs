//! Error taxonomy for loop construction and simulation
//!
//! Every error reflects a deterministic property of the input: retrying with
//! identical input fails identically, so no operation in this crate retries
//! or suppresses an error internally.

use thiserror::Error;

/// Errors surfaced by transfer-function construction, feedback reduction,
/// and step-response simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoopError {
    /// A supplied or derived transfer function is physically meaningless:
    /// its denominator is the zero polynomial, or it cannot be realized as a
    /// state-space system (numerator degree exceeds denominator degree).
    #[error("invalid system: {0}")]
    InvalidSystem(String),

    /// Unity-feedback reduction collapsed the denominator to the zero
    /// polynomial, e.g. through exact cancellation with an open loop of -1.
    /// The closed loop has no well-defined response.
    #[error("degenerate feedback loop: {0}")]
    DegenerateLoop(String),

    /// Step-response computation failed: simulation parameters are out of
    /// range, the system has no dynamics to integrate, or integration
    /// produced non-finite values.
    #[error("simulation failed: {0}")]
    Simulation(String),
}
