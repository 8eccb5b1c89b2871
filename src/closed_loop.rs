//! Closed-loop composition of controller and plant
//!
//! Block diagram:
//! ```text
//! r ──>(+)──> [ C(s) ] ──> [ G(s) ] ──┬──> y
//!       ^(-)                          │
//!       └─────────────────────────────┘
//! ```

use crate::error::LoopError;
use crate::transfer_function::TransferFunction;

/// Combine a plant and a controller into the unity-feedback closed loop
///
/// The controller precedes the plant in the forward path, so the open loop
/// is L = C*G; the result is T = L/(1 + L) after algebraic reduction.
///
/// # Errors
///
/// Propagates [`LoopError::DegenerateLoop`] from the feedback reduction
/// unchanged; this is the sole failure path.
pub fn closed_loop(
    plant: &TransferFunction,
    controller: &TransferFunction,
) -> Result<TransferFunction, LoopError> {
    controller.series(plant).unity_feedback()
}
