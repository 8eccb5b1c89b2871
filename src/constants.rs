//! Simulation constants and defaults

/// Amplitude of the reference step input (the set-point the consumer draws)
pub const STEP_SETPOINT: f64 = 1.0;

/// Default number of samples in a step response
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Upper bound on the internal integration timestep
pub const SIM_TIMESTEP_MAX: f64 = 1e-3;
