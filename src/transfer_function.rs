//! Rational transfer functions of the Laplace variable
//!
//! A transfer function H(s) = B(s)/A(s) describes a SISO LTI system in the
//! frequency domain. Values are immutable: composition operations (`series`,
//! `unity_feedback`) always produce new transfer functions.
//!
//! References:
//! - Ogata, K. (2010). Modern Control Engineering (5th ed.). Chapter 2
//! - Åström, K. J. & Murray, R. M. (2008). Feedback Systems. Chapter 8

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LoopError;
use crate::polynomial::Polynomial;

/// SISO LTI system as a ratio of two polynomials in s
///
/// The denominator must not be the zero polynomial. Improper transfer
/// functions (numerator degree above denominator degree) are constructible -
/// the ideal PID controller is one - but cannot be simulated directly; only
/// the composed closed loop handed to the simulator must be proper.
///
/// # Example
///
/// ```rust
/// use pidtune::TransferFunction;
///
/// // Mass-spring-damper: 1/(s^2 + 0.5s + 2)
/// let plant = TransferFunction::from_coeffs(&[1.0], &[1.0, 0.5, 2.0]).unwrap();
/// assert_eq!(plant.to_string(), "(1) / (1s^2 + 0.5s + 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    num: Polynomial,
    den: Polynomial,
}

impl TransferFunction {
    /// Create a transfer function from numerator and denominator polynomials
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::InvalidSystem`] if the denominator is the zero
    /// polynomial; such a system is physically meaningless and is never
    /// silently replaced by a default.
    pub fn new(num: Polynomial, den: Polynomial) -> Result<Self, LoopError> {
        if den.is_zero() {
            return Err(LoopError::InvalidSystem(
                "denominator polynomial is zero".into(),
            ));
        }
        Ok(Self { num, den })
    }

    /// Create a transfer function from coefficient slices, descending powers
    pub fn from_coeffs(num: &[f64], den: &[f64]) -> Result<Self, LoopError> {
        Self::new(Polynomial::new(num.to_vec()), Polynomial::new(den.to_vec()))
    }

    /// Constructor for compositions whose denominator is nonzero by algebra
    pub(crate) fn from_parts(num: Polynomial, den: Polynomial) -> Self {
        debug_assert!(!den.is_zero());
        Self { num, den }
    }

    /// Numerator polynomial
    pub fn numerator(&self) -> &Polynomial {
        &self.num
    }

    /// Denominator polynomial
    pub fn denominator(&self) -> &Polynomial {
        &self.den
    }

    /// Cascade composition: the output of `self` feeds `other`
    ///
    /// `(N1/D1) * (N2/D2) = (N1*N2) / (D1*D2)`. The product denominator is
    /// nonzero whenever both factors are valid, so this cannot fail.
    pub fn series(&self, other: &TransferFunction) -> TransferFunction {
        TransferFunction::from_parts(self.num.mul(&other.num), self.den.mul(&other.den))
    }

    /// Close the loop around `self` with negative unity feedback
    ///
    /// For an open loop L = N/D the closed loop is T = L/(1 + L), cleared of
    /// fractions: T = N / (D + N), where the numerator is power-aligned to
    /// the denominator before the addition.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::DegenerateLoop`] if the reduced denominator is
    /// the zero polynomial (exact cancellation, e.g. L = -1): the closed
    /// loop has no usable dynamics.
    pub fn unity_feedback(&self) -> Result<TransferFunction, LoopError> {
        let den = self.den.add_aligned(&self.num);
        if den.is_zero() {
            return Err(LoopError::DegenerateLoop(
                "unity feedback reduced the denominator to zero".into(),
            ));
        }
        Ok(TransferFunction::from_parts(self.num.clone(), den))
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) / ({})", self.num, self.den)
    }
}
