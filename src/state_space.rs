//! State-space realization of a transfer function
//!
//! Converts a proper rational transfer function H(s) = B(s)/A(s) into
//!
//!   dx/dt = Ax + Bu
//!   y     = Cx + Du
//!
//! using observable canonical form. For
//!
//!   H(s) = (b_n*s^n + ... + b_0) / (s^n + a_{n-1}*s^{n-1} + ... + a_0)
//!
//! the realization is:
//!
//!   A = [-a_{n-1}  -a_{n-2}  ...  -a_1  -a_0 ]      B = [1]
//!       [   1         0      ...   0     0   ]          [0]
//!       [   0         1      ...   0     0   ]          [⋮]
//!       [   ⋮         ⋮      ⋱     ⋮     ⋮   ]          [0]
//!       [   0         0      ...   1     0   ]
//!
//!   C = strictly proper numerator coefficients, D = b_n (biproper case).
//!
//! References:
//! - Ogata, K. (2010). Modern Control Engineering (5th ed.). Section 5.6
//! - Chen, C.T. (1999). Linear System Theory and Design (3rd ed.). Section 5.5

use nalgebra::{DMatrix, DVector};

use crate::error::LoopError;
use crate::transfer_function::TransferFunction;

/// Observable-canonical-form realization of a proper transfer function
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    /// State matrix (n×n)
    a: DMatrix<f64>,
    /// Input vector (n)
    b: DVector<f64>,
    /// Output vector (n)
    c: DVector<f64>,
    /// Direct feedthrough
    d: f64,
}

impl StateSpace {
    /// Realize a transfer function, trimming leading zero coefficients first
    ///
    /// The denominator is normalized so its leading coefficient is one, and
    /// the numerator is left-padded by power to the denominator's length
    /// before the feedthrough split.
    ///
    /// # Errors
    ///
    /// - [`LoopError::InvalidSystem`] if the transfer function is improper
    ///   (effective numerator degree above effective denominator degree) or
    ///   the denominator is zero.
    /// - [`LoopError::Simulation`] if the effective denominator has degree 0:
    ///   a static gain has no dynamics to realize.
    pub fn from_transfer_function(tf: &TransferFunction) -> Result<Self, LoopError> {
        let den = tf.denominator().trimmed();
        let num = tf.numerator().trimmed();

        if den.is_empty() {
            return Err(LoopError::InvalidSystem(
                "denominator polynomial is zero".into(),
            ));
        }
        if num.len() > den.len() {
            return Err(LoopError::InvalidSystem(format!(
                "improper transfer function: numerator degree {} exceeds denominator degree {}",
                num.len() - 1,
                den.len() - 1
            )));
        }

        let order = den.len() - 1;
        if order == 0 {
            return Err(LoopError::Simulation(
                "denominator has degree 0: the system has no dynamics".into(),
            ));
        }

        // Normalize so the monic denominator is [1, a_{n-1}, ..., a_0]
        let lead = den[0];
        let den_n: Vec<f64> = den.iter().map(|&x| x / lead).collect();
        let mut num_n = vec![0.0; den.len() - num.len()];
        num_n.extend(num.iter().map(|&x| x / lead));

        // Feedthrough exists only in the biproper case
        let d = num_n[0];

        let mut a = DMatrix::zeros(order, order);
        let mut b = DVector::zeros(order);
        let mut c = DVector::zeros(order);

        for j in 0..order {
            a[(0, j)] = -den_n[j + 1];
        }
        for i in 0..order - 1 {
            a[(i + 1, i)] = 1.0;
        }
        b[0] = 1.0;
        // Strictly proper part: subtract d*A(s) from the padded numerator
        for i in 0..order {
            c[i] = num_n[i + 1] - d * den_n[i + 1];
        }

        Ok(Self { a, b, c, d })
    }

    /// Number of states
    pub fn order(&self) -> usize {
        self.a.nrows()
    }

    /// State matrix A
    pub fn a_matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Input vector B
    pub fn b_vector(&self) -> &DVector<f64> {
        &self.b
    }

    /// Output vector C
    pub fn c_vector(&self) -> &DVector<f64> {
        &self.c
    }

    /// Direct feedthrough D
    pub fn feedthrough(&self) -> f64 {
        self.d
    }

    /// True if the output depends directly on the input (D != 0)
    pub fn has_feedthrough(&self) -> bool {
        self.d != 0.0
    }

    /// State derivative dx/dt = Ax + Bu
    pub fn derivative(&self, state: &DVector<f64>, input: f64) -> DVector<f64> {
        &self.a * state + &self.b * input
    }

    /// Output y = Cx + Du
    pub fn output(&self, state: &DVector<f64>, input: f64) -> f64 {
        self.c.dot(state) + self.d * input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn realize(num: &[f64], den: &[f64]) -> StateSpace {
        let tf = TransferFunction::from_coeffs(num, den).unwrap();
        StateSpace::from_transfer_function(&tf).unwrap()
    }

    #[test]
    fn test_first_order() {
        // H(s) = 1/(s+1): A = [-1], B = [1], C = [1], D = 0
        let ss = realize(&[1.0], &[1.0, 1.0]);
        assert_eq!(ss.order(), 1);
        assert_eq!(ss.a_matrix()[(0, 0)], -1.0);
        assert_eq!(ss.b_vector()[0], 1.0);
        assert_eq!(ss.c_vector()[0], 1.0);
        assert!(!ss.has_feedthrough());
    }

    #[test]
    fn test_second_order() {
        // H(s) = 1/(s^2 + 2s + 1)
        let ss = realize(&[1.0], &[1.0, 2.0, 1.0]);
        assert_eq!(ss.a_matrix()[(0, 0)], -2.0);
        assert_eq!(ss.a_matrix()[(0, 1)], -1.0);
        assert_eq!(ss.a_matrix()[(1, 0)], 1.0);
        assert_eq!(ss.a_matrix()[(1, 1)], 0.0);
        assert_eq!(ss.b_vector()[0], 1.0);
        assert_eq!(ss.b_vector()[1], 0.0);
        assert_eq!(ss.c_vector()[0], 0.0);
        assert_eq!(ss.c_vector()[1], 1.0);
        assert_eq!(ss.feedthrough(), 0.0);
    }

    #[test]
    fn test_biproper_feedthrough() {
        // H(s) = (s+1)/(s+2) = 1 - 1/(s+2): D = 1, C = [-1]
        let ss = realize(&[1.0, 1.0], &[1.0, 2.0]);
        assert!(ss.has_feedthrough());
        assert_eq!(ss.feedthrough(), 1.0);
        assert_eq!(ss.a_matrix()[(0, 0)], -2.0);
        assert_eq!(ss.c_vector()[0], -1.0);
    }

    #[test]
    fn test_normalization() {
        // H(s) = 2/(2s+2) = 1/(s+1)
        let ss = realize(&[2.0], &[2.0, 2.0]);
        assert_relative_eq!(ss.a_matrix()[(0, 0)], -1.0);
        assert_relative_eq!(ss.c_vector()[0], 1.0);
    }

    #[test]
    fn test_leading_zeros_trimmed() {
        // [0, 1, 1] is effectively s + 1
        let ss = realize(&[0.0, 1.0], &[0.0, 1.0, 1.0]);
        assert_eq!(ss.order(), 1);
        assert_eq!(ss.a_matrix()[(0, 0)], -1.0);
    }

    #[test]
    fn test_zero_numerator() {
        // 0/(s+1): C and D vanish, output is identically zero
        let ss = realize(&[0.0, 0.0], &[1.0, 1.0]);
        assert_eq!(ss.c_vector()[0], 0.0);
        assert_eq!(ss.feedthrough(), 0.0);
    }

    #[test]
    fn test_improper_rejected() {
        let tf = TransferFunction::from_coeffs(&[1.0, 2.0, 3.0], &[1.0, 1.0]).unwrap();
        let err = StateSpace::from_transfer_function(&tf).unwrap_err();
        assert!(matches!(err, LoopError::InvalidSystem(_)));
    }

    #[test]
    fn test_static_gain_rejected() {
        let tf = TransferFunction::from_coeffs(&[1.0], &[2.0]).unwrap();
        let err = StateSpace::from_transfer_function(&tf).unwrap_err();
        assert!(matches!(err, LoopError::Simulation(_)));
    }

    #[test]
    fn test_derivative_and_output() {
        // 1/(s+1) at x = [0.5], u = 1: dx = -0.5 + 1 = 0.5, y = 0.5
        let ss = realize(&[1.0], &[1.0, 1.0]);
        let x = DVector::from_vec(vec![0.5]);
        assert_relative_eq!(ss.derivative(&x, 1.0)[0], 0.5);
        assert_relative_eq!(ss.output(&x, 1.0), 0.5);
    }
}
