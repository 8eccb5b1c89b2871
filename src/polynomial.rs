//! Real polynomials in the Laplace variable s
//!
//! Coefficients are stored in **descending powers**: `[a_n, ..., a_1, a_0]`
//! represents `a_n*s^n + ... + a_1*s + a_0`. A leading coefficient may be
//! zero, in which case the polynomial simply has a lower effective degree;
//! no canonicalization is performed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Polynomial with real coefficients, highest power first
///
/// The coefficient sequence is never empty: the zero polynomial is `[0]`.
///
/// # Example
///
/// ```rust
/// use pidtune::Polynomial;
///
/// // (s + 1)(s + 2) = s^2 + 3s + 2
/// let p = Polynomial::new(vec![1.0, 1.0]);
/// let q = Polynomial::new(vec![1.0, 2.0]);
/// assert_eq!(p.mul(&q).coeffs(), &[1.0, 3.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients in descending powers
    ///
    /// An empty coefficient list is treated as the zero polynomial `[0]`.
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    /// The zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    /// Coefficients in descending powers
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Nominal degree: `len - 1`, counting leading zeros
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// True if every coefficient is exactly zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Coefficients with leading zeros removed; empty for the zero polynomial
    pub(crate) fn trimmed(&self) -> &[f64] {
        match self.coeffs.iter().position(|&c| c != 0.0) {
            Some(first) => &self.coeffs[first..],
            None => &[],
        }
    }

    /// Polynomial product by full convolution of the coefficient sequences
    ///
    /// The result has length `len(a) + len(b) - 1`. Commutative and
    /// associative up to floating-point rounding; accepts any real input.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut out = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial { coeffs: out }
    }

    /// Sum of two polynomials, aligned by power rather than by index
    ///
    /// The shorter coefficient sequence is left-padded with zeros so both
    /// sequences end at power zero before adding elementwise. Naive
    /// elementwise addition would silently miscompute sums of polynomials of
    /// different degrees: `[1] + [1, 0]` is `s + 1`, not `2`.
    pub fn add_aligned(&self, other: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut out = vec![0.0; n];
        for (i, &c) in self.coeffs.iter().enumerate() {
            out[n - self.coeffs.len() + i] += c;
        }
        for (i, &c) in other.coeffs.iter().enumerate() {
            out[n - other.coeffs.len() + i] += c;
        }
        Polynomial { coeffs: out }
    }
}

/// Compact coefficient rendering: two decimals with trailing zeros removed
fn fmt_coeff(c: f64) -> String {
    let s = format!("{:.2}", c.abs());
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for Polynomial {
    /// Renders e.g. `[1.0, 0.5, 2.0]` as `1s^2 + 0.5s + 2`, skipping zero
    /// terms; the zero polynomial renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.coeffs.len() - 1;
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let power = top - i;
            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
                first = false;
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            match power {
                0 => write!(f, "{}", fmt_coeff(c))?,
                1 => write!(f, "{}s", fmt_coeff(c))?,
                _ => write!(f, "{}s^{}", fmt_coeff(c), power)?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
