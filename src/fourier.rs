//! # Flow rate from a truncated complex Fourier series
//!
//! The flow rate is reconstructed as
//! $$
//! Q(t) = \Re \sum_{n=0}^{N-1} \hat{Q}_n e^{i n \omega t}
//! $$
//! where $\hat{Q}_0$ is the mean flow rate and $\omega$ the angular
//! frequency of the first harmonic.
//!
//! The phase $n \omega t$ is not wrapped. Standard trigonometric range
//! reduction handles large arguments, but the phase itself loses absolute
//! precision once $n \omega t$ grows beyond ~1e15.
use crate::error::ConfigError;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::PI;

/// Return the complex sum $\sum_n \hat{Q}_n e^{i n \omega t}$.
///
/// An empty coefficient list sums to zero.
pub fn flow_rate_complex<S>(coefficients: &ArrayBase<S, Ix1>, omega: f64, t: f64) -> Complex<f64>
where
    S: Data<Elem = Complex<f64>>,
{
    coefficients
        .iter()
        .enumerate()
        .fold(Complex::zero(), |acc, (n, c)| {
            acc + c * Complex::cis(n as f64 * omega * t)
        })
}

/// Return the real flow rate at time `t`.
///
/// The imaginary part of the series is discarded, conjugate symmetry of
/// the coefficients is not checked.
///
/// # Example
/// ```
/// use ndarray::array;
/// use num_complex::Complex;
/// use rustinlet::fourier::flow_rate;
/// let q = array![Complex::new(3., 0.), Complex::new(0., 2.)];
/// let omega = 2. * std::f64::consts::PI;
/// assert!((flow_rate(&q, omega, 0.) - 3.).abs() < 1e-12);
/// assert!((flow_rate(&q, omega, 0.25) - 1.).abs() < 1e-12);
/// ```
pub fn flow_rate<S>(coefficients: &ArrayBase<S, Ix1>, omega: f64, t: f64) -> f64
where
    S: Data<Elem = Complex<f64>>,
{
    flow_rate_complex(coefficients, omega, t).re
}

/// Fourier coefficients of a periodic flow rate together
/// with the angular frequency of the first harmonic.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries {
    /// Coefficients, index n is harmonic n
    coefficients: Array1<Complex<f64>>,
    /// Angular frequency of first harmonic
    omega: f64,
}

impl FourierSeries {
    /// Return new series
    ///
    /// # Errors
    /// Empty coefficient list, non-finite coefficients or
    /// non-finite `omega`.
    pub fn new(coefficients: Array1<Complex<f64>>, omega: f64) -> Result<Self, ConfigError> {
        if coefficients.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "Q".to_string(),
                reason: "at least one coefficient is required".to_string(),
            });
        }
        if let Some(n) = coefficients
            .iter()
            .position(|c| !(c.re.is_finite() && c.im.is_finite()))
        {
            return Err(ConfigError::InvalidValue {
                key: "Q".to_string(),
                reason: format!("coefficient {} is not finite", n),
            });
        }
        if !omega.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "omega".to_string(),
                reason: format!("{} is not finite", omega),
            });
        }
        Ok(FourierSeries {
            coefficients,
            omega,
        })
    }

    /// Coefficients
    pub fn coefficients(&self) -> &Array1<Complex<f64>> {
        &self.coefficients
    }

    /// Angular frequency of the first harmonic
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Number of harmonics, including the mean
    pub fn n_harmonics(&self) -> usize {
        self.coefficients.len()
    }

    /// Mean flow rate (real part of harmonic 0)
    pub fn mean(&self) -> f64 {
        self.coefficients[0].re
    }

    /// Period of the first harmonic, `None` if `omega` is zero
    pub fn period(&self) -> Option<f64> {
        if self.omega == 0. {
            None
        } else {
            Some(2. * PI / self.omega.abs())
        }
    }

    /// Real flow rate at time `t`
    pub fn flow_rate(&self, t: f64) -> f64 {
        let q = self.flow_rate_complex(t);
        tracing::trace!("flow rate at t = {}: discarded imaginary part {:e}", t, q.im);
        q.re
    }

    /// Complex flow rate at time `t`
    pub fn flow_rate_complex(&self, t: f64) -> Complex<f64> {
        flow_rate_complex(&self.coefficients, self.omega, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn approx_eq(result: f64, expected: f64) {
        let dif = 1e-10;
        if (result - expected).abs() > dif {
            panic!("Large difference of values, got {} expected {}.", result, expected)
        }
    }

    fn pulse() -> Array1<Complex<f64>> {
        array![
            Complex::new(3., 0.),
            Complex::new(0., 2.),
            Complex::new(2., 4.),
            Complex::new(-0.5, 0.25)
        ]
    }

    #[test]
    fn test_single_coefficient_is_constant() {
        let q = array![Complex::new(1.5, -7.)];
        for t in [0., 0.1, 3.3, -12., 1e4].iter() {
            approx_eq(flow_rate(&q, 7.854, *t), 1.5);
        }
    }

    #[test]
    fn test_zero_omega_is_constant() {
        let q = pulse();
        let expected: f64 = q.iter().map(|c| c.re).sum();
        for t in [0., 0.1, 3.3, -12., 1e4].iter() {
            approx_eq(flow_rate(&q, 0., *t), expected);
        }
    }

    #[test]
    fn test_single_harmonic_is_periodic() {
        let omega = 1.3;
        let n = 2;
        let mut q = Array1::<Complex<f64>>::zeros(n + 1);
        q[0] = Complex::new(0.7, 0.);
        q[n] = Complex::new(0.4, -1.1);
        let period = 2. * PI / (n as f64 * omega);
        for t in [0., 0.123, 1.7, 9.9].iter() {
            approx_eq(flow_rate(&q, omega, *t), flow_rate(&q, omega, *t + period));
        }
    }

    #[test]
    fn test_worked_example() {
        let q = array![Complex::new(3., 0.), Complex::new(0., 2.)];
        let omega = 2. * PI;
        approx_eq(flow_rate(&q, omega, 0.), 3.);
        approx_eq(flow_rate(&q, omega, 0.25), 1.);
        approx_eq(flow_rate(&q, omega, 0.5), 3.);
        approx_eq(flow_rate(&q, omega, 0.75), 5.);
    }

    #[test]
    fn test_empty_coefficients_are_zero() {
        let q = Array1::<Complex<f64>>::zeros(0);
        assert_eq!(flow_rate(&q, 2., 1.), 0.);
    }

    #[test]
    fn test_series_matches_free_function() {
        let series = FourierSeries::new(pulse(), 7.854).unwrap();
        for t in [0., 0.3, 0.8].iter() {
            approx_eq(series.flow_rate(*t), flow_rate(&pulse(), 7.854, *t));
        }
        approx_eq(series.mean(), 3.);
        assert_eq!(series.n_harmonics(), 4);
        approx_eq(series.period().unwrap(), 2. * PI / 7.854);
    }

    #[test]
    fn test_series_rejects_invalid_input() {
        let empty = Array1::<Complex<f64>>::zeros(0);
        assert!(FourierSeries::new(empty, 1.).is_err());
        let nan = array![Complex::new(f64::NAN, 0.)];
        assert!(FourierSeries::new(nan, 1.).is_err());
        assert!(FourierSeries::new(pulse(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_period_of_constant_signal() {
        let series = FourierSeries::new(array![Complex::new(1., 0.)], 0.).unwrap();
        assert!(series.period().is_none());
    }
}
