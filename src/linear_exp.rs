use crate::error::{Error, Result};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Continuous;
use std::f64::consts::LN_10;
use std::fmt;

/// A density proportional to `10^x` on `[lower, upper]`.
///
/// This is the prior to use for the base ten logarithm of a parameter that
/// should be uniform in linear space, such as a signal amplitude spanning
/// many decades. The normalized density is
/// `ln(10) * 10^x / (10^upper - 10^lower)`.
///
/// # Examples
///
/// ```
/// use prior::LinearExp;
/// use statrs::distribution::Continuous;
///
/// let log10_amp = LinearExp::new(-18.0, -12.0).unwrap();
/// assert!(log10_amp.pdf(-12.5) > log10_amp.pdf(-13.0));
/// assert_eq!(log10_amp.pdf(-11.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearExp {
    lower: f64,
    upper: f64,
    width: f64,
}

impl LinearExp {
    /// Create a linear-exponential distribution on `[lower, upper]`.
    ///
    /// Returns [`Error::InvalidBounds`] unless both bounds are finite and
    /// `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || !(lower < upper) {
            return Err(Error::InvalidBounds { lower, upper });
        }
        let width = 10f64.powf(upper) - 10f64.powf(lower);
        if !(width > 0.0) || !width.is_finite() {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            width,
        })
    }

    /// Lower bound of the support.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the support.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.lower {
            0.0
        } else if x >= self.upper {
            1.0
        } else {
            (10f64.powf(x) - 10f64.powf(self.lower)) / self.width
        }
    }
}

impl Continuous<f64, f64> for LinearExp {
    fn pdf(&self, x: f64) -> f64 {
        if x >= self.lower && x <= self.upper {
            LN_10 * 10f64.powf(x) / self.width
        } else {
            0.0
        }
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x >= self.lower && x <= self.upper {
            LN_10.ln() + x * LN_10 - self.width.ln()
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl Distribution<f64> for LinearExp {
    // Inverse cdf of a uniform draw.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        let x = (10f64.powf(self.lower) + u * self.width).log10();
        x.max(self.lower).min(self.upper)
    }
}

impl fmt::Display for LinearExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearExp(lower={}, upper={})", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_pcg::Pcg32;

    #[test]
    fn density_is_proportional_to_power_of_ten() {
        let x = LinearExp::new(-18.0, -12.0).unwrap();
        let ratio = x.pdf(-13.0) / x.pdf(-14.0);
        assert!((ratio - 10.0).abs() < 1e-9, "{}", ratio);
        assert_eq!(x.pdf(-18.5), 0.0);
        assert_eq!(x.pdf(-11.5), 0.0);
        assert_eq!(x.pdf(f64::NAN), 0.0);
    }

    #[test]
    fn log_density_agrees_with_density() {
        let x = LinearExp::new(-2.0, 3.0).unwrap();
        for v in &[-2.0, -0.5, 1.0, 3.0] {
            let want = x.pdf(*v).ln();
            assert!((x.ln_pdf(*v) - want).abs() < 1e-12, "{} at {}", want, v);
        }
        assert_eq!(x.ln_pdf(4.0), f64::NEG_INFINITY);
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(LinearExp::new(-12.0, -18.0).is_err());
        assert!(LinearExp::new(-12.0, -12.0).is_err());
        assert!(LinearExp::new(f64::NEG_INFINITY, -12.0).is_err());
        assert!(LinearExp::new(0.0, 400.0).is_err());
    }

    #[test]
    fn cdf_spans_unit_interval() {
        let x = LinearExp::new(0.0, 1.0).unwrap();
        assert_eq!(x.cdf(-1.0), 0.0);
        assert_eq!(x.cdf(2.0), 1.0);
        let half = x.cdf(5.5f64.log10());
        assert!((half - 0.5).abs() < 1e-12, "{}", half);
    }

    #[test]
    fn samples_follow_the_cdf() {
        let x = LinearExp::new(-18.0, -12.0).unwrap();
        let mut rng = Pcg32::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7);
        let n = 10_000;
        let mut above = 0;
        for _ in 0..n {
            let v = x.sample(&mut rng);
            assert!(v >= -18.0 && v <= -12.0);
            if v > -12.5 {
                above += 1;
            }
        }
        // Most of the mass sits in the top half decade.
        let want = 1.0 - x.cdf(-12.5);
        let have = above as f64 / n as f64;
        assert!((have - want).abs() < 0.02, "{} vs {}", have, want);
    }
}
