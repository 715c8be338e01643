use crate::error::{Error, Result};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use statrs::distribution::Continuous;
use std::fmt;

/// A flat density which is not normalized.
///
/// The density is `1.0` everywhere on the closed interval `[lower, upper]` and
/// `0.0` outside of it. Either bound may be infinite, in which case the
/// distribution is improper. This is typically used to restrict a parameter
/// to a half line, e.g. to ensure that an amplitude is non-negative.
///
/// # Examples
///
/// ```
/// use prior::UniformUnnormed;
/// use statrs::distribution::Continuous;
///
/// let positive = UniformUnnormed::lower_bounded(0.0).unwrap();
/// assert_eq!(positive.pdf(-0.5), 0.0);
/// assert_eq!(positive.pdf(1e12), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformUnnormed {
    lower: f64,
    upper: f64,
}

impl UniformUnnormed {
    /// Create a flat density on `[lower, upper]`.
    ///
    /// Returns [`Error::InvalidBounds`] if `lower > upper` or either bound is NaN.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(lower <= upper) {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Create a flat density on `[lower, +inf]`.
    pub fn lower_bounded(lower: f64) -> Result<Self> {
        Self::new(lower, f64::INFINITY)
    }

    /// Lower bound of the support.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the support.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Draw uniformly from the support, which is only possible if both bounds
    /// are finite.
    ///
    /// Returns [`Error::UnboundedSupport`] otherwise, including when the
    /// width `upper - lower` overflows.
    pub fn try_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        if !(self.upper - self.lower).is_finite() {
            return Err(Error::UnboundedSupport);
        }
        Ok(Uniform::new_inclusive(self.lower, self.upper).sample(rng))
    }
}

impl Default for UniformUnnormed {
    fn default() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }
}

impl Continuous<f64, f64> for UniformUnnormed {
    fn pdf(&self, x: f64) -> f64 {
        if x >= self.lower && x <= self.upper {
            1.0
        } else {
            0.0
        }
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x >= self.lower && x <= self.upper {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl fmt::Display for UniformUnnormed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniformUnnormed(lower={}, upper={})", self.lower, self.upper)
    }
}

/// A normalized uniform distribution on the finite interval `[lower, upper]`.
///
/// # Examples
///
/// ```
/// use prior::UniformBounded;
/// use statrs::distribution::Continuous;
///
/// let x = UniformBounded::new(1.0e-18, 1.0e-12).unwrap();
/// assert_eq!(x.pdf(1.0e-15), 1.0 / (1.0e-12 - 1.0e-18));
/// assert_eq!(x.pdf(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformBounded {
    lower: f64,
    upper: f64,
}

impl UniformBounded {
    /// Create a uniform distribution on `[lower, upper]`.
    ///
    /// Returns [`Error::InvalidBounds`] unless `lower < upper` and the width
    /// `upper - lower` is finite.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(lower < upper) || !(upper - lower).is_finite() {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
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
            (x - self.lower) / (self.upper - self.lower)
        }
    }
}

impl Continuous<f64, f64> for UniformBounded {
    fn pdf(&self, x: f64) -> f64 {
        if x >= self.lower && x <= self.upper {
            1.0 / (self.upper - self.lower)
        } else {
            0.0
        }
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x >= self.lower && x <= self.upper {
            -(self.upper - self.lower).ln()
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl Distribution<f64> for UniformBounded {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Uniform::new_inclusive(self.lower, self.upper).sample(rng)
    }
}

impl fmt::Display for UniformBounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniformBounded(lower={}, upper={})", self.lower, self.upper)
    }
}
