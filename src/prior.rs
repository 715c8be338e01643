use crate::error::Result;
use crate::rv::Rv;
use crate::{LinearExp, UniformBounded};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use statrs::distribution::Normal;
use std::fmt;

/// A prior distribution over a single model parameter.
///
/// A `Prior` owns exactly one [`Rv`] and forwards density evaluation and
/// sampling to it. It is immutable once constructed.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use prior::{Prior, UniformBounded};
///
/// let x = Prior::new(UniformBounded::new(1.0e-18, 1.0e-12).unwrap());
/// assert_eq!(x.pdf(-0.5), 0.0);
/// assert_eq!(x.pdf(1.0e-15), 1.0 / (1.0e-12 - 1.0e-18));
///
/// let v = x.sample(Some(10)).unwrap();
/// assert!(x.pdf(v) > 0.0);
/// ```
#[derive(Debug)]
pub struct Prior {
    rv: Rv,
}

impl Prior {
    /// Create a prior from any random variable which converts into an [`Rv`].
    pub fn new<T: Into<Rv>>(rv: T) -> Self {
        let rv = rv.into();
        debug!("prior over {}", rv);
        Self { rv }
    }

    /// A normalized uniform prior on `[lower, upper]`.
    pub fn uniform(lower: f64, upper: f64) -> Result<Self> {
        Ok(Self::new(UniformBounded::new(lower, upper)?))
    }

    /// A normal prior with mean `mu` and standard deviation `sigma`.
    pub fn normal(mu: f64, sigma: f64) -> Result<Self> {
        Ok(Self::new(Rv::generic(Normal::new(mu, sigma)?)))
    }

    /// A prior with density proportional to `10^x` on `[lower, upper]`.
    pub fn linear_exp(lower: f64, upper: f64) -> Result<Self> {
        Ok(Self::new(LinearExp::new(lower, upper)?))
    }

    /// The random variable underlying this prior.
    pub fn rv(&self) -> &Rv {
        &self.rv
    }

    /// Probability density at `x`. Points outside the support yield `0.0`.
    pub fn pdf(&self, x: f64) -> f64 {
        self.rv.pdf(x)
    }

    /// Natural logarithm of the density at `x`. Points outside the support
    /// yield negative infinity.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        self.rv.ln_pdf(x)
    }

    /// Draw a single value from the prior.
    ///
    /// If `random_state` is given, the value is drawn from a [`Pcg32`] seeded
    /// with it, so the result equals what the underlying distribution yields
    /// for `Pcg32::seed_from_u64(random_state)`. Otherwise the thread local
    /// generator is used.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnboundedSupport`](crate::Error::UnboundedSupport)
    /// if the prior is a flat density with an infinite bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use prior::Prior;
    /// use rand::distributions::Distribution;
    /// use rand::SeedableRng;
    /// use rand_pcg::Pcg32;
    /// use statrs::distribution::Normal;
    ///
    /// let x = Prior::normal(0.0, 1.0).unwrap();
    /// let want = Normal::new(0.0, 1.0).unwrap().sample(&mut Pcg32::seed_from_u64(10));
    /// assert_eq!(x.sample(Some(10)).unwrap(), want);
    /// ```
    pub fn sample(&self, random_state: Option<u64>) -> Result<f64> {
        match random_state {
            Some(seed) => {
                trace!("sampling {} with seed {}", self.rv, seed);
                self.sample_with(&mut Pcg32::seed_from_u64(seed))
            }
            None => self.sample_with(&mut rand::thread_rng()),
        }
    }

    /// Same as [sample](Prior::sample), but generic over the random number
    /// generator used to produce the value.
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> Result<f64> {
        self.rv.sample(rng)
    }

    /// Draw `size` values from a single generator, seeded once with
    /// `random_state` if given.
    pub fn sample_n(&self, size: usize, random_state: Option<u64>) -> Result<Vec<f64>> {
        match random_state {
            Some(seed) => {
                let mut rng = Pcg32::seed_from_u64(seed);
                (0..size).map(|_| self.sample_with(&mut rng)).collect()
            }
            None => {
                let mut rng = rand::thread_rng();
                (0..size).map(|_| self.sample_with(&mut rng)).collect()
            }
        }
    }
}

impl fmt::Display for Prior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prior({})", self.rv)
    }
}
