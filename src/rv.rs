use crate::error::Result;
use crate::{GaussianBounded, LinearExp, UniformBounded, UniformUnnormed};
use rand::distributions::Distribution;
use rand::{Rng, RngCore};
use statrs::distribution::Continuous;
use std::fmt;

/// An object safe view of an externally supplied continuous distribution.
///
/// This trait is implemented for every type which provides a density through
/// [`statrs::distribution::Continuous`] and samples through
/// [`rand::distributions::Distribution`], such as [`statrs::distribution::Normal`].
/// It allows such distributions to be held by [`Rv::Generic`].
pub trait ContinuousRv {
    /// Probability density at `x`.
    fn density(&self, x: f64) -> f64;

    /// Natural logarithm of the probability density at `x`.
    fn ln_density(&self, x: f64) -> f64;

    /// Draw a single value using `rng`.
    fn draw(&self, rng: &mut dyn RngCore) -> f64;
}

impl<D> ContinuousRv for D
where
    D: Continuous<f64, f64> + Distribution<f64>,
{
    fn density(&self, x: f64) -> f64 {
        self.pdf(x)
    }

    fn ln_density(&self, x: f64) -> f64 {
        self.ln_pdf(x)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        Distribution::sample(self, rng)
    }
}

/// The random variable held by a [`Prior`](crate::Prior).
pub enum Rv {
    /// See [`UniformUnnormed`].
    UniformUnnormed(UniformUnnormed),
    /// See [`UniformBounded`].
    UniformBounded(UniformBounded),
    /// See [`GaussianBounded`].
    GaussianBounded(GaussianBounded),
    /// See [`LinearExp`].
    LinearExp(LinearExp),
    /// Any other continuous distribution, used as is.
    Generic(Box<dyn ContinuousRv + Send + Sync>),
}

impl Rv {
    /// Wrap an externally supplied distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use prior::{Prior, Rv};
    /// use statrs::distribution::Normal;
    ///
    /// let x = Prior::new(Rv::generic(Normal::new(0.0, 1.0).unwrap()));
    /// assert!(x.pdf(0.0) > x.pdf(1.0));
    /// ```
    pub fn generic<D>(dist: D) -> Self
    where
        D: 'static + ContinuousRv + Send + Sync,
    {
        Rv::Generic(Box::new(dist))
    }

    /// Probability density at `x`. Points outside the support have density zero.
    pub fn pdf(&self, x: f64) -> f64 {
        match self {
            Rv::UniformUnnormed(rv) => rv.pdf(x),
            Rv::UniformBounded(rv) => rv.pdf(x),
            Rv::GaussianBounded(rv) => rv.pdf(x),
            Rv::LinearExp(rv) => rv.pdf(x),
            Rv::Generic(rv) => rv.density(x),
        }
    }

    /// Natural logarithm of the density at `x`.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        match self {
            Rv::UniformUnnormed(rv) => rv.ln_pdf(x),
            Rv::UniformBounded(rv) => rv.ln_pdf(x),
            Rv::GaussianBounded(rv) => rv.ln_pdf(x),
            Rv::LinearExp(rv) => rv.ln_pdf(x),
            Rv::Generic(rv) => rv.ln_density(x),
        }
    }

    /// Draw a single value using `rng`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<f64> {
        let value = match self {
            Rv::UniformUnnormed(rv) => rv.try_sample(rng)?,
            Rv::UniformBounded(rv) => rv.sample(rng),
            Rv::GaussianBounded(rv) => rv.sample(rng),
            Rv::LinearExp(rv) => rv.sample(rng),
            Rv::Generic(rv) => rv.draw(rng),
        };
        Ok(value)
    }
}

impl From<UniformUnnormed> for Rv {
    fn from(rv: UniformUnnormed) -> Self {
        Rv::UniformUnnormed(rv)
    }
}

impl From<UniformBounded> for Rv {
    fn from(rv: UniformBounded) -> Self {
        Rv::UniformBounded(rv)
    }
}

impl From<GaussianBounded> for Rv {
    fn from(rv: GaussianBounded) -> Self {
        Rv::GaussianBounded(rv)
    }
}

impl From<LinearExp> for Rv {
    fn from(rv: LinearExp) -> Self {
        Rv::LinearExp(rv)
    }
}

impl fmt::Debug for Rv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rv::UniformUnnormed(rv) => f.debug_tuple("UniformUnnormed").field(rv).finish(),
            Rv::UniformBounded(rv) => f.debug_tuple("UniformBounded").field(rv).finish(),
            Rv::GaussianBounded(rv) => f.debug_tuple("GaussianBounded").field(rv).finish(),
            Rv::LinearExp(rv) => f.debug_tuple("LinearExp").field(rv).finish(),
            Rv::Generic(_) => f.write_str("Generic(..)"),
        }
    }
}

impl fmt::Display for Rv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rv::UniformUnnormed(rv) => fmt::Display::fmt(rv, f),
            Rv::UniformBounded(rv) => fmt::Display::fmt(rv, f),
            Rv::GaussianBounded(rv) => fmt::Display::fmt(rv, f),
            Rv::LinearExp(rv) => fmt::Display::fmt(rv, f),
            Rv::Generic(_) => f.write_str("Generic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use statrs::distribution::Normal;

    #[test]
    fn generic_forwards_to_wrapped_distribution() {
        let normal = Normal::new(2.0, 0.5).unwrap();
        let rv = Rv::generic(normal);
        for x in &[0.0, 2.0, 3.1] {
            assert_eq!(rv.pdf(*x), normal.pdf(*x));
            assert_eq!(rv.ln_pdf(*x), normal.ln_pdf(*x));
            assert_eq!(normal.density(*x), normal.pdf(*x));
        }

        let want = normal.sample(&mut Pcg32::seed_from_u64(7));
        let have = rv.sample(&mut Pcg32::seed_from_u64(7)).unwrap();
        assert_eq!(have, want);
    }

    #[test]
    fn variants_sample_through_the_same_generator() {
        let bounded = UniformBounded::new(0.0, 1.0).unwrap();
        let want = bounded.sample(&mut Pcg32::seed_from_u64(3));
        let have = Rv::from(bounded)
            .sample(&mut Pcg32::seed_from_u64(3))
            .unwrap();
        assert_eq!(have, want);
    }

    #[test]
    fn unbounded_flat_sampling_fails() {
        let rv = Rv::from(UniformUnnormed::default());
        let mut rng = Pcg32::seed_from_u64(0);
        assert!(rv.sample(&mut rng).is_err());
    }

    #[test]
    fn display_names_the_variant() {
        let rv = Rv::from(LinearExp::new(-18.0, -12.0).unwrap());
        assert_eq!(rv.to_string(), "LinearExp(lower=-18, upper=-12)");
        let rv = Rv::generic(Normal::new(0.0, 1.0).unwrap());
        assert_eq!(rv.to_string(), "Generic");
        assert_eq!(format!("{:?}", rv), "Generic(..)");
    }
}
