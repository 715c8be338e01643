#![warn(missing_docs)]

//! Prior distributions for Bayesian parameter inference.
//!
//! A [`Prior`] wraps a single continuous random variable and exposes its
//! probability density and a (optionally seeded) sampling operation. Besides
//! any external distribution implementing [`statrs::distribution::Continuous`]
//! and [`rand::distributions::Distribution`], the crate provides the bounded and
//! unnormalized distributions commonly needed when modelling signals in pulsar
//! timing data:
//!
//! - [`UniformUnnormed`]: a flat, possibly improper density,
//! - [`UniformBounded`]: a normalized uniform distribution,
//! - [`GaussianBounded`]: a normal distribution truncated to an interval,
//! - [`LinearExp`]: a density proportional to `10^x`.
//!
//! ```
//! use prior::{GaussianBounded, LinearExp, Prior, UniformUnnormed};
//!
//! // An amplitude which must be non-negative
//! let amp = Prior::new(UniformUnnormed::lower_bounded(0.0).unwrap());
//! assert_eq!(amp.pdf(-0.5), 0.0);
//! assert_eq!(amp.pdf(0.5), 1.0);
//!
//! // A fraction which is probably close to 0.9
//! let frac = Prior::new(GaussianBounded::new(0.9, 0.1, 0.0, 1.0).unwrap());
//! assert_eq!(frac.pdf(1.1), 0.0);
//!
//! // The log10 of an amplitude which is uniform in linear space
//! let log10_amp = Prior::new(LinearExp::new(-18.0, -12.0).unwrap());
//! let draw = log10_amp.sample(Some(10)).unwrap();
//! assert!(draw >= -18.0 && draw <= -12.0);
//! ```
//!
//! Densities are pure functions of their input, so a prior can be queried
//! from many threads at once. Sampling with a seed always uses a
//! [`rand_pcg::Pcg32`] generator, making draws reproducible.

mod error;
mod gaussian;
mod linear_exp;
mod prior;
mod rv;
mod uniform;

pub use error::{Error, Result};
pub use gaussian::GaussianBounded;
pub use linear_exp::LinearExp;
pub use prior::Prior;
pub use rv::{ContinuousRv, Rv};
pub use uniform::{UniformBounded, UniformUnnormed};
