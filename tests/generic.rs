use prior::{Prior, Rv};
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_distr::Exp;
use rand_pcg::Pcg32;
use statrs::distribution::Continuous;

// An exponential prior supplied from outside the crate.
struct Exponential {
    rate: f64,
    dist: Exp<f64>,
}

impl Exponential {
    fn new(rate: f64) -> Self {
        Self {
            rate,
            dist: Exp::new(rate).unwrap(),
        }
    }
}

impl Continuous<f64, f64> for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.rate * (-self.rate * x).exp()
        }
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            self.rate.ln() - self.rate * x
        }
    }
}

impl Distribution<f64> for Exponential {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

#[test]
fn external_density_is_used_as_is() {
    let x = Prior::new(Rv::generic(Exponential::new(2.0)));
    assert_eq!(x.pdf(-1.0), 0.0);
    assert_eq!(x.pdf(0.0), 2.0);
    assert_eq!(x.pdf(0.5), 2.0 * (-1.0f64).exp());
    assert_eq!(x.ln_pdf(0.5), 2.0f64.ln() - 1.0);
}

#[test]
fn external_sampling_sees_the_seeded_generator() {
    let x = Prior::new(Rv::generic(Exponential::new(2.0)));
    let want = Exp::new(2.0)
        .unwrap()
        .sample(&mut Pcg32::seed_from_u64(10));
    assert_eq!(x.sample(Some(10)).unwrap(), want);
}

#[test]
fn external_sample_mean() {
    let x = Prior::new(Rv::generic(Exponential::new(4.0)));
    let n = 20_000;
    let mean = x.sample_n(n, Some(3)).unwrap().iter().sum::<f64>() / n as f64;
    assert!((mean - 0.25).abs() < 0.01, "{} is not close to 0.25", mean);
}
