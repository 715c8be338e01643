/// Errors raised when constructing or sampling a prior.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when the bounds are misordered, NaN, infinite where a finite
    /// interval is required, or span a width that overflows.
    #[error(
        "invalid bounds [{lower}, {upper}]: lower must not exceed upper, and bounds \
         must be finite with a finite width where the distribution is normalized"
    )]
    InvalidBounds {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when a Gaussian scale is not finite and positive.
    #[error("invalid scale: {0} must be finite and positive")]
    InvalidScale(f64),

    /// Returned when the truncation interval holds no probability mass.
    #[error("truncation interval [{lower}, {upper}] carries no probability mass")]
    ZeroMass {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when sampling a distribution whose support is unbounded.
    #[error("cannot sample from a flat distribution with unbounded support")]
    UnboundedSupport,

    /// Returned when a non-finite Gaussian `loc` is given, or when an external
    /// distribution rejects its parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<statrs::StatsError> for Error {
    fn from(err: statrs::StatsError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

/// A specialized `Result` type for prior construction and sampling.
pub type Result<T> = std::result::Result<T, Error>;
