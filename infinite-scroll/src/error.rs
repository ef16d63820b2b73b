use thiserror::Error;

/// Errors reported while configuring an [`crate::InfiniteScroll`].
///
/// Every variant is a setup-time rejection. Once a list is built, layout passes never fail.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    #[error("cell metric `{name}` is not finite: {value}")]
    NonFiniteMetric { name: &'static str, value: f64 },

    #[error("cell extent must be positive, got {0}")]
    NonPositiveCellExtent(f64),

    #[error("cell padding must not be negative, got {0}")]
    NegativePadding(f64),

    #[error("cell stride (extent + padding) must be positive, got {0}")]
    NonPositiveStride(f64),

    #[error("viewport value `{name}` must be finite and non-negative, got {value}")]
    InvalidViewport { name: &'static str, value: f64 },
}

pub type Result<T, E = ConfigError> = core::result::Result<T, E>;
