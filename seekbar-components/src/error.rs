//! Configuration errors.

use thiserror::Error;

/// A seek bar configuration that cannot be laid out.
///
/// Returned by the widget constructors and by `update_args`; the widget keeps
/// its previous configuration when an update is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A size, padding or text size is negative or not a number.
    #[error("`{name}` must be a non-negative dimension, got {value}dp")]
    NegativeDimension {
        /// The offending field.
        name: &'static str,
        /// The rejected value, in dp.
        value: f64,
    },
    /// A thumb asset has no visible extent.
    #[error("thumb asset `{name}` has an empty intrinsic size")]
    EmptyThumb {
        /// Name of the rejected asset.
        name: String,
    },
}
