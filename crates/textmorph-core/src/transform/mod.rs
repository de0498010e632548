//! Transform contract and strategy catalog
//!
//! Every strategy implements [`Transform`]: a validation predicate and a
//! transform function. Callers never invoke `transform` directly; they go
//! through [`apply`], which validates first, then transforms, and wraps any
//! failure into the crate [`Error`](crate::Error).
//!
//! # Module Organization
//!
//! - [`catalog`] - the [`TransformKind`] enumeration and the strategy factory
//! - [`numeral`] - binary, octal and hexadecimal digit encoders
//! - [`encoding`] - byte and character escape encoders
//! - [`script`] - table-driven script substitutions and reversal
//! - [`random`] - randomized insertion and nested transforms
//! - [`acrostic`] - the LLM-driven acrostic poem strategy
//!
//! # Example
//!
//! ```
//! use textmorph_core::transform::{apply, numeral::BinaryEncode};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let output = apply(&BinaryEncode, "123", &mut rng).unwrap();
//! assert_eq!(output, "0001 0010 0011");
//! ```

pub mod acrostic;
pub mod catalog;
pub mod encoding;
pub mod numeral;
pub mod random;
pub mod script;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result, TransformError};
use rand::RngCore;
use tracing::{debug, instrument};

pub use catalog::{build_transform, TransformFamily, TransformKind};

/// Result of a strategy's transform step
pub type TransformResult<T> = std::result::Result<T, TransformError>;

/// A single transformation strategy
///
/// Implementations hold no mutable state between invocations. Randomized
/// strategies draw only from the `rng` they are given.
pub trait Transform: Send + Sync {
    /// Stable kebab-case name of the strategy
    fn name(&self) -> &'static str;

    /// Whether this strategy accepts `input`
    fn validate(&self, input: &str) -> bool;

    /// Produce the alternate representation of `input`
    fn transform(&self, input: &str, rng: &mut dyn RngCore) -> TransformResult<String>;
}

/// Validate, transform and wrap errors
///
/// Fails with [`Error::InvalidInput`] when validation rejects the input and
/// with [`Error::TransformationFailure`] when the transform step fails. Never
/// returns partial output.
#[instrument(skip_all, fields(strategy = strategy.name(), input_chars = input.chars().count()))]
pub fn apply(strategy: &dyn Transform, input: &str, rng: &mut dyn RngCore) -> Result<String> {
    if !strategy.validate(input) {
        debug!("input rejected by validation");
        return Err(Error::invalid_input(strategy.name()));
    }

    strategy
        .transform(input, rng)
        .map_err(|e| Error::transformation(strategy.name(), e))
}

/// [`apply`] using the thread-local random generator
pub fn apply_with_thread_rng(strategy: &dyn Transform, input: &str) -> Result<String> {
    apply(strategy, input, &mut rand::thread_rng())
}
