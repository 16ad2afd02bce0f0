use std::result::Result as StdResult;

use thiserror::Error;

/// Geometry error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// An input did not match any shape accepted by the target type.
    #[error("invalid argument sent to {target}({input})")]
    InvalidArgument {
        /// Name of the type being constructed.
        target: &'static str,
        /// Printable form of the rejected input.
        input: String,
    },
}

impl Error {
    /// Build an `InvalidArgument` error, logging the rejection.
    pub(crate) fn invalid(target: &'static str, input: impl ToString) -> Self {
        let input = input.to_string();
        tracing::debug!("rejected {} input: {}", target, input);
        Self::InvalidArgument { target, input }
    }
}

/// Result type for geometry construction.
pub type Result<T> = StdResult<T, Error>;
