//! The one error condition allowed to cross the public API boundary.
use thiserror::Error;

use crate::dispatcher::Variant;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("unrecognized algorithm configuration: {0:?}")]
    InvalidConfiguration(Variant),
}
