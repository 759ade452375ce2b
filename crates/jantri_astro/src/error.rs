//! Error types for astronomical searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from iterative astronomical computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for AstroError {}
