//! Precondition violations.
//!
//! Only malformed inputs are errors. A failed hypothesis is a result, see
//! `sweep::Verdict` and `sweep::HypothesisViolation`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{n} is not prime")]
    NotPrime { n: i64 },

    #[error("{a} has no inverse modulo {p}")]
    NotInvertible { a: i64, p: i64 },

    #[error("triangle vertices are not counterclockwise (doubled area {doubled_area})")]
    NotCounterClockwise { doubled_area: i64 },

    #[error("triangle has no vertex {index}")]
    VertexIndex { index: usize },
}

pub type Result<T> = std::result::Result<T, InputError>;
