//! Random generation error types.

use thiserror::Error;

/// Failures reported by the random generation API.
///
/// # Examples
///
/// ```
/// use rsl::RandomError;
///
/// let err = RandomError::ReseedOnSeededThread;
/// assert!(err.to_string().contains("re-seeded"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// An explicit seed was supplied after this thread's generator already
    /// existed.
    #[error("rng cannot be re-seeded on this thread")]
    ReseedOnSeededThread,

    /// Sampling bounds do not describe a non-empty range.
    #[error("invalid range [{lower}, {upper}{}", closing_bracket(.inclusive))]
    InvalidRange {
        /// Lower bound as given by the caller
        lower: String,
        /// Upper bound as given by the caller
        upper: String,
        /// Whether the upper bound was meant to be included
        inclusive: bool,
    },
}

fn closing_bracket(inclusive: &bool) -> char {
    if *inclusive {
        ']'
    } else {
        ')'
    }
}

impl RandomError {
    pub(crate) fn invalid_range<T: std::fmt::Debug>(lower: T, upper: T, inclusive: bool) -> Self {
        RandomError::InvalidRange {
            lower: format!("{lower:?}"),
            upper: format!("{upper:?}"),
            inclusive,
        }
    }
}
