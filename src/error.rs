use thiserror::Error;

/// Failures at the configuration/assignment boundary. Heuristic
/// ambiguity is never an error: parsing always produces a value, at
/// worst an unparsable one. These errors are synchronous, recoverable,
/// and leave the name value untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A slot was addressed by a name outside the closed slot set.
    #[error("unknown name slot `{0}`")]
    UnknownSlot(String),

    /// A value of a shape other than string, list-of-strings, or null
    /// was assigned to a slot.
    #[error("cannot assign a {0} value to a name slot")]
    InvalidAssignment(&'static str),
}
