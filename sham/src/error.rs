// vim: tw=80
//! Error types for verification failures and construction invariants.

use thiserror::Error;

use crate::value::Value;

/// A verification failure.
///
/// Returned by [`CannedResponseMock::verify_call`] and recorded, in display
/// form, in the corresponding [`BadCall`].  The display text is part of the
/// contract; tests may assert on it.
///
/// [`CannedResponseMock::verify_call`]:
///     crate::CannedResponseMock::verify_call
/// [`BadCall`]: crate::BadCall
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Mismatch {
    /// The invocation arrived after every expectation was already matched.
    #[error("unexpected call")]
    UnexpectedCall,
    /// The invocation's name differs from the expectation at the cursor.
    #[error("wrong name. expected: '{expected}'. got: '{got}'")]
    NameMismatch { expected: String, got: String },
    /// The invocation supplied the wrong number of arguments.
    #[error("incorrect argument count. expected: {expected}. got {got}")]
    ArgumentCountMismatch { expected: usize, got: usize },
    /// A positional argument failed structural equality.  Only the first
    /// offending position is reported.
    #[error("argument {index} mismatch. expected: '{expected}'. got '{got}'")]
    ArgumentValueMismatch {
        index: usize,
        expected: Value,
        got: Value,
    },
    /// The caller's declared result count differs from the canned result
    /// count.
    #[error("incorrect result count. expected: {expected}. got {got}")]
    ResultArityMismatch { expected: usize, got: usize },
}

/// A violation of the construction invariant.
///
/// Returned by [`CannedResponseMock::invariant`].
///
/// [`CannedResponseMock::invariant`]: crate::CannedResponseMock::invariant
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("calls can't be empty")]
    Empty,
    #[error("call must have a name")]
    UnnamedCall,
}

/// A canned error reconstituted from a result slot.
///
/// See [`Value::to_error`](crate::Value::to_error).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CannedError(pub String);

impl CannedError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        CannedError(message.into())
    }
}
