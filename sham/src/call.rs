// vim: tw=80
//! Expectation and failure records.

use crate::value::Value;

/// A single expected call: a name, the arguments it must be invoked with,
/// and the canned values it returns.
///
/// `Call`s are built once at test setup and never mutated afterwards; the
/// engine owns them for the duration of a verification phase.
///
/// # Examples
/// ```
/// # use sham::{values, Call, Value};
/// let call = Call::new("baz")
///     .with_args(values!["two"])
///     .returning(values![2, Value::Nil]);
/// assert_eq!(call.name(), "baz");
/// assert_eq!(call.result().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    name: String,
    args: Vec<Value>,
    result: Vec<Value>,
}

impl Call {
    /// Create an expectation for `name` with no arguments and no results.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Call {
            name: name.into(),
            args: Vec::new(),
            result: Vec::new(),
        }
    }

    /// Set the arguments the call must be invoked with.
    pub fn with_args<I: IntoIterator<Item = Value>>(mut self, args: I) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    /// Set the canned return values.  Their number is the call's declared
    /// result arity.
    pub fn returning<I: IntoIterator<Item = Value>>(mut self, result: I) -> Self {
        self.result = result.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn result(&self) -> &[Value] {
        &self.result
    }
}

/// A record of one failed verification attempt.
///
/// Appended to the engine's bad-call list exactly once per failure and
/// cleared only by [`CannedResponseMock::reset`].
///
/// [`CannedResponseMock::reset`]: crate::CannedResponseMock::reset
#[derive(Clone, Debug, PartialEq)]
pub struct BadCall {
    /// The name the code under test actually invoked.
    pub name: String,
    /// The arguments it supplied.  Empty for the no-args verification path.
    pub args: Vec<Value>,
    /// The cursor position at the time of the call.  Equal to the number of
    /// expectations if the call was unexpected.
    pub index: usize,
    /// The display form of the [`Mismatch`](crate::Mismatch) that caused
    /// this record.
    pub message: String,
}
