// vim: tw=80
//! The ordered-expectation matching engine.

use std::fmt;

use crate::call::{BadCall, Call};
use crate::error::{InvariantError, Mismatch};
use crate::value::Value;

/// Observer invoked synchronously whenever a [`BadCall`] is recorded.
///
/// The observer receives a shared reference only, so it cannot alter the
/// engine's state.
pub type BadCallHandler = Box<dyn Fn(&BadCall)>;

/// An ordered list of expected calls with canned responses.
///
/// The engine holds the expectations, a cursor identifying the next
/// expectation due to be matched, and the list of calls that failed
/// verification.  A hand-written double forwards each of its methods to
/// [`verify_call`](Self::verify_call) or
/// [`verify_call_no_args`](Self::verify_call_no_args), then unpacks the
/// matched call's canned results into its own return values.
///
/// Verification failures never panic.  They are recorded as [`BadCall`]s and
/// returned as [`Mismatch`] errors, so the code under test sees an ordinary
/// error result, exactly as it would from the real dependency.  After the
/// code under test has run, [`is_valid`](Self::is_valid) reports whether
/// every expectation was matched in order with no failures.
///
/// # Examples
/// ```
/// # use sham::{values, Call, CannedResponseMock, Value};
/// let mut mock = CannedResponseMock::new(vec![
///     Call::new("bar"),
///     Call::new("baz").with_args(values!["two"])
///         .returning(values![2, Value::Nil]),
/// ]);
/// mock.invariant().unwrap();
///
/// mock.verify_call_no_args("bar", 0).unwrap();
/// let call = mock.verify_call("baz", 2, values!["two"]).unwrap();
/// assert_eq!(call.result()[0].as_int(), Some(2));
/// assert!(call.result()[1].to_error().is_none());
/// assert!(mock.is_valid());
/// ```
#[derive(Default)]
pub struct CannedResponseMock {
    expected_calls: Vec<Call>,
    index: usize,
    bad_calls: Vec<BadCall>,
    on_bad_call: Option<BadCallHandler>,
}

impl CannedResponseMock {
    /// Create an engine expecting `expected_calls`, in order.
    pub fn new(expected_calls: Vec<Call>) -> Self {
        CannedResponseMock {
            expected_calls,
            ..Default::default()
        }
    }

    /// Like [`new`](Self::new), but also registers a bad-call observer.
    ///
    /// The observer is invoked synchronously, after the [`BadCall`] has been
    /// recorded and before the verification call returns.  It survives
    /// [`reset`](Self::reset).
    pub fn with_observer<F>(expected_calls: Vec<Call>, observer: F) -> Self
        where F: Fn(&BadCall) + 'static
    {
        CannedResponseMock {
            expected_calls,
            on_bad_call: Some(Box::new(observer)),
            ..Default::default()
        }
    }

    /// Check the construction invariant: the expectation list must be
    /// non-empty and every expectation must have a name.
    ///
    /// Call this after assigning expectations and before first use; the
    /// engine does not enforce it automatically.  Does not mutate state.
    pub fn invariant(&self) -> Result<(), InvariantError> {
        if self.expected_calls.is_empty() {
            return Err(InvariantError::Empty);
        }
        if self.expected_calls.iter().any(|call| call.name().is_empty()) {
            return Err(InvariantError::UnnamedCall);
        }
        Ok(())
    }

    /// Verify that the current call matches the expectation at the cursor.
    ///
    /// Checks run in a fixed order: name, argument count, positional
    /// argument equality (deep, structural; first mismatch wins), declared
    /// result arity.  On success the cursor advances and a clone of the
    /// matched expectation is returned, so the caller can unpack its canned
    /// results.  On failure the cursor stays put, a [`BadCall`] is recorded,
    /// the observer (if any) is notified, and the [`Mismatch`] is returned.
    pub fn verify_call(
        &mut self,
        name: &str,
        result_count: usize,
        args: Vec<Value>,
    ) -> Result<Call, Mismatch> {
        self.verify(name, result_count, args, true)
    }

    /// Like [`verify_call`](Self::verify_call), but never inspects
    /// arguments, even when the expectation carries a non-empty argument
    /// list.  Used when the caller does not want to assert on arguments.
    pub fn verify_call_no_args(
        &mut self,
        name: &str,
        result_count: usize,
    ) -> Result<Call, Mismatch> {
        self.verify(name, result_count, Vec::new(), false)
    }

    fn verify(
        &mut self,
        name: &str,
        result_count: usize,
        args: Vec<Value>,
        check_args: bool,
    ) -> Result<Call, Mismatch> {
        if self.index >= self.expected_calls.len() {
            return Err(self.record_bad_call(name, args,
                Mismatch::UnexpectedCall));
        }

        let expected = self.expected_calls[self.index].clone();
        if expected.name() != name {
            let mismatch = Mismatch::NameMismatch {
                expected: expected.name().to_owned(),
                got: name.to_owned(),
            };
            return Err(self.record_bad_call(name, args, mismatch));
        }

        if check_args {
            if expected.args().len() != args.len() {
                let mismatch = Mismatch::ArgumentCountMismatch {
                    expected: expected.args().len(),
                    got: args.len(),
                };
                return Err(self.record_bad_call(name, args, mismatch));
            }

            let first_mismatch = expected.args().iter()
                .zip(&args)
                .position(|(want, got)| want != got);
            if let Some(i) = first_mismatch {
                let mismatch = Mismatch::ArgumentValueMismatch {
                    index: i,
                    expected: expected.args()[i].clone(),
                    got: args[i].clone(),
                };
                return Err(self.record_bad_call(name, args, mismatch));
            }
        }

        if expected.result().len() != result_count {
            let mismatch = Mismatch::ResultArityMismatch {
                expected: expected.result().len(),
                got: result_count,
            };
            return Err(self.record_bad_call(name, args, mismatch));
        }

        self.index += 1;
        Ok(expected)
    }

    fn record_bad_call(
        &mut self,
        name: &str,
        args: Vec<Value>,
        mismatch: Mismatch,
    ) -> Mismatch {
        let bad_call = BadCall {
            name: name.to_owned(),
            args,
            index: self.index,
            message: mismatch.to_string(),
        };
        self.bad_calls.push(bad_call);
        if let (Some(observer), Some(bad_call)) =
            (&self.on_bad_call, self.bad_calls.last())
        {
            observer(bad_call);
        }
        mismatch
    }

    /// True iff every expectation was matched, in order, and no bad calls
    /// were recorded since the last reset.
    ///
    /// Invalidity is sticky: once a bad call is recorded, `is_valid` stays
    /// false even if the cursor later reaches the end, until
    /// [`reset`](Self::reset).
    pub fn is_valid(&self) -> bool {
        self.index == self.expected_calls.len() && self.bad_calls.is_empty()
    }

    /// Clear the expectations, cursor, and bad calls, keeping the observer.
    ///
    /// Re-arm with [`set_expected_calls`](Self::set_expected_calls) to reuse
    /// the engine for another verification phase within the same test.
    pub fn reset(&mut self) {
        self.expected_calls.clear();
        self.index = 0;
        self.bad_calls.clear();
    }

    /// Replace the expectation list.  The cursor and bad calls are left
    /// alone; the canonical way to re-arm a used engine is
    /// [`reset`](Self::reset) followed by this method.
    pub fn set_expected_calls(&mut self, expected_calls: Vec<Call>) {
        self.expected_calls = expected_calls;
    }

    pub fn expected_calls(&self) -> &[Call] {
        &self.expected_calls
    }

    /// The cursor: the position of the next expectation due to be matched.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The calls that failed verification, in the order they occurred.
    pub fn bad_calls(&self) -> &[BadCall] {
        &self.bad_calls
    }
}

impl fmt::Debug for CannedResponseMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CannedResponseMock")
            .field("expected_calls", &self.expected_calls)
            .field("index", &self.index)
            .field("bad_calls", &self.bad_calls)
            .field("on_bad_call", &self.on_bad_call.as_ref().map(|_| "..."))
            .finish()
    }
}
