// vim: tw=80
//! A deterministic, ordered canned-response mock for unit tests.
//!
//! Sham replaces a real dependency with a double that is pre-programmed with
//! an ordered sequence of expected calls.  Each expectation names the
//! operation due to be invoked next, the arguments it must receive, and the
//! canned values it returns.  During the test, every invocation against the
//! double is checked against the next expectation in the sequence.
//! Mismatches are recorded rather than thrown: the code under test receives
//! an ordinary error value, and the test inspects the overall outcome
//! afterwards.
//!
//! The basic idea:
//! * Build an ordered list of [`Call`]s and construct a
//!   [`CannedResponseMock`] from it.
//! * Write a double that implements the same trait as the real dependency.
//!   Each of its methods forwards to
//!   [`verify_call`](CannedResponseMock::verify_call) (or
//!   [`verify_call_no_args`](CannedResponseMock::verify_call_no_args)) with
//!   its own name and arguments, then unpacks the matched call's canned
//!   results into its own return values.
//! * Hand the double to the code under test.
//! * Assert [`is_valid`](CannedResponseMock::is_valid) at the end, or
//!   inspect [`bad_calls`](CannedResponseMock::bad_calls) for a descriptive
//!   failure message.
//!
//! # Getting started
//!
//! Arguments and canned results are stored as [`Value`]s, a closed variant
//! type compared by deep structural equality.  The [`values!`] macro builds
//! argument and result lists from ordinary literals.
//!
//! ```
//! use sham::{values, Call, CannedResponseMock, Value};
//!
//! let mut mock = CannedResponseMock::new(vec![
//!     Call::new("bar"),
//!     Call::new("baz").with_args(values!["two"])
//!         .returning(values![2, Value::Nil]),
//! ]);
//! mock.invariant().unwrap();
//!
//! mock.verify_call_no_args("bar", 0).unwrap();
//! let call = mock.verify_call("baz", 2, values!["two"]).unwrap();
//! assert_eq!(call.result()[0].as_int(), Some(2));
//! assert!(mock.is_valid());
//! ```
//!
//! # Writing a double
//!
//! The double owns the engine and forwards to it from each typed method.
//! An error-typed result slot is reconstituted with
//! [`Value::to_error`]; `Value::Nil` in that slot means "no error".
//!
//! ```
//! use sham::{values, Call, CannedError, CannedResponseMock, Value};
//!
//! trait Foo {
//!     fn bar(&mut self);
//!     fn baz(&mut self, s: &str) -> Result<i64, CannedError>;
//! }
//!
//! struct MockFoo(CannedResponseMock);
//!
//! impl Foo for MockFoo {
//!     fn bar(&mut self) {
//!         let _ = self.0.verify_call_no_args("bar", 0);
//!     }
//!
//!     fn baz(&mut self, s: &str) -> Result<i64, CannedError> {
//!         let call = self.0.verify_call("baz", 2, values![s])
//!             .map_err(|e| CannedError::new(e.to_string()))?;
//!         match call.result()[1].to_error() {
//!             Some(e) => Err(e),
//!             None => Ok(call.result()[0].as_int().unwrap()),
//!         }
//!     }
//! }
//!
//! fn use_foo(foo: &mut dyn Foo, s: &str) -> Result<i64, CannedError> {
//!     foo.bar();
//!     Ok(foo.baz(s)? + 5)
//! }
//!
//! let mut mock = MockFoo(CannedResponseMock::new(vec![
//!     Call::new("bar"),
//!     Call::new("baz").with_args(values!["two"])
//!         .returning(values![2, Value::Nil]),
//! ]));
//! mock.0.invariant().unwrap();
//!
//! assert_eq!(use_foo(&mut mock, "two").unwrap(), 7);
//! assert!(mock.0.is_valid());
//! ```
//!
//! # Bad calls
//!
//! A failed verification appends a [`BadCall`] carrying the actual name and
//! arguments, the cursor position at the time of the call, and a
//! human-readable message.  The cursor does not advance, and invalidity is
//! sticky until [`reset`](CannedResponseMock::reset).  An observer
//! registered with
//! [`with_observer`](CannedResponseMock::with_observer) is notified
//! synchronously as each bad call is recorded.
//!
//! ```
//! use sham::{values, Call, CannedResponseMock};
//!
//! let mut mock = CannedResponseMock::new(vec![Call::new("bar")]);
//! let err = mock.verify_call("baz", 0, values![]).unwrap_err();
//! assert_eq!(err.to_string(), "wrong name. expected: 'bar'. got: 'baz'");
//! assert_eq!(mock.bad_calls()[0].index, 0);
//! assert!(!mock.is_valid());
//! ```
//!
//! # Reuse
//!
//! [`reset`](CannedResponseMock::reset) clears the expectations, cursor,
//! and bad calls (keeping the observer), and
//! [`set_expected_calls`](CannedResponseMock::set_expected_calls) re-arms
//! the engine, so one instance can serve several independent verification
//! phases within a single test.
//!
//! # What sham is not
//!
//! There is no predicate or fuzzy argument matching (arguments compare by
//! structural equality only), no call-count ranges, and no support for
//! concurrent invocation: the engine is single-threaded and synchronous, and
//! callers needing concurrent scenarios must serialize access externally.

mod call;
mod error;
mod mock;
mod value;

pub use call::{BadCall, Call};
pub use error::{CannedError, InvariantError, Mismatch};
pub use mock::{BadCallHandler, CannedResponseMock};
pub use value::Value;
