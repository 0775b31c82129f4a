// vim: tw=80
//! Reset clears everything except the observer and re-arms the engine.

use sham::*;

fn calls() -> Vec<Call> {
    vec![
        Call::new("open").with_args(values!["f"]).returning(values![1]),
        Call::new("close"),
    ]
}

#[test]
fn reset_restores_the_initial_state() {
    let mut mock = CannedResponseMock::new(calls());
    mock.verify_call("open", 1, values!["f"]).unwrap();
    mock.verify_call("nope", 0, values![]).unwrap_err();
    assert!(!mock.is_valid());
    assert_eq!(mock.index(), 1);

    mock.reset();
    assert_eq!(mock.index(), 0);
    assert!(mock.bad_calls().is_empty());
    assert!(mock.expected_calls().is_empty());

    // An empty engine with the cursor at 0 is, vacuously, valid.
    assert!(mock.is_valid());
}

#[test]
fn reassigned_sequence_succeeds_from_the_start() {
    let mut mock = CannedResponseMock::new(calls());
    mock.verify_call("open", 1, values!["f"]).unwrap();
    mock.verify_call("close", 0, values![]).unwrap();
    assert!(mock.is_valid());

    mock.reset();
    mock.set_expected_calls(calls());
    mock.invariant().unwrap();

    mock.verify_call("open", 1, values!["f"]).unwrap();
    mock.verify_call("close", 0, values![]).unwrap();
    assert!(mock.is_valid());
}

#[test]
fn any_call_after_reset_is_unexpected() {
    let mut mock = CannedResponseMock::new(calls());
    mock.reset();

    let err = mock.verify_call("open", 1, values!["f"]).unwrap_err();
    assert_eq!(err, Mismatch::UnexpectedCall);
    assert_eq!(mock.bad_calls()[0].index, 0);
}
