// vim: tw=80
//! The bad-call observer is notified synchronously, once per failure.

use std::cell::RefCell;
use std::rc::Rc;

use sham::*;

#[test]
fn invoked_once_per_bad_call() {
    let seen: Rc<RefCell<Vec<BadCall>>> = Rc::default();
    let seen2 = Rc::clone(&seen);
    let mut mock = CannedResponseMock::with_observer(
        vec![Call::new("bar")],
        move |bad_call| seen2.borrow_mut().push(bad_call.clone()),
    );

    mock.verify_call("baz", 0, values![]).unwrap_err();

    // The observer saw the bad call before verify_call returned, so it is
    // already visible here.
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0], mock.bad_calls()[0]);

    // A successful call does not notify.
    mock.verify_call("bar", 0, values![]).unwrap();
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn survives_reset() {
    let count = Rc::new(RefCell::new(0));
    let count2 = Rc::clone(&count);
    let mut mock = CannedResponseMock::with_observer(
        vec![Call::new("bar")],
        move |_| *count2.borrow_mut() += 1,
    );

    mock.verify_call("baz", 0, values![]).unwrap_err();
    assert_eq!(*count.borrow(), 1);

    mock.reset();
    mock.set_expected_calls(vec![Call::new("bar")]);
    mock.verify_call("baz", 0, values![]).unwrap_err();
    assert_eq!(*count.borrow(), 2);
}
