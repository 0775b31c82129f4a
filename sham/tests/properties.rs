// vim: tw=80
//! Property tests for the ordered-expectation engine.

use proptest::prelude::*;

use sham::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,6}".prop_map(Value::Str),
    ]
}

fn call_strategy() -> impl Strategy<Value = Call> {
    (
        "[a-z][a-z0-9_]{0,8}",
        prop::collection::vec(value_strategy(), 0..4),
        prop::collection::vec(value_strategy(), 0..3),
    ).prop_map(|(name, args, result)| {
        Call::new(name).with_args(args).returning(result)
    })
}

proptest! {
    // Replaying any well-formed expectation list exactly always validates.
    #[test]
    fn exact_replay_is_valid(
        calls in prop::collection::vec(call_strategy(), 1..8),
    ) {
        let mut mock = CannedResponseMock::new(calls.clone());
        prop_assert!(mock.invariant().is_ok());

        for call in &calls {
            let matched = mock.verify_call(
                call.name(), call.result().len(), call.args().to_vec());
            prop_assert_eq!(matched.unwrap(), call.clone());
        }
        prop_assert!(mock.is_valid());
        prop_assert!(mock.bad_calls().is_empty());
    }

    // Perturbing one name yields exactly one bad call at that index, and
    // invalidity sticks even when the rest of the sequence is replayed
    // correctly.
    #[test]
    fn perturbed_name_invalidates(
        calls in prop::collection::vec(call_strategy(), 1..8),
        pos in any::<prop::sample::Index>(),
    ) {
        let i = pos.index(calls.len());
        let mut mock = CannedResponseMock::new(calls.clone());

        for call in &calls[..i] {
            mock.verify_call(
                call.name(), call.result().len(), call.args().to_vec())
                .unwrap();
        }

        let bad_name = format!("{}x", calls[i].name());
        let err = mock.verify_call(
            &bad_name, calls[i].result().len(), calls[i].args().to_vec());
        prop_assert!(err.is_err());
        prop_assert_eq!(mock.bad_calls().len(), 1);
        prop_assert_eq!(mock.bad_calls()[0].index, i);
        prop_assert_eq!(&mock.bad_calls()[0].name, &bad_name);

        for call in &calls[i..] {
            mock.verify_call(
                call.name(), call.result().len(), call.args().to_vec())
                .unwrap();
        }
        prop_assert_eq!(mock.index(), calls.len());
        prop_assert!(!mock.is_valid());
    }

    // The no-args path never inspects arguments.
    #[test]
    fn no_args_path_ignores_arguments(
        calls in prop::collection::vec(call_strategy(), 1..8),
    ) {
        let mut mock = CannedResponseMock::new(calls.clone());
        for call in &calls {
            mock.verify_call_no_args(call.name(), call.result().len())
                .unwrap();
        }
        prop_assert!(mock.is_valid());
    }
}
