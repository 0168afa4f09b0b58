//! Property-based tests for action behaviors.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use futures_util::FutureExt;
use mindset_actions::behavior::{EntryActionBehavior, ExitActionBehavior};
use mindset_actions::builder::StateActions;
use mindset_actions::core::{MethodDescriptor, State, Transition};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum TestState {
    Initial,
    Processing,
    Complete,
    Failed,
}

impl State for TestState {
    fn name(&self) -> &str {
        match self {
            Self::Initial => "Initial",
            Self::Processing => "Processing",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
        }
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> TestState {
        match variant {
            0 => TestState::Initial,
            1 => TestState::Processing,
            2 => TestState::Complete,
            _ => TestState::Failed,
        }
    }
}

prop_compose! {
    fn arbitrary_transition()(
        source in arbitrary_state(),
        destination in arbitrary_state(),
        trigger in 0..4u8,
    ) -> Transition<TestState, u8> {
        Transition::new(source, destination, trigger)
    }
}

fn counting_exit(state: TestState, counter: &Arc<AtomicUsize>) -> ExitActionBehavior<TestState> {
    let counter = Arc::clone(counter);
    ExitActionBehavior::sync(
        state,
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
        Some(MethodDescriptor::synchronous("count")),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn sync_runs_exactly_once_per_call(
        state in arbitrary_state(),
        blocking in 0..20usize,
        awaitable in 0..20usize,
    ) {
        let counter = Arc::new(AtomicUsize::new(0));
        let exit = counting_exit(state, &counter);

        for _ in 0..blocking {
            prop_assert!(exit.execute().is_ok());
        }
        for _ in 0..awaitable {
            let result = exit.execute_async().now_or_never();
            prop_assert!(matches!(result, Some(Ok(()))));
        }

        prop_assert_eq!(counter.load(Ordering::SeqCst), blocking + awaitable);
    }

    #[test]
    fn filtered_entry_runs_only_on_matching_trigger(
        bound in 0..4u8,
        transition in arbitrary_transition(),
    ) {
        let counter = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&counter);
        let entry = EntryActionBehavior::sync_from(
            bound,
            move |_, _| {
                inner.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
            Some(MethodDescriptor::synchronous("filtered")),
        )
        .unwrap();

        prop_assert!(entry.execute(&transition).is_ok());

        let expected = usize::from(*transition.trigger() == bound);
        prop_assert_eq!(counter.load(Ordering::SeqCst), expected);
    }

    #[test]
    fn async_entry_never_runs_on_blocking_path(transition in arbitrary_transition()) {
        let counter = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&counter);
        let entry = EntryActionBehavior::asynchronous(
            move |_: &Transition<TestState, u8>, _: &[serde_json::Value]| {
                inner.fetch_add(1, Ordering::SeqCst);
                async { Ok(()) }.boxed()
            },
            Some(MethodDescriptor::asynchronous("async_only")),
        )
        .unwrap();

        let error = entry.execute(&transition).unwrap_err();

        prop_assert!(error.is_invalid_invocation());
        prop_assert!(error.to_string().contains(transition.destination().name()));
        prop_assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn registry_preserves_registration_order(triggers in prop::collection::vec(0..3u8, 1..10)) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut builder = StateActions::builder(TestState::Processing);
        for (index, trigger) in triggers.iter().enumerate() {
            let log = Arc::clone(&log);
            builder = builder.on_entry_from(*trigger, move |_, _| {
                log.lock().unwrap().push(index);
                Ok(())
            });
        }
        let actions = builder.build().unwrap();

        let transition = Transition::new(TestState::Initial, TestState::Processing, 1u8);
        prop_assert!(actions.execute_entry(&transition).is_ok());

        let expected: Vec<usize> = triggers
            .iter()
            .enumerate()
            .filter(|(_, trigger)| **trigger == 1)
            .map(|(index, _)| index)
            .collect();
        prop_assert_eq!(&*log.lock().unwrap(), &expected);
    }

    #[test]
    fn transition_roundtrip_serialization(transition in arbitrary_transition()) {
        let json = serde_json::to_string(&transition).unwrap();
        let deserialized: Transition<TestState, u8> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(transition, deserialized);
    }
}
