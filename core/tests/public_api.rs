//! Integration tests for the public API.
//!
//! These tests exercise the operations end-to-end through the crate's public
//! exports, covering the documented contract of each operation.

use pretty_assertions::assert_eq;
use protoseq_core::stdlib::{
    every, filter, for_each, includes, index_of, keys, last_index_of, map, push, reduce, some,
    values,
};
use protoseq_core::values::{Object, Sequence, Value, seq};
use protoseq_core::{ArrayMethods, ErrorKind, ExecutionError};

fn num(value: &Value) -> f64 {
    value.as_number().unwrap_or(f64::NAN)
}

fn max(acc: Value, value: &Value, _: usize, _: &Sequence) -> Result<Value, ExecutionError> {
    Ok(Value::from(num(&acc).max(num(value))))
}

#[test]
fn test_reduce_contract() {
    let never = |_: Value, _: &Value, _: usize, _: &Sequence| -> Result<Value, ExecutionError> {
        panic!("callback must not run")
    };

    let err = reduce(&seq![], never, None).unwrap_err();
    assert_eq!(err, ExecutionError::InvalidReduction);
    assert_eq!(err.kind(), ErrorKind::TypeError);
    assert_eq!(err.to_string(), "TypeError: Reduce of empty array with no initial value");

    assert_eq!(reduce(&seq![], never, Some(Value::from("v"))), Ok(Value::from("v")));
    assert_eq!(reduce(&seq!["x"], never, None), Ok(Value::from("x")));

    assert_eq!(reduce(&seq![1, 100], max, Some(Value::from(50))), Ok(Value::from(100)));
    assert_eq!(reduce(&seq![1, 100], max, None), Ok(Value::from(100)));
    assert_eq!(reduce(&seq![50], max, None), Ok(Value::from(50)));
}

#[test]
fn test_search_contract() {
    let with_nan = seq![1, 2, f64::NAN];
    assert!(includes(&with_nan, &Value::nan(), None));
    assert_eq!(index_of(&with_nan, &Value::nan(), None), None);

    let nines = seq![2, 9, 9];
    assert_eq!(index_of(&nines, &Value::from(9), Some(2)), Some(2));
    assert_eq!(index_of(&nines, &Value::from(2), Some(-1)), None);
    assert_eq!(index_of(&nines, &Value::from(2), Some(-3)), Some(0));

    let twos = seq![2, 5, 9, 2];
    assert_eq!(last_index_of(&twos, &Value::from(2), None), Some(3));
    assert_eq!(last_index_of(&twos, &Value::from(2), Some(-2)), Some(0));
    assert_eq!(last_index_of(&twos, &Value::from(2), Some(-6)), None);
}

#[test]
fn test_push_contract() {
    let mut letters = seq!["a", "b"];
    assert_eq!(push(&mut letters, ["c"]), 3);
    assert_eq!(letters, seq!["a", "b", "c"]);

    assert_eq!(push(&mut letters, ["d", "e"]), 5);
    assert_eq!(letters, seq!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_short_circuit_counters() {
    let s: Sequence = (1..=10).map(Value::from).collect();

    let mut calls = 0;
    let found = some(&s, |v, _, _| {
        calls += 1;
        Ok::<_, ExecutionError>(num(v) == 3.0)
    })
    .unwrap();
    assert!(found);
    assert_eq!(calls, 3);

    let mut calls = 0;
    let all_small = every(&s, |v, _, _| {
        calls += 1;
        Ok::<_, ExecutionError>(num(v) < 5.0)
    })
    .unwrap();
    assert!(!all_small);
    assert_eq!(calls, 5);
    assert!(calls < s.len());
}

#[test]
fn test_keys_values_contract() {
    let object: Object = [("a", 1), ("b", 2)].into_iter().collect();

    assert_eq!(keys(&object), seq!["a", "b"]);
    assert_eq!(values(&object), seq![1, 2]);
}

#[test]
fn test_callbacks_can_read_the_sequence() {
    let s = seq![1, 2, 3];

    // Each element minus its predecessor, read through the callback's
    // sequence argument.
    let deltas = map(&s, |v, i, seq| {
        let prev = if i == 0 { 0.0 } else { num(&seq.lookup(i - 1)) };
        Ok::<_, ExecutionError>(num(v) - prev)
    })
    .unwrap();

    assert_eq!(deltas, seq![1, 1, 1]);
}

#[test]
fn test_method_form_matches_functions() {
    let s = seq![4, _, 6, Value::Null];
    let mut method_calls = Vec::new();
    let mut function_calls = Vec::new();

    s.for_each(|_, i, _| {
        method_calls.push(i);
        Ok::<_, ExecutionError>(())
    })
    .unwrap();
    for_each(&s, |_, i, _| {
        function_calls.push(i);
        Ok::<_, ExecutionError>(())
    })
    .unwrap();

    assert_eq!(method_calls, function_calls);
    assert_eq!(method_calls, [0, 2]);
}

// ============================================================================
// Property tests
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn sparse() -> impl Strategy<Value = Vec<Option<i32>>> {
        proptest::collection::vec(proptest::option::weighted(0.8, -50i32..50), 0..40)
    }

    fn to_sequence(slots: &[Option<i32>]) -> Sequence {
        Sequence::from_slots(slots.iter().map(|slot| slot.map(Value::from)).collect())
    }

    proptest! {
        #[test]
        fn map_preserves_length_and_applies_callback(items in proptest::collection::vec(-1000i32..1000, 0..40)) {
            let s: Sequence = items.iter().copied().map(Value::from).collect();

            let mapped = map(&s, |v, i, _| Ok::<_, ExecutionError>(num(v) * 3.0 + i as f64)).unwrap();

            prop_assert_eq!(mapped.len(), s.len());
            for (i, item) in items.iter().enumerate() {
                prop_assert_eq!(mapped.lookup(i), Value::from(f64::from(*item) * 3.0 + i as f64));
            }
        }

        #[test]
        fn map_keeps_holes_where_they_were(slots in sparse()) {
            let s = to_sequence(&slots);

            let mapped = map(&s, |v, _, _| Ok::<_, ExecutionError>(v.clone())).unwrap();

            prop_assert_eq!(mapped, s);
        }

        #[test]
        fn filter_keeps_matching_elements_in_order(slots in sparse(), threshold in -50i32..50) {
            let s = to_sequence(&slots);

            let kept = filter(&s, |v, _, _| Ok::<_, ExecutionError>(num(v) >= f64::from(threshold))).unwrap();

            let expected: Sequence = slots
                .iter()
                .flatten()
                .filter(|&&n| n >= threshold)
                .map(|&n| Value::from(n))
                .collect();
            prop_assert_eq!(kept.count_present(), kept.len());
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn reduce_sum_matches_present_elements(slots in sparse(), seed in -100i32..100) {
            let s = to_sequence(&slots);
            let add = |acc: Value, v: &Value, _: usize, _: &Sequence| {
                Ok::<_, ExecutionError>(Value::from(num(&acc) + num(v)))
            };

            let total = reduce(&s, add, Some(Value::from(seed))).unwrap();

            let expected: i32 = seed + slots.iter().flatten().sum::<i32>();
            prop_assert_eq!(total, Value::from(expected));
        }

        #[test]
        fn index_of_agrees_with_linear_search(slots in sparse(), needle in -50i32..50) {
            let s = to_sequence(&slots);

            let expected = slots.iter().position(|slot| *slot == Some(needle));
            prop_assert_eq!(index_of(&s, &Value::from(needle), None), expected);

            let expected_last = slots.iter().rposition(|slot| *slot == Some(needle));
            prop_assert_eq!(last_index_of(&s, &Value::from(needle), None), expected_last);
        }
    }
}
