use std::num::NonZeroUsize;

use infixa::{
    analysis::{
        batches::{extract_literals, partition_even_odd, BatchList},
        stats::aggregate,
    },
    engine::{backend::core::BackendKind, eval::Engine, number::Number},
    eval_expression,
};

const AGREEMENT_CASES: [&str; 10] = ["2+3*4",
                                     "(2+3)*4",
                                     "2(3+4)",
                                     "10%3",
                                     "7/2",
                                     "2.5*4",
                                     "100-3.5(2)",
                                     "(1+2)*(3+4)-5",
                                     "9%4%2",
                                     "8/4/2"];

#[test]
fn backends_produce_bit_identical_results() {
    for source in AGREEMENT_CASES {
        let results: Vec<Number> =
            BackendKind::ALL.into_iter()
                            .map(|kind| {
                                eval_expression(source, kind).unwrap_or_else(|error| {
                                    panic!("'{source}' failed on {kind:?}: {error}")
                                })
                            })
                            .collect();

        for result in &results[1..] {
            assert_eq!(result.value().to_bits(), results[0].value().to_bits(), "on '{source}'");
            assert_eq!(result.is_float(), results[0].is_float(), "on '{source}'");
        }
    }
}

#[test]
fn zero_divisors_fail_on_every_backend() {
    for kind in BackendKind::ALL {
        assert!(eval_expression("1/0", kind).is_err(), "1/0 passed on {kind:?}");
        assert!(eval_expression("1%0", kind).is_err(), "1%0 passed on {kind:?}");
    }
}

#[test]
fn array_backend_refuses_to_overflow() {
    // 101 nested parentheses: balanced, so validation passes, but the
    // fixed-capacity operator stack cannot hold them.
    let depth = 101;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    let error = eval_expression(&source, BackendKind::Array).unwrap_err();
    assert!(error.to_string().contains("capacity"), "unexpected error: {error}");

    // The unbounded backends take the same expression in stride.
    assert_eq!(eval_expression(&source, BackendKind::Linked).unwrap().to_string(), "1");
    assert_eq!(eval_expression(&source, BackendKind::Queue).unwrap().to_string(), "1");
}

#[test]
fn stacks_reset_between_evaluations() {
    let mut engine = Engine::new(BackendKind::Queue);

    assert_eq!(engine.evaluate("2+3").unwrap().to_string(), "5");
    assert_eq!(engine.evaluate("4*5").unwrap().to_string(), "20");

    // A failed call must not poison the next one either.
    assert!(engine.evaluate("1/0").is_err());
    assert_eq!(engine.evaluate("6-1").unwrap().to_string(), "5");
}

#[test]
fn backend_kind_parses_names_and_menu_digits() {
    assert_eq!("array".parse::<BackendKind>().unwrap(), BackendKind::Array);
    assert_eq!("Array".parse::<BackendKind>().unwrap(), BackendKind::Array);
    assert_eq!("1".parse::<BackendKind>().unwrap(), BackendKind::Array);
    assert_eq!("2".parse::<BackendKind>().unwrap(), BackendKind::Linked);
    assert_eq!("linkedlist".parse::<BackendKind>().unwrap(), BackendKind::Linked);
    assert_eq!("3".parse::<BackendKind>().unwrap(), BackendKind::Queue);
    assert!("heap".parse::<BackendKind>().is_err());
}

#[test]
fn literals_extract_in_reading_order() {
    let literals = extract_literals("12+3.5*(4)").unwrap();

    assert_eq!(literals.len(), 3);
    assert_eq!(literals[0].value(), 12.0);
    assert!(literals[0].is_integer());
    assert_eq!(literals[1].value(), 3.5);
    assert!(literals[1].is_float());
    assert_eq!(literals[2].value(), 4.0);
}

#[test]
fn batches_open_new_queues_at_capacity() {
    let capacity = NonZeroUsize::new(2).unwrap();
    let mut batches = BatchList::new(capacity);

    for value in [1, 2, 3, 4] {
        batches.push(Number::from(value));
    }

    assert_eq!(batches.batches().len(), 2);
    assert_eq!(batches.len(), 4);
    assert_eq!(batches.to_string(), "  Q1 => [1, 2]\n  Q2 => [3, 4]");
}

#[test]
fn parity_partition_uses_truncated_magnitudes() {
    let capacity = NonZeroUsize::new(10).unwrap();
    let literals = extract_literals("2.9+3.1+4+1").unwrap();
    let (even, odd) = partition_even_odd(&literals, capacity);

    assert_eq!(even.to_string(), "  Q1 => [2.90, 4]");
    assert_eq!(odd.to_string(), "  Q1 => [3.10, 1]");
}

#[test]
fn aggregates_over_extracted_literals() {
    let literals = extract_literals("1+2+3+4").unwrap();
    let stats = aggregate(&literals).unwrap();

    assert_eq!(stats.sum, 10.0);
    assert_eq!(stats.average, 2.5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 4.0);
    assert_eq!(stats.product, 24.0);

    assert!(aggregate(&[]).is_none());
}
