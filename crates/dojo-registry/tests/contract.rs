//! Registry contract tests: the error taxonomy, the no-coercion rule,
//! the catalog surface, and the cross-cutting properties from the kata
//! contracts (idempotence, walk round trips).

use dojo_registry::{KataError, Registry};
use serde_json::{Value, json};

fn registry() -> Registry {
    Registry::new()
}

#[test]
fn unknown_kata_is_not_found() {
    let err = registry().evaluate("fizzbuzz", &[]).unwrap_err();
    assert!(matches!(err, KataError::NotFound { ref name } if name == "fizzbuzz"));
}

#[test]
fn unknown_implementation_is_not_found() {
    let err = registry()
        .evaluate_with("dna", "reverse", &[json!("AT")])
        .unwrap_err();
    assert!(matches!(err, KataError::NotFound { ref name } if name == "dna::reverse"));
}

#[test]
fn wrong_arity_is_invalid_argument() {
    let err = registry().evaluate("pin", &[]).unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));

    let err = registry()
        .evaluate("pin", &[json!("1234"), json!("5678")])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn no_coercion_across_declared_types() {
    // A kata accepting a string of digits does not accept an integer,
    // and vice versa.
    let err = registry().evaluate("pin", &[json!(1234)]).unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));

    let err = registry()
        .evaluate("digitalRoot", &[json!("16")])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn uint_positions_reject_negatives_and_floats() {
    let reg = registry();
    for bad in [json!(-1), json!(3.5)] {
        let err = reg.evaluate("digitalRoot", &[bad.clone()]).unwrap_err();
        assert!(matches!(err, KataError::InvalidArgument { .. }), "{bad}");
        let err = reg.evaluate("persistence", &[bad]).unwrap_err();
        assert!(matches!(err, KataError::InvalidArgument { .. }));
    }
}

#[test]
fn sequence_sum_rejects_zero_step() {
    let err = registry()
        .evaluate("sequenceSum", &[json!(1), json!(5), json!(0)])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn tribonacci_seed_must_have_three_elements() {
    let reg = registry();
    for seed in [json!([]), json!([1, 2]), json!([1, 2, 3, 4])] {
        let err = reg
            .evaluate("tribonacci", &[seed.clone(), json!(5)])
            .unwrap_err();
        assert!(matches!(err, KataError::InvalidArgument { .. }), "{seed}");
    }
}

#[test]
fn walk_tokens_outside_the_compass_are_invalid() {
    let err = registry()
        .evaluate("isValidWalk", &[json!(["n", "s", "x", "w"])])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));

    // Uppercase is out of domain too; no coercion.
    let err = registry()
        .evaluate("isValidWalk", &[json!(["N", "S"])])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn high_and_low_requires_integer_tokens() {
    let reg = registry();
    for input in ["", "   ", "1 b 3", "1.5 2"] {
        let err = reg.evaluate("highAndLow", &[json!(input)]).unwrap_err();
        assert!(
            matches!(err, KataError::InvalidArgument { .. }),
            "input {input:?}"
        );
    }
}

#[test]
fn outlier_without_a_unique_outlier_is_invalid() {
    let reg = registry();
    for values in [json!([2, 4, 6]), json!([1, 3, 5]), json!([1, 2, 3, 4])] {
        let err = reg.evaluate("outlier", &[values.clone()]).unwrap_err();
        assert!(
            matches!(err, KataError::InvalidArgument { .. }),
            "values {values}"
        );
    }
    // Too short to contain a majority and an outlier.
    let err = reg.evaluate("outlier", &[json!([1, 2])]).unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn dig_pow_requires_positive_n() {
    let err = registry()
        .evaluate("digPow", &[json!(0), json!(1)])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn dig_pow_out_of_range_results_are_invalid() {
    let reg = registry();
    // 9^24 / 9 exceeds i64; a truncated quotient would be a wrong
    // in-band answer, so the call must fail instead.
    let err = reg.evaluate("digPow", &[json!(9), json!(24)]).unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));

    // 9^46 exceeds even the widened accumulator.
    let err = reg.evaluate("digPow", &[json!(9), json!(45)]).unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn tribonacci_overflow_is_invalid() {
    let err = registry()
        .evaluate("tribonacci", &[json!([1, 1, 1]), json!(100)])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn tribonacci_count_is_bounded() {
    // An all-zero seed never overflows, so the count cap is what stops
    // an arbitrarily large allocation.
    let err = registry()
        .evaluate("tribonacci", &[json!([0, 0, 0]), json!(1_000_000)])
        .unwrap_err();
    assert!(matches!(err, KataError::InvalidArgument { .. }));
}

#[test]
fn sequence_sum_overflow_is_invalid() {
    let reg = registry();
    for impl_id in ["loop", "closed-form"] {
        let err = reg
            .evaluate_with(
                "sequenceSum",
                impl_id,
                &[json!(i64::MAX - 1), json!(i64::MAX), json!(1)],
            )
            .unwrap_err();
        assert!(matches!(err, KataError::InvalidArgument { .. }), "{impl_id}");
    }
}

#[test]
fn equal_sides_handles_extreme_values() {
    // Side sums exceed i64 here; the comparison must stay exact.
    let values = json!([i64::MAX, i64::MAX, 1, i64::MAX, i64::MAX]);
    let reg = registry();
    for impl_id in ["rescan", "running-total"] {
        assert_eq!(
            reg.evaluate_with("equalSides", impl_id, &[values.clone()])
                .unwrap(),
            json!(2),
            "{impl_id}"
        );
    }
}

#[test]
fn sentinels_are_values_not_errors() {
    let reg = registry();
    assert_eq!(
        reg.evaluate("equalSides", &[json!([1, 2, 3, 4, 5, 6])])
            .unwrap(),
        json!(-1)
    );
    assert_eq!(
        reg.evaluate("digPow", &[json!(92), json!(1)]).unwrap(),
        json!(-1)
    );
}

#[test]
fn disemvowel_is_idempotent_through_the_registry() {
    let reg = registry();
    for text in [
        "This website is for losers LOL!",
        "aeiouAEIOU",
        "bcd",
        "",
        "Hey fellow warriors",
    ] {
        let once = reg.evaluate("disemvowel", &[json!(text)]).unwrap();
        let twice = reg.evaluate("disemvowel", &[once.clone()]).unwrap();
        assert_eq!(once, twice, "text {text:?}");
    }
}

#[test]
fn balanced_ten_step_walks_validate() {
    // Any arrangement of five opposing pairs sums to zero displacement.
    let reg = registry();
    let balanced = [
        json!(["n", "s", "n", "s", "n", "s", "n", "s", "n", "s"]),
        json!(["e", "w", "e", "w", "e", "w", "e", "w", "e", "w"]),
        json!(["n", "e", "s", "w", "n", "e", "s", "w", "n", "s"]),
        json!(["n", "n", "s", "s", "e", "e", "w", "w", "n", "s"]),
    ];
    for walk in balanced {
        assert_eq!(
            reg.evaluate("isValidWalk", &[walk.clone()]).unwrap(),
            json!(true),
            "walk {walk}"
        );
    }
}

#[test]
fn unbalanced_or_mistimed_walks_never_validate() {
    let reg = registry();
    // Forced nonzero displacement at length ten.
    let unbalanced = [
        json!(["n", "n", "n", "n", "n", "n", "n", "n", "n", "n"]),
        json!(["n", "s", "n", "s", "n", "s", "n", "s", "e", "e"]),
    ];
    for walk in unbalanced {
        assert_eq!(
            reg.evaluate("isValidWalk", &[walk.clone()]).unwrap(),
            json!(false),
            "walk {walk}"
        );
    }
    // Balanced but the wrong length.
    assert_eq!(
        reg.evaluate("isValidWalk", &[json!(["n", "s"])]).unwrap(),
        json!(false)
    );
}

#[test]
fn catalog_lists_every_kata_with_its_implementations() {
    let reg = registry();
    let catalog = reg.catalog_json();
    assert_eq!(catalog.get("schema").and_then(Value::as_u64), Some(1));
    assert_eq!(
        catalog.get("catalogKind").and_then(Value::as_str),
        Some("dojo.kata_catalog.v1")
    );

    let katas = catalog
        .get("katas")
        .and_then(Value::as_array)
        .expect("katas is an array");
    assert_eq!(katas.len(), 16);

    let pin = katas
        .iter()
        .find(|row| row.get("name").and_then(Value::as_str) == Some("pin"))
        .expect("pin row exists");
    assert_eq!(pin.get("implementations"), Some(&json!(["length-scan", "regex"])));
    assert_eq!(pin.get("params"), Some(&json!(["str"])));
    assert_eq!(pin.get("returns"), Some(&json!("bool")));
}
