//! Algebraic laws the combinator surface commits to preserving.

use std::cell::Cell;

use outcome_rail::{err, ok, Outcome};

#[test]
fn functor_composition_law() {
    let f = |x: i32| x + 10;
    let g = |x: i32| x * 3;

    for value in [-4, 0, 7, 1000] {
        let composed = ok::<i32, &str>(value).map(f).map(g);
        let fused = ok::<i32, &str>(value).map(|x| g(f(x)));
        assert_eq!(composed, fused);
    }
}

#[test]
fn functor_identity_law() {
    let won: Outcome<i32, &str> = Outcome::Ok(42);
    assert_eq!(won.clone().map(|x| x), won);

    let lost: Outcome<i32, &str> = Outcome::Err("boom");
    assert_eq!(lost.clone().map(|x| x), lost);
}

#[test]
fn monad_left_identity_law() {
    fn step(n: i32) -> Outcome<i32, &'static str> {
        if n > 0 {
            Outcome::Ok(n * 2)
        } else {
            Outcome::Err("non-positive")
        }
    }

    for value in [-1, 0, 1, 21] {
        assert_eq!(ok::<i32, &str>(value).bind(step), step(value));
    }
}

#[test]
fn error_short_circuits_map_and_bind_without_invoking_the_function() {
    let calls = Cell::new(0u32);

    let mapped = err::<i32, &str>("boom").map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(mapped, Outcome::Err("boom"));

    let bound = err::<i32, &str>("boom").bind(|x| {
        calls.set(calls.get() + 1);
        ok::<i32, &str>(x + 1)
    });
    assert_eq!(bound, Outcome::Err("boom"));

    assert_eq!(calls.get(), 0);
}

#[test]
fn success_short_circuits_the_error_side_combinators() {
    let calls = Cell::new(0u32);

    let mapped = ok::<i32, &str>(1).map_err(|e| {
        calls.set(calls.get() + 1);
        e
    });
    assert_eq!(mapped, Outcome::Ok(1));

    let bound = ok::<i32, &str>(1).bind_err(|_| {
        calls.set(calls.get() + 1);
        ok::<i32, &str>(0)
    });
    assert_eq!(bound, Outcome::Ok(1));

    assert_eq!(calls.get(), 0);
}

#[test]
fn combinators_agree_with_match_with() {
    // match_with is the canonical eliminator; spot-check that map and
    // unwrap_or behave as its specializations.
    let outcome: Outcome<i32, &str> = Outcome::Ok(4);
    assert_eq!(
        outcome.clone().map(|x| x + 1).into_value(),
        Some(outcome.clone().match_with(|x| x + 1, |_| unreachable!())),
    );

    let failed: Outcome<i32, &str> = Outcome::Err("boom");
    assert_eq!(
        failed.clone().unwrap_or(9),
        failed.match_with(|x| x, |_| 9),
    );
}
