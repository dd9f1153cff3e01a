use outcome_rail::convert::{option_to_outcome, outcome_to_result, result_to_outcome};
use outcome_rail::{err, ok, Outcome};

#[test]
fn results_convert_in_both_directions() {
    assert_eq!(result_to_outcome(Ok::<_, &str>(42)), Outcome::Ok(42));
    assert_eq!(result_to_outcome(Err::<i32, _>("boom")), Outcome::Err("boom"));

    assert_eq!(outcome_to_result(ok::<i32, &str>(42)), Ok(42));
    assert_eq!(outcome_to_result(err::<i32, &str>("boom")), Err("boom"));
}

#[test]
fn from_impls_mirror_the_free_functions() {
    let outcome: Outcome<i32, &str> = Ok::<_, &str>(1).into();
    assert_eq!(outcome, Outcome::Ok(1));

    let result: Result<i32, &str> = Outcome::<i32, &str>::Err("boom").into();
    assert_eq!(result, Err("boom"));
}

#[test]
fn round_trip_preserves_variant_and_payload() {
    for outcome in [ok::<i32, String>(7), err::<i32, String>("boom".into())] {
        assert_eq!(
            result_to_outcome(outcome_to_result(outcome.clone())),
            outcome
        );
    }
}

#[test]
fn options_convert_with_a_supplied_error() {
    assert_eq!(option_to_outcome(Some(1), "absent"), Outcome::Ok(1));
    assert_eq!(option_to_outcome(None::<i32>, "absent"), Outcome::Err("absent"));
}

#[test]
fn collect_aggregates_like_all() {
    let items = vec![ok::<i32, &str>(1), ok(2), ok(3)];
    let collected: Outcome<Vec<i32>, &str> = items.into_iter().collect();
    assert_eq!(collected, Outcome::Ok(vec![1, 2, 3]));

    let mixed = vec![ok::<i32, &str>(1), err("bad"), ok(3)];
    let collected: Outcome<Vec<i32>, &str> = mixed.into_iter().collect();
    assert_eq!(collected, Outcome::Err("bad"));
}

#[test]
fn collect_into_a_custom_collection_type() {
    use smallvec::SmallVec;

    let items = vec![ok::<i32, &str>(1), ok(2)];
    let collected: Outcome<SmallVec<[i32; 4]>, &str> = items.into_iter().collect();
    assert_eq!(collected.into_value().unwrap().into_vec(), vec![1, 2]);
}
