use outcome_rail::traits::ResultExt;
use outcome_rail::Outcome;

#[test]
fn into_outcome_preserves_both_variants() {
    let won: Outcome<i32, &str> = Ok::<_, &str>(42).into_outcome();
    assert_eq!(won, Outcome::Ok(42));

    let lost: Outcome<i32, &str> = Err::<i32, _>("boom").into_outcome();
    assert_eq!(lost, Outcome::Err("boom"));
}

#[test]
fn into_outcome_joins_a_combinator_chain_mid_expression() {
    let total = "21"
        .parse::<i32>()
        .into_outcome()
        .map(|n| n * 2)
        .unwrap_or(0);
    assert_eq!(total, 42);
}
