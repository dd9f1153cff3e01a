use outcome_rail::{outcome, Outcome};

#[test]
fn outcome_macro_wraps_an_expression() {
    let parsed = outcome!("42".parse::<i32>());
    assert_eq!(parsed.into_value(), Some(42));

    let failed = outcome!("forty-two".parse::<i32>());
    assert!(failed.is_err());
}

#[test]
fn outcome_macro_wraps_a_block() {
    let combined = outcome!({
        let host = "localhost";
        "8080".parse::<u16>().map(|port| format!("{host}:{port}"))
    });
    assert_eq!(combined, Outcome::Ok("localhost:8080".to_string()));
}

#[test]
fn outcome_macro_accepts_a_trailing_comma() {
    let parsed = outcome!("1".parse::<i32>(),);
    assert_eq!(parsed.into_value(), Some(1));
}
