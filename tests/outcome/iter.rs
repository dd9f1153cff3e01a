use outcome_rail::{err, ok, Outcome};

#[test]
fn value_channel_yields_one_item_on_success() {
    let won = ok::<i32, &str>(3);
    let collected: Vec<_> = won.iter().copied().collect();
    assert_eq!(collected, vec![3]);

    let lost = err::<i32, &str>("boom");
    assert_eq!(lost.iter().count(), 0);
}

#[test]
fn iter_mut_edits_the_held_value() {
    let mut won = ok::<i32, &str>(3);
    if let Some(value) = won.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(won.into_value(), Some(4));
}

#[test]
fn into_iter_moves_the_value_out() {
    let won = ok::<String, &str>("hi".to_string());
    let collected: Vec<String> = won.into_iter().collect();
    assert_eq!(collected, vec!["hi".to_string()]);

    let lost = err::<String, &str>("boom");
    assert_eq!(lost.into_iter().count(), 0);
}

#[test]
fn error_channel_yields_one_item_on_failure() {
    let lost = err::<i32, &str>("boom");
    let collected: Vec<_> = lost.iter_err().copied().collect();
    assert_eq!(collected, vec!["boom"]);

    let won = ok::<i32, &str>(1);
    assert_eq!(won.iter_err().count(), 0);
}

#[test]
fn borrowed_outcomes_iterate_through_into_iterator() {
    let won = ok::<i32, &str>(10);
    let mut total = 0;
    for value in &won {
        total += value;
    }
    assert_eq!(total, 10);

    let mut editable = ok::<i32, &str>(1);
    for value in &mut editable {
        *value += 1;
    }
    assert_eq!(editable.into_value(), Some(2));
}
