use simple_result::{Error, Outcome};

#[test]
fn success_carries_the_none_sentinel() {
    let outcome = Outcome::success();
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.error(), &Error::NONE);
}

#[test]
fn failure_carries_the_given_error() {
    let error = Error::conflict("User.EmailTaken", "The email address is already in use.");
    let outcome: Outcome<()> = Outcome::failure(error.clone());

    assert!(outcome.is_failure());
    assert_eq!(outcome.error(), &error);
}

#[test]
#[should_panic(expected = "success requires Error::NONE, failure requires a real error")]
fn failure_with_none_sentinel_panics() {
    let _: Outcome<()> = Outcome::failure(Error::NONE);
}

#[test]
#[should_panic(expected = "success requires Error::NONE, failure requires a real error")]
fn typed_failure_with_none_sentinel_panics() {
    let _: Outcome<i32> = Outcome::failure(Error::NONE);
}

#[test]
fn success_with_exposes_the_value() {
    let outcome = Outcome::success_with("payload");
    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&"payload"));
    assert_eq!(outcome.into_value(), Some("payload"));
}

#[test]
fn failed_outcome_has_no_value() {
    let outcome: Outcome<i32> =
        Outcome::failure(Error::problem("Order.Rejected", "Business rule failed."));
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.into_value(), None);
}

#[test]
fn from_value_maps_absence_to_null_value_failure() {
    let present = Outcome::from_value(Some(5));
    assert!(present.is_success());
    assert_eq!(present.value(), Some(&5));

    let absent: Outcome<i32> = Outcome::from_value(None);
    assert!(absent.is_failure());
    assert_eq!(absent.error(), &Error::NULL_VALUE);
}

#[test]
fn from_bool_true_is_success() {
    assert!(Outcome::from_bool(true).is_success());
}

#[test]
#[should_panic(expected = "no failure mapping")]
fn from_bool_false_panics() {
    let _ = Outcome::from_bool(false);
}

#[test]
fn match_with_on_success_runs_only_the_success_arm() {
    let mut failure_ran = false;
    let doubled = Outcome::success_with(5).match_with(
        |x| x * 2,
        |_failed| {
            failure_ran = true;
            0
        },
    );

    assert_eq!(doubled, 10);
    assert!(!failure_ran);
}

#[test]
fn match_with_on_failure_receives_the_whole_outcome() {
    let mut success_ran = false;
    let outcome: Outcome<i32> =
        Outcome::failure(Error::not_found("User.NotFound", "No user matches the supplied id."));

    let code = outcome.match_with(
        |_value| {
            success_ran = true;
            String::new()
        },
        |failed| failed.error().code().to_owned(),
    );

    assert_eq!(code, "User.NotFound");
    assert!(!success_ran);
}

#[test]
fn match_with_on_unit_success_passes_unit() {
    let label = Outcome::success().match_with(|()| "ok", |_| "failed");
    assert_eq!(label, "ok");
}

#[test]
fn into_result_bridges_both_states() {
    assert_eq!(Outcome::success_with(7).into_result(), Ok(7));

    let error = Error::problem("Order.Rejected", "Business rule failed.");
    let failed: Outcome<i32> = Outcome::failure(error.clone());
    assert_eq!(failed.into_result(), Err(error));
}

#[test]
fn outcomes_propagate_through_question_mark() {
    fn parse_positive(input: i32) -> Outcome<i32> {
        if input > 0 {
            Outcome::success_with(input)
        } else {
            Outcome::failure(Error::problem("Input.NotPositive", "Expected a positive number."))
        }
    }

    fn double_positive(input: i32) -> Result<i32, Error> {
        let value = parse_positive(input).into_result()?;
        Ok(value * 2)
    }

    assert_eq!(double_positive(4), Ok(8));
    assert_eq!(
        double_positive(-1).unwrap_err().code(),
        "Input.NotPositive"
    );
}
