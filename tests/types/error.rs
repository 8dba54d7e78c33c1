use simple_result::{Error, ErrorKind};

#[test]
fn factories_set_code_description_and_kind() {
    let cases = [
        (
            Error::problem("Order.Rejected", "Business rule failed."),
            ErrorKind::Problem,
        ),
        (
            Error::not_found("Order.NotFound", "No such order."),
            ErrorKind::NotFound,
        ),
        (
            Error::conflict("Order.Duplicate", "Order already exists."),
            ErrorKind::Conflict,
        ),
    ];

    for (error, expected_kind) in cases {
        assert_eq!(error.kind(), expected_kind);
        assert!(error.code().starts_with("Order."));
        assert!(!error.description().is_empty());
        assert!(error.validation_errors().is_none());
    }
}

#[test]
fn unknown_factory_sets_unknown_kind() {
    let error = Error::unknown("Server.Crash", "The cache layer fell over.");
    assert_eq!(error.kind(), ErrorKind::Unknown);
    assert_eq!(error.code(), "Server.Crash");
}

#[test]
fn sentinels_are_distinct_none_tagged_values() {
    assert_eq!(Error::NONE.kind(), ErrorKind::None);
    assert_eq!(Error::NONE.code(), "None");
    assert!(Error::NONE.is_none());

    assert_eq!(Error::NULL_VALUE.kind(), ErrorKind::None);
    assert_eq!(Error::NULL_VALUE.code(), "Error.NullValue");
    assert!(!Error::NULL_VALUE.is_none());

    assert_ne!(Error::NONE, Error::NULL_VALUE);
}

#[test]
fn factory_output_is_never_the_none_sentinel() {
    assert!(!Error::problem("None", "None").is_none());
}

#[test]
fn display_joins_code_and_description() {
    let error = Error::not_found("User.NotFound", "No user matches the supplied id.");
    assert_eq!(
        error.to_string(),
        "User.NotFound: No user matches the supplied id."
    );
}

#[test]
#[should_panic(expected = "non-empty code and description")]
fn problem_with_empty_code_panics() {
    let _ = Error::problem("", "described");
}

#[test]
#[should_panic(expected = "non-empty code and description")]
fn not_found_with_empty_description_panics() {
    let _ = Error::not_found("User.NotFound", "");
}

#[test]
#[should_panic(expected = "non-empty code and description")]
fn conflict_with_empty_code_panics() {
    let _ = Error::conflict("", "");
}

#[test]
#[should_panic(expected = "non-empty code")]
fn validation_with_empty_code_panics() {
    let _ = Error::validation("");
}

#[test]
fn validation_factory_starts_empty_with_fixed_description() {
    let validation = Error::validation("User.Invalid");
    assert!(!validation.has_errors());
    assert!(validation.validation_errors().is_none());
    assert_eq!(validation.code(), "User.Invalid");
    assert_eq!(
        validation.description(),
        "One or more validation errors occurred."
    );
}

#[test]
fn frozen_validation_error_reports_validation_kind() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_property_errors("Email", ["Required"]);

    let error = Error::from(validation);
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.code(), "User.Invalid");
    assert_eq!(
        error.description(),
        "One or more validation errors occurred."
    );
}
