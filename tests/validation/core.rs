use simple_result::{Error, Outcome, PropertyError};

#[test]
fn accepted_entries_keep_insertion_and_message_order() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_property_errors("Email", ["Required", "InvalidFormat"]);
    validation.try_add_property_errors("Age", ["MustBePositive"]);

    let entries = validation.validation_errors().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name(), "Email");
    assert_eq!(entries[0].messages(), ["Required", "InvalidFormat"]);
    assert_eq!(entries[1].name(), "Age");
    assert_eq!(entries[1].messages(), ["MustBePositive"]);
}

#[test]
fn first_registration_wins_for_a_repeated_property() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_property_errors("field", ["m1", "m2"]);
    validation.try_add_property_errors("field", ["m3"]);

    let entries = validation.validation_errors().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].messages(), ["m1", "m2"]);
}

#[test]
fn empty_property_name_is_ignored() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_property_errors("", ["Required"]);
    validation.try_add_property_errors("   ", ["Required"]);

    assert!(!validation.has_errors());
    assert!(validation.validation_errors().is_none());
}

#[test]
fn empty_message_list_is_ignored() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_property_errors("Email", Vec::<&str>::new());

    assert!(!validation.has_errors());
}

#[test]
fn whitespace_only_messages_never_form_an_entry() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_property_errors("Email", ["", "   "]);
    assert!(!validation.has_errors());

    validation.try_add_property_errors("Email", ["", "Required"]);
    let entries = validation.validation_errors().unwrap();
    assert_eq!(entries[0].messages(), ["Required"]);
}

#[test]
fn has_errors_tracks_accepted_entries_only() {
    let mut validation = Error::validation("User.Invalid");
    assert!(!validation.has_errors());

    validation.try_add_property_errors("Email", ["Required"]);
    assert!(validation.has_errors());
}

#[test]
fn batch_contributions_apply_the_per_entry_rule() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_all([
        PropertyError::new("Email", ["Required"]),
        PropertyError::new("Email", ["IgnoredDuplicate"]),
        PropertyError::new("Age", Vec::<&str>::new()),
        PropertyError::new("Name", ["TooShort"]),
    ]);

    let entries = validation.validation_errors().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name(), "Email");
    assert_eq!(entries[0].messages(), ["Required"]);
    assert_eq!(entries[1].name(), "Name");
}

#[test]
fn freezing_into_an_outcome_preserves_the_entries() {
    let mut validation = Error::validation("User.Invalid");
    validation.try_add_property_errors("Email", ["Required"]);

    let outcome: Outcome<u32> = validation.into();
    assert!(outcome.is_failure());

    let entries = outcome.error().validation_errors().unwrap();
    assert_eq!(entries[0].name(), "Email");
}

#[test]
fn property_error_accessors_expose_the_contribution() {
    let entry = PropertyError::new("Age", ["MustBePositive", "MustBeAnInteger"]);
    assert_eq!(entry.name(), "Age");
    assert_eq!(entry.messages().len(), 2);
}
