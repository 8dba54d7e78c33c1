use simple_result::{validation, Error, Outcome, ProblemDetails};

fn find_username(id: u32) -> Outcome<String> {
    match id {
        1 => Outcome::success_with("alice".to_string()),
        2 => Outcome::from_value(None),
        _ => Outcome::failure(Error::not_found(
            "User.NotFound",
            "No user matches the supplied id.",
        )),
    }
}

fn register(email: &str, age: i32) -> Outcome<String> {
    let mut check = Error::validation("User.Invalid");
    if !email.contains('@') {
        check.try_add_property_errors("Email", ["InvalidFormat"]);
    }
    if age <= 0 {
        check.try_add_property_errors("Age", ["MustBePositive"]);
    }
    if check.has_errors() {
        return check.into();
    }
    Outcome::success_with(email.to_string())
}

fn main() {
    // Branch on the outcome state with the match combinator.
    for id in [1, 2, 3] {
        let summary = find_username(id).match_with(
            |name| format!("found {name}"),
            |failed| format!("{}", failed.error()),
        );
        println!("lookup {id}: {summary}");
    }

    // Accumulate validation errors and render them for an HTTP boundary.
    let outcome = register("not-an-email", -3);
    if outcome.is_failure() {
        let problem = ProblemDetails::from_outcome(&outcome);
        println!("status {}: {}", problem.status, problem.title);
        for entry in problem.errors.as_deref().unwrap_or_default() {
            println!("  {}: {:?}", entry.name(), entry.messages());
        }
    }

    // The same accumulator, declaratively.
    let declarative = validation!(
        "User.Invalid",
        "Email" => ["Required"],
    );
    println!("declarative entries: {}", declarative.validation_errors().unwrap().len());
}
