//! Integration tests for the prelude module.
//!
//! Verifies that `use terminex_validator::prelude::*` covers a typical
//! service-layer argument check.

use pretty_assertions::assert_eq;
use terminex_validator::prelude::*;

struct CreateTeam {
    name: Option<String>,
    owner: Option<u64>,
    size: i32,
    members: Vec<u64>,
}

fn check_arguments(request: &CreateTeam) -> Result<(), Fault> {
    guard_not_empty!(request.name)?;
    guard_not_null!(request.owner)?;
    guard_in_range!(request.size, 1, 50)?;
    guard_that!(request.members.len() > 50, "too many members")?;
    Ok(())
}

fn check_business_rules(request: &CreateTeam) -> Outcome {
    RuleValidator::new()
        .min_count(&request.members, 2, "a team needs at least two members")
        .add_rule(
            || request.owner.is_some_and(|owner| !request.members.contains(&owner)),
            "the owner must be a member",
        )
        .into_outcome()
}

fn valid_request() -> CreateTeam {
    CreateTeam {
        name: Some("core".to_string()),
        owner: Some(7),
        size: 5,
        members: vec![7, 8],
    }
}

// ============================================================================
// GUARDS
// ============================================================================

#[test]
fn guards_accept_valid_request() {
    assert_eq!(check_arguments(&valid_request()), Ok(()));
}

#[test]
fn guard_names_field_expression() {
    let request = CreateTeam {
        name: Some(String::new()),
        ..valid_request()
    };
    let fault = check_arguments(&request).unwrap_err();
    assert_eq!(fault.parameter(), Some("request.name"));
    assert_eq!(
        fault.to_string(),
        "request.name: string must not be null or empty"
    );
}

#[test]
fn first_failing_guard_wins() {
    let request = CreateTeam {
        owner: None,
        size: 0,
        ..valid_request()
    };
    assert_eq!(
        check_arguments(&request).unwrap_err(),
        Fault::null_argument("request.owner")
    );
}

#[test]
fn range_guard_reports_bounds() {
    let request = CreateTeam {
        size: 51,
        ..valid_request()
    };
    assert_eq!(
        check_arguments(&request).unwrap_err().to_string(),
        "request.size: value 51 must be in the range 1..=50"
    );
}

// ============================================================================
// RULES
// ============================================================================

#[test]
fn rules_pass_for_valid_request() {
    assert!(check_business_rules(&valid_request()).is_success());
}

#[test]
fn rules_report_every_violation() {
    let request = CreateTeam {
        members: vec![8],
        ..valid_request()
    };
    let outcome = check_business_rules(&request);

    assert_eq!(
        outcome.errors(),
        [
            Error::validation("a team needs at least two members"),
            Error::validation("the owner must be a member"),
        ]
    );
    assert_eq!(
        outcome.string_message(),
        "Errors:\n\
         1) Code: 16 - Validation. Reason: a team needs at least two members\n\
         2) Code: 16 - Validation. Reason: the owner must be a member\n"
    );
}
