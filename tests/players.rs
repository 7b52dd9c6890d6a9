//! Display-name normalization rules.

use codenames_server::error::ApiError;
use codenames_server::http::players::{normalize_name, MAX_NAME_LEN};

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(normalize_name("  Alice \t").unwrap(), "Alice");
}

#[test]
fn inner_whitespace_is_preserved() {
    assert_eq!(normalize_name("Mary Ann").unwrap(), "Mary Ann");
}

#[test]
fn empty_and_whitespace_only_names_are_rejected() {
    for raw in ["", "   ", "\t\n"] {
        assert!(matches!(
            normalize_name(raw).unwrap_err(),
            ApiError::Validation(_)
        ));
    }
}

#[test]
fn max_length_is_enforced_after_trimming() {
    let exact = "x".repeat(MAX_NAME_LEN);
    assert_eq!(normalize_name(&exact).unwrap(), exact);

    let padded = format!("  {exact}  ");
    assert_eq!(normalize_name(&padded).unwrap(), exact);

    let too_long = "x".repeat(MAX_NAME_LEN + 1);
    assert!(matches!(
        normalize_name(&too_long).unwrap_err(),
        ApiError::Validation(_)
    ));
}
