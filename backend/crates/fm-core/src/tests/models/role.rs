use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Owner.as_str(), "owner");
    assert_eq!(Role::Member.as_str(), "member");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("owner").unwrap(), Role::Owner);
    assert_eq!(Role::from_str("member").unwrap(), Role::Member);
}

#[test]
fn test_role_from_str_rejects_unknown_and_wrong_case() {
    assert!(matches!(
        Role::from_str("admin"),
        Err(CoreError::InvalidRole { .. })
    ));
    assert!(Role::from_str("Owner").is_err());
}

#[test]
fn test_role_display_matches_as_str() {
    assert_eq!(Role::Owner.to_string(), "owner");
    assert_eq!(format!("{}", Role::Member), "member");
}
