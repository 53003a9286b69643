use crate::{Membership, Role};

use uuid::Uuid;

#[test]
fn test_new_membership_keeps_account_and_user() {
    let account_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let membership = Membership::new(account_id, user_id, Role::Member);

    assert_eq!(membership.account_id, account_id);
    assert_eq!(membership.user_id, user_id);
    assert_eq!(membership.role, Role::Member);
    assert!(!membership.is_owner());
}

#[test]
fn test_owner_membership_is_owner() {
    let membership = Membership::new(Uuid::new_v4(), Uuid::new_v4(), Role::Owner);
    assert!(membership.is_owner());
}
