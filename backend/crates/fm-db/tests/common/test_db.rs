use fm_core::{Account, Membership, Role};
use fm_db::{AccountRepository, MembershipRepository, run_migrations};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a team account and returns it
pub async fn create_test_account(pool: &SqlitePool, slug: &str) -> Account {
    let account = Account::new_team(format!("Account {}", slug), slug.to_string());
    AccountRepository::new(pool.clone())
        .create(&account)
        .await
        .expect("Failed to create test account");
    account
}

/// Grants `user_id` the given role on `account_id`
pub async fn add_test_member(pool: &SqlitePool, account_id: Uuid, user_id: Uuid, role: Role) {
    MembershipRepository::new(pool.clone())
        .create(&Membership::new(account_id, user_id, role))
        .await
        .expect("Failed to create test membership");
}
