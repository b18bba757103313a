//! Demo login. Three fixed accounts, compared verbatim.

pub mod handlers;

use crate::models::user::{DemoAccount, Role};

pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        username: "new",
        password: "new123",
        role: Role::New,
    },
    DemoAccount {
        username: "user",
        password: "user123",
        role: Role::User,
    },
    DemoAccount {
        username: "hr",
        password: "hr123",
        role: Role::Hr,
    },
];

/// Role for a matching username/password pair. Case-sensitive, no trimming.
pub fn authenticate(username: &str, password: &str) -> Option<Role> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.username == username && a.password == password)
        .map(|a| a.role)
}
