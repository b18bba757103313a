use serde::{Deserialize, Serialize};

/// Demo roles. Each one lands on a different part of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// New hire: onboarding only.
    New,
    /// Regular employee: home page, no screener.
    User,
    /// Recruiter: full screener access.
    Hr,
}

impl Role {
    pub fn landing(self) -> &'static str {
        match self {
            Role::New => "onboarding",
            Role::User => "home",
            Role::Hr => "screener",
        }
    }

    pub fn can_access_screener(self) -> bool {
        matches!(self, Role::Hr)
    }
}

/// Hardcoded demo credential. Plaintext on purpose: this is not a security boundary.
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
}
