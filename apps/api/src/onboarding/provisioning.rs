//! Account provisioning for new hires.
//!
//! `AppState` carries an `Arc<dyn AccountProvisioner>`: the remote account
//! service when `ACCOUNT_SERVICE_URL` is set, otherwise `LocalProvisioner`.
//! Onboarding never fails because of the remote side; see
//! `provision_with_fallback`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::onboarding::mentors::{match_mentor, Mentor, MentorProfile};
use crate::onboarding::validation::{account_email, sanitize_username};
use crate::onboarding::OnboardingForm;
use crate::screening::normalize::parse_term_list;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Account service returned status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionSource {
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvisionedAccount {
    pub username: String,
    pub email: String,
    pub mentor: Mentor,
}

#[async_trait]
pub trait AccountProvisioner: Send + Sync {
    fn source(&self) -> ProvisionSource;

    async fn provision(&self, form: &OnboardingForm) -> Result<ProvisionedAccount, ProvisionError>;
}

pub fn mentor_profile(form: &OnboardingForm) -> MentorProfile {
    MentorProfile {
        position: form.position_title.clone(),
        skills: parse_term_list(&form.skills),
        languages: parse_term_list(&form.languages),
    }
}

/// Derives the account entirely in-process.
pub fn local_account(form: &OnboardingForm) -> ProvisionedAccount {
    ProvisionedAccount {
        username: sanitize_username(&form.preferred_username),
        email: account_email(&form.preferred_username),
        mentor: match_mentor(&mentor_profile(form)),
    }
}

pub struct LocalProvisioner;

#[async_trait]
impl AccountProvisioner for LocalProvisioner {
    fn source(&self) -> ProvisionSource {
        ProvisionSource::Local
    }

    async fn provision(&self, form: &OnboardingForm) -> Result<ProvisionedAccount, ProvisionError> {
        Ok(local_account(form))
    }
}

/// Reply of `POST {base}/create_user`. Any part may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RemoteAccount {
    username: Option<String>,
    email: Option<String>,
    assigned_mentor: Option<Mentor>,
}

pub struct RemoteProvisioner {
    client: Client,
    endpoint: String,
}

impl RemoteProvisioner {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: create_user_endpoint(base_url),
        })
    }
}

fn create_user_endpoint(base_url: &str) -> String {
    format!("{}/create_user", base_url.trim_end_matches('/'))
}

#[async_trait]
impl AccountProvisioner for RemoteProvisioner {
    fn source(&self) -> ProvisionSource {
        ProvisionSource::Remote
    }

    async fn provision(&self, form: &OnboardingForm) -> Result<ProvisionedAccount, ProvisionError> {
        let response = self.client.post(&self.endpoint).json(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::Status(status.as_u16()));
        }

        let remote: RemoteAccount = response.json().await?;
        debug!(endpoint = %self.endpoint, "Account service responded");
        Ok(merge_remote(remote, form))
    }
}

/// Blank or missing remote fields are filled from the local derivation.
fn merge_remote(remote: RemoteAccount, form: &OnboardingForm) -> ProvisionedAccount {
    let local = local_account(form);
    let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    ProvisionedAccount {
        username: present(remote.username).unwrap_or(local.username),
        email: present(remote.email).unwrap_or(local.email),
        mentor: remote
            .assigned_mentor
            .filter(|m| !m.name.trim().is_empty())
            .unwrap_or(local.mentor),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionOutcome {
    pub account: ProvisionedAccount,
    pub source: ProvisionSource,
    pub notice: Option<String>,
}

/// Tries `provisioner` once; on failure derives the account locally and
/// attaches a notice for the user.
pub async fn provision_with_fallback(
    provisioner: &dyn AccountProvisioner,
    form: &OnboardingForm,
) -> ProvisionOutcome {
    match provisioner.provision(form).await {
        Ok(account) => ProvisionOutcome {
            account,
            source: provisioner.source(),
            notice: None,
        },
        Err(e) => {
            warn!("Account provisioning failed, using local fallback: {e}");
            ProvisionOutcome {
                account: local_account(form),
                source: ProvisionSource::Local,
                notice: Some(format!(
                    "Account service unavailable ({e}). Account details were prepared locally."
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DownProvisioner;

    #[async_trait]
    impl AccountProvisioner for DownProvisioner {
        fn source(&self) -> ProvisionSource {
            ProvisionSource::Remote
        }

        async fn provision(&self, _form: &OnboardingForm) -> Result<ProvisionedAccount, ProvisionError> {
            Err(ProvisionError::Status(503))
        }
    }

    fn form() -> OnboardingForm {
        OnboardingForm {
            position_title: "Product Manager".into(),
            skills: "Cypress, Jira".into(),
            preferred_username: " Divya  Ops ".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_local_provisioner_derives_account() {
        let outcome = provision_with_fallback(&LocalProvisioner, &form()).await;
        assert_eq!(outcome.source, ProvisionSource::Local);
        assert_eq!(outcome.notice, None);
        assert_eq!(outcome.account.username, "divya.ops");
        assert_eq!(outcome.account.email, "divya.ops@gmail.com");
        assert_eq!(outcome.account.mentor.name, "Divya Nair");
    }

    #[tokio::test]
    async fn test_failed_remote_falls_back_with_notice() {
        let outcome = provision_with_fallback(&DownProvisioner, &form()).await;
        assert_eq!(outcome.source, ProvisionSource::Local);
        assert_eq!(outcome.account, local_account(&form()));
        let notice = outcome.notice.unwrap();
        assert!(notice.contains("503"));
    }

    #[test]
    fn test_merge_keeps_remote_values() {
        let remote = RemoteAccount {
            username: Some("d.ops".into()),
            email: Some("d.ops@corp.example".into()),
            assigned_mentor: Some(Mentor {
                name: "Jason Lim".into(),
                email: "jason.lim@company.com".into(),
                dept: "Frontend".into(),
            }),
        };
        let account = merge_remote(remote, &form());
        assert_eq!(account.username, "d.ops");
        assert_eq!(account.email, "d.ops@corp.example");
        assert_eq!(account.mentor.name, "Jason Lim");
    }

    #[test]
    fn test_merge_fills_missing_mentor_locally() {
        let remote: RemoteAccount =
            serde_json::from_str(r#"{"username":"d.ops","email":"  "}"#).unwrap();
        let account = merge_remote(remote, &form());
        assert_eq!(account.username, "d.ops");
        assert_eq!(account.email, "divya.ops@gmail.com");
        assert_eq!(account.mentor.name, "Divya Nair");
    }

    #[test]
    fn test_create_user_endpoint() {
        assert_eq!(create_user_endpoint("http://accounts:5000/"), "http://accounts:5000/create_user");
        assert_eq!(create_user_endpoint("http://accounts:5000"), "http://accounts:5000/create_user");
    }
}
