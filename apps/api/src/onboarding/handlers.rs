use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, EducationEntry, EducationLevel};
use crate::onboarding::mentors::Mentor;
use crate::onboarding::provisioning::{provision_with_fallback, ProvisionSource};
use crate::onboarding::validation::validate_form;
use crate::onboarding::OnboardingForm;
use crate::state::AppState;

/// Confirmation shown after a successful submission. The password is never
/// echoed back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub full_name: String,
    pub position_title: String,
    pub department: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    pub username: String,
    pub account_email: String,
    pub mentor: Mentor,
    pub source: ProvisionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Candidate-shaped view of the new hire, not added to the working set.
    pub profile: Candidate,
}

/// POST /api/v1/onboarding
pub async fn handle_onboarding(
    State(state): State<AppState>,
    Json(form): Json<OnboardingForm>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let dates = validate_form(&form)?;
    let outcome = provision_with_fallback(state.provisioner.as_ref(), &form).await;

    info!(
        username = %outcome.account.username,
        mentor = %outcome.account.mentor.name,
        source = ?outcome.source,
        "New hire onboarded"
    );

    Ok(Json(OnboardingResponse {
        profile: profile_from_form(&form, &outcome.account.username),
        full_name: form.full_name.trim().to_string(),
        position_title: form.position_title.trim().to_string(),
        department: form.department.trim().to_string(),
        start_date: dates.start_date,
        dob: dates.dob,
        username: outcome.account.username,
        account_email: outcome.account.email,
        mentor: outcome.account.mentor,
        source: outcome.source,
        notice: outcome.notice,
    }))
}

fn profile_from_form(form: &OnboardingForm, username: &str) -> Candidate {
    let education = EducationLevel::parse(&form.education_highest)
        .map(|level| EducationEntry {
            level: level.label().to_string(),
            ..Default::default()
        })
        .into_iter()
        .collect();

    Candidate {
        id: format!("NEW-{username}"),
        name: form.full_name.trim().to_string(),
        email: form.personal_email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        location: form.address.trim().to_string(),
        education,
        skills: split_list(&form.skills),
        languages: split_list(&form.languages),
        summary: form.position_title.trim().to_string(),
        ..Default::default()
    }
}

/// Comma-or-pipe list with the user's casing kept.
fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
