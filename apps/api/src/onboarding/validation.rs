use chrono::NaiveDate;
use thiserror::Error;

use crate::errors::AppError;
use crate::models::candidate::EducationLevel;
use crate::onboarding::OnboardingForm;

pub const MIN_PASSWORD_CHARS: usize = 6;
const ACCOUNT_DOMAIN: &str = "gmail.com";

#[derive(Debug, Error, PartialEq)]
pub enum OnboardingError {
    #[error("Please fill required fields:\n- {}", .0.join("\n- "))]
    MissingFields(Vec<&'static str>),

    #[error("Preferred Gmail Password must be at least {} characters.", MIN_PASSWORD_CHARS)]
    PasswordTooShort,

    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate { field: &'static str },

    #[error("Unknown education level '{0}'")]
    UnknownEducation(String),
}

impl From<OnboardingError> for AppError {
    fn from(e: OnboardingError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Checked dates pulled out of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDates {
    pub start_date: NaiveDate,
    pub dob: Option<NaiveDate>,
}

fn required_fields(form: &OnboardingForm) -> [(&str, &'static str); 10] {
    [
        (form.full_name.as_str(), "Full Name"),
        (form.personal_email.as_str(), "Personal Email"),
        (form.phone.as_str(), "Phone"),
        (form.position_title.as_str(), "Position Title"),
        (form.department.as_str(), "Department"),
        (form.start_date.as_str(), "Start Date"),
        (form.preferred_username.as_str(), "Preferred Gmail Username"),
        (form.preferred_password.as_str(), "Preferred Gmail Password"),
        (form.em_name.as_str(), "Emergency Contact Name"),
        (form.em_phone.as_str(), "Emergency Contact Phone"),
    ]
}

/// Runs all form checks, reporting every missing field at once.
pub fn validate_form(form: &OnboardingForm) -> Result<ValidatedDates, OnboardingError> {
    let missing: Vec<&'static str> = required_fields(form)
        .into_iter()
        .filter(|(value, _)| value.trim().is_empty())
        .map(|(_, label)| label)
        .collect();
    if !missing.is_empty() {
        return Err(OnboardingError::MissingFields(missing));
    }

    if form.preferred_password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(OnboardingError::PasswordTooShort);
    }

    let education = form.education_highest.trim();
    if !education.is_empty() && EducationLevel::parse(education).is_none() {
        return Err(OnboardingError::UnknownEducation(education.to_string()));
    }

    let start_date = parse_date(form.start_date.as_str(), "Start Date")?;
    let dob = match form.dob.trim() {
        "" => None,
        raw => Some(parse_date(raw, "Date of Birth")?),
    };

    Ok(ValidatedDates { start_date, dob })
}

fn parse_date(raw: &str, field: &'static str) -> Result<NaiveDate, OnboardingError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| OnboardingError::InvalidDate { field })
}

/// Trim, lowercase, collapse each whitespace run into a single dot.
pub fn sanitize_username(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}

pub fn account_email(preferred_username: &str) -> String {
    format!("{}@{ACCOUNT_DOMAIN}", sanitize_username(preferred_username))
}
