//! Employee onboarding: form checks, account provisioning and mentor assignment.
//!
//! The account service is optional. `provisioning::provision_with_fallback`
//! always produces an account: remote when it answers, local otherwise.

pub mod handlers;
pub mod mentors;
pub mod provisioning;
pub mod validation;

use serde::{Deserialize, Serialize};

/// New-hire form as submitted by the onboarding page. Every field is free text
/// and may be blank; `validation::validate_form` decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingForm {
    // Personal
    pub full_name: String,
    pub personal_email: String,
    pub phone: String,
    pub address: String,
    pub dob: String,
    // Employment
    pub position_title: String,
    pub department: String,
    pub start_date: String,
    pub employment_type: String,
    pub manager_name: String,
    pub education_highest: String,
    /// Comma-or-pipe list.
    pub skills: String,
    /// Comma-or-pipe list.
    pub languages: String,
    // Payroll
    pub bank_name: String,
    pub bank_account: String,
    pub tax_id: String,
    // Emergency contact
    pub em_name: String,
    pub em_relation: String,
    pub em_phone: String,
    // Preferences
    pub tshirt: String,
    pub dietary: String,
    // Account
    pub preferred_username: String,
    pub preferred_password: String,
}
