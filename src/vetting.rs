//! Consultant profile vetting backed by the generative backend.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::extract::extract_json_or;
use crate::models::Confidence;
use crate::synthesis::prompt::vetting_prompt;
use crate::synthesis::{Generative, SynthesisError};

#[derive(Debug, Error)]
pub enum VetError {
    #[error("Missing required fields")]
    MissingFields,

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Consultant application submitted for vetting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsultantProfile {
    pub full_name: String,
    pub email: String,
    pub expertise: String,
    pub experience: String,
    pub hourly_rate: String,
    pub location: String,
    pub languages: Vec<String>,
    pub specialties: Vec<String>,
    pub description: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
}

impl ConsultantProfile {
    fn has_required_fields(&self) -> bool {
        ![
            &self.full_name,
            &self.email,
            &self.expertise,
            &self.experience,
            &self.hourly_rate,
            &self.location,
        ]
        .iter()
        .any(|f| f.trim().is_empty())
    }

    /// Render the profile as the detail list the vetting prompt embeds.
    pub fn summary(&self) -> String {
        let join_or = |items: &[String]| {
            if items.is_empty() {
                "Not specified".to_string()
            } else {
                items.join(", ")
            }
        };
        let or_missing =
            |value: &Option<String>| value.clone().unwrap_or_else(|| "Not provided".to_string());

        format!(
            "- Name: {}\n\
             - Email: {}\n\
             - Expertise: {}\n\
             - Experience: {}\n\
             - Hourly Rate: {}\n\
             - Location: {}\n\
             - Languages: {}\n\
             - Specialties: {}\n\
             - Description: {}\n\
             - LinkedIn: {}\n\
             - GitHub: {}\n\
             - Portfolio: {}",
            self.full_name,
            self.email,
            self.expertise,
            self.experience,
            self.hourly_rate,
            self.location,
            join_or(&self.languages),
            join_or(&self.specialties),
            or_missing(&self.description),
            or_missing(&self.linkedin_url),
            or_missing(&self.github_url),
            or_missing(&self.portfolio_url),
        )
    }
}

/// Vetting verdict for a consultant application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VettingRecord {
    pub is_approved: bool,
    pub confidence: Confidence,
    pub rating: f64,
    pub verification_status: String,
    pub expertise_level: String,
    pub recommendations: Vec<String>,
    pub validation_notes: String,
    pub suggested_specialties: Vec<String>,
    pub profile_enhancement: String,
}

impl VettingRecord {
    /// Provisional approval used when the backend's answer cannot be
    /// parsed. The applicant is let through in PENDING state rather than
    /// bounced on an infrastructure hiccup.
    pub fn fallback(profile: &ConsultantProfile) -> Self {
        Self {
            is_approved: true,
            confidence: Confidence::Medium,
            rating: 4.0,
            verification_status: "PENDING".to_string(),
            expertise_level: "INTERMEDIATE".to_string(),
            recommendations: vec!["Complete your profile with more details".to_string()],
            validation_notes: "Profile submitted successfully".to_string(),
            suggested_specialties: profile.specialties.clone(),
            profile_enhancement: "Add more details about your Web3 experience".to_string(),
        }
    }
}

/// Runs consultant applications through the generative backend.
#[derive(Debug, Clone)]
pub struct ProfileVetting {
    backend: Arc<dyn Generative>,
}

impl ProfileVetting {
    pub fn new(backend: Arc<dyn Generative>) -> Self {
        Self { backend }
    }

    pub async fn vet(&self, profile: &ConsultantProfile) -> Result<VettingRecord, VetError> {
        if !profile.has_required_fields() {
            return Err(VetError::MissingFields);
        }

        let prompt = vetting_prompt(&profile.summary());
        let raw = self.backend.generate(&prompt).await?;
        Ok(extract_json_or(&raw, || VettingRecord::fallback(profile)))
    }
}
