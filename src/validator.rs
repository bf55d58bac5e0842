//! Move smart-contract validation backed by the generative backend.
//!
//! The backend is asked for a structured audit report. When its output is
//! not parseable JSON the caller still gets a usable report carrying a
//! single critical issue about the parse failure.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::extract::extract_json_or;
use crate::synthesis::{Generative, SynthesisError};
use crate::synthesis::prompt::audit_prompt;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Move contract code is required")]
    EmptyContract,

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Structured audit report for a Move contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationReport {
    pub overall_status: String,
    pub summary: String,
    pub line_count: usize,
    pub issues: Vec<ValidationIssue>,
    pub security_checks: Vec<SecurityCheck>,
    pub best_practices: Vec<BestPractice>,
    pub gas_optimization: GasOptimization,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub line: usize,
    pub title: String,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityCheck {
    pub check: String,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BestPractice {
    pub practice: String,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GasOptimization {
    pub status: String,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    /// Report used when the backend's answer cannot be parsed. Carries one
    /// critical issue so downstream consumers never see an empty report.
    pub fn fallback(contract_code: &str) -> Self {
        Self {
            overall_status: "ERROR".to_string(),
            summary: "Failed to parse validation results".to_string(),
            line_count: contract_code.lines().count(),
            issues: vec![ValidationIssue {
                kind: "ERROR".to_string(),
                severity: "CRITICAL".to_string(),
                line: 1,
                title: "Validation Error".to_string(),
                description: "Unable to parse validation results".to_string(),
                suggestion: "Please try again".to_string(),
            }],
            security_checks: Vec::new(),
            best_practices: Vec::new(),
            gas_optimization: GasOptimization {
                status: "UNKNOWN".to_string(),
                suggestions: Vec::new(),
            },
            recommendations: vec!["Try again or check code format".to_string()],
        }
    }
}

/// Runs contract audits through the generative backend.
#[derive(Debug, Clone)]
pub struct ContractValidator {
    backend: Arc<dyn Generative>,
}

impl ContractValidator {
    pub fn new(backend: Arc<dyn Generative>) -> Self {
        Self { backend }
    }

    /// Validate a Move contract. Empty input is rejected before any backend
    /// call; an unreachable backend fails the request; unparsable backend
    /// output is recovered into a fallback report.
    pub async fn validate(&self, contract_code: &str) -> Result<ValidationReport, ValidateError> {
        if contract_code.trim().is_empty() {
            return Err(ValidateError::EmptyContract);
        }

        let prompt = audit_prompt(contract_code);
        let raw = self.backend.generate(&prompt).await?;
        Ok(extract_json_or(&raw, || {
            ValidationReport::fallback(contract_code)
        }))
    }
}
