//! Profile Auditor — turns a profile into a recruiter-style critique by
//! delegating to the text generator.
//!
//! Failures never reach the caller as errors. `try_audit` reports the reason
//! as an `AuditError`; `audit` maps each reason to its fixed user-facing
//! string.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::audit::gate::AuditGate;
use crate::audit::prompts::build_audit_prompt;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::profile::Profile;

pub const NO_CREDENTIAL_MESSAGE: &str =
    "error: no api key detected. cannot perform proof of work check.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "network congestion. could not retrieve audit.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "transaction failed. ai node offline.";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("no API credential configured")]
    NoCredential,

    #[error("generation request failed: {0}")]
    TransportFailure(#[from] LlmError),

    #[error("generation service returned no text")]
    EmptyResponse,
}

impl AuditError {
    /// The fixed message shown in place of an audit.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AuditError::NoCredential => NO_CREDENTIAL_MESSAGE,
            AuditError::TransportFailure(_) => TRANSPORT_FAILURE_MESSAGE,
            AuditError::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
        }
    }

    pub fn outcome(&self) -> AuditOutcome {
        match self {
            AuditError::NoCredential => AuditOutcome::NoCredential,
            AuditError::TransportFailure(_) => AuditOutcome::TransportFailure,
            AuditError::EmptyResponse => AuditOutcome::EmptyResponse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Ok,
    NoCredential,
    TransportFailure,
    EmptyResponse,
}

/// What the builder's audit panel displays.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Verbatim service text, or the fallback string.
    pub text: String,
    /// `text` lowercased, as rendered in the audit log panel.
    pub display: String,
    pub outcome: AuditOutcome,
    pub audited_at: DateTime<Utc>,
}

/// The single mapping from an audit result to displayable text.
fn resolve(result: Result<String, AuditError>) -> (String, AuditOutcome) {
    match result {
        Ok(text) => (text, AuditOutcome::Ok),
        Err(e) => (e.fallback_message().to_string(), e.outcome()),
    }
}

impl AuditReport {
    fn from_result(result: Result<String, AuditError>) -> Self {
        let (text, outcome) = resolve(result);
        Self {
            display: text.to_lowercase(),
            text,
            outcome,
            audited_at: Utc::now(),
        }
    }
}

pub struct Auditor {
    generator: Arc<dyn TextGenerator>,
    gate: AuditGate,
}

impl Auditor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            gate: AuditGate::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// One audit with the failure reason kept explicit.
    pub async fn try_audit(&self, profile: &Profile) -> Result<String, AuditError> {
        if !self.generator.available() {
            return Err(AuditError::NoCredential);
        }

        let prompt = build_audit_prompt(profile);
        match self.generator.generate(&prompt).await {
            Ok(Some(text)) if !text.is_empty() => Ok(text),
            Ok(_) => Err(AuditError::EmptyResponse),
            Err(e) => {
                error!("Gemini audit failed: {e}");
                Err(AuditError::TransportFailure(e))
            }
        }
    }

    /// `audit(profile) -> text`. Always returns a displayable string.
    #[allow(dead_code)]
    pub async fn audit(&self, profile: &Profile) -> String {
        resolve(self.try_audit(profile).await).0
    }

    /// Runs an audit unless one is already outstanding, in which case no
    /// request is made and `None` is returned.
    pub async fn audit_exclusive(&self, profile: &Profile) -> Option<AuditReport> {
        let Some(_permit) = self.gate.try_acquire() else {
            warn!("Audit requested while another is in flight; ignoring");
            return None;
        };

        info!(
            "Auditing profile: {} experience entries, {} skills",
            profile.experience.len(),
            profile.skills.len()
        );
        Some(AuditReport::from_result(self.try_audit(profile).await))
    }
}
