//! Suggestion batches produced by the external advisory service.
//!
//! The core never calls that service: it receives its output already shaped
//! into proposed units/risks/actions with pass-through rationale text, lets
//! the caller flag each entry accepted or skipped, and applies the accepted
//! subset in dependency order against the persistence layer.

mod applier;
mod parser;

pub use applier::apply_suggestion_batch;
pub use parser::{batch_from_path, batch_from_reader, batch_from_str};

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::duerp::cotation::{Frequency, Gravity, Mastery};
use super::duerp::domain::{ActionPriority, ActionType, HazardClass, RiskCategory};

/// A reviewable batch of proposed records. Every entry starts unaccepted;
/// the caller flips the flags before applying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBatch {
    #[serde(default)]
    pub units: Vec<ProposedUnit>,
    #[serde(default)]
    pub risks: Vec<ProposedRisk>,
}

impl SuggestionBatch {
    /// Flag every unit, risk, and nested action as accepted.
    pub fn accept_all(&mut self) {
        for unit in &mut self.units {
            unit.accepted = true;
        }
        for risk in &mut self.risks {
            risk.accepted = true;
            for action in &mut risk.actions {
                action.accepted = true;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedUnit {
    pub code: String,
    pub name: String,
    pub headcount: Option<u32>,
    pub job_titles: Option<String>,
    /// Advisory-service justification, passed through verbatim for display.
    pub rationale: Option<String>,
    #[serde(default)]
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedRisk {
    pub category: RiskCategory,
    pub hazard: String,
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub consequences: String,
    #[serde(default)]
    pub existing_measures: String,
    /// Code of a proposed or pre-existing unit; unresolvable codes leave the
    /// created risk unattached rather than failing it.
    pub unit_code: Option<String>,
    #[serde(default)]
    pub hazard_classes: BTreeSet<HazardClass>,
    pub frequency: Option<Frequency>,
    pub gravity: Option<Gravity>,
    pub mastery: Option<Mastery>,
    #[serde(default)]
    pub actions: Vec<ProposedAction>,
    pub rationale: Option<String>,
    #[serde(default)]
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedAction {
    pub description: String,
    pub action_type: ActionType,
    pub priority: ActionPriority,
    pub responsible: Option<String>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub accepted: bool,
}

/// Terminal state of an applied batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Applied,
    PartiallyApplied,
}

/// Structured result of one apply pass: what was actually created, which
/// unit references could not be resolved, and which items failed. Counts and
/// failures are reported together; a partial batch never discards the tally
/// of what did succeed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub status: BatchStatus,
    pub units_created: usize,
    pub risks_created: usize,
    pub actions_created: usize,
    /// Referenced unit codes that matched nothing; the risks were created
    /// unattached so a human can re-link them later.
    pub unresolved_unit_codes: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchFailure {
    pub item: BatchItem,
    pub error: String,
}

/// Identity of a failed batch entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchItem {
    Unit { code: String },
    Risk { hazard: String },
    Action { description: String },
}

/// Total-failure channel: raised only when the persistence layer is already
/// unreachable before any create is attempted.
#[derive(Debug, thiserror::Error)]
pub enum BatchApplyError {
    #[error("persistence layer unreachable: {0}")]
    Unavailable(String),
}

/// Error raised while reading an advisory payload.
#[derive(Debug)]
pub enum AdvisoryImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for AdvisoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryImportError::Io(err) => write!(f, "failed to read advisory payload: {}", err),
            AdvisoryImportError::Json(err) => write!(f, "invalid advisory payload: {}", err),
        }
    }
}

impl std::error::Error for AdvisoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdvisoryImportError::Io(err) => Some(err),
            AdvisoryImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AdvisoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for AdvisoryImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
