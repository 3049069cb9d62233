//! Workplace risk & compliance scoring.
//!
//! The single-assessment document workflow: reference catalogue, risk
//! cotation, obligation inference, lifecycle status derivation, conformity
//! aggregation, and the service facade tying them to a repository. All the
//! scoring components are pure functions over caller-supplied collections;
//! outputs are cheap to recompute and are never cached.

pub mod catalogue;
pub mod conformity;
pub mod cotation;
pub mod domain;
pub mod obligations;
pub mod report;
pub mod repository;
pub mod service;
pub mod status;

#[cfg(test)]
mod tests;

pub use catalogue::{Catalogue, CertificationTypeDef, EquipmentTypeDef, VerificationTypeDef};
pub use conformity::{conformity_breakdown, conformity_percent, ConformityBreakdown};
pub use cotation::{raw_score, residual_score, Frequency, Gravity, Mastery, RiskLevel};
pub use domain::{
    ActionPriority, ActionStatus, ActionType, CertificationRecord, EquipmentCategory,
    EquipmentItem, EquipmentStatus, HazardClass, NewRemediationAction, NewRisk, NewWorkUnit,
    RemediationAction, Risk, RiskCategory, RiskId, Sector, SiteProfile, VerificationRecord,
    WorkUnit, WorkUnitId,
};
pub use obligations::{
    AlertSeverity, EquipmentObligation, ObligationAssessment, ObligationEngine,
    ObligationPriority, PreventionAlert, TrainingObligation,
};
pub use report::{build_report, ConformityLevel, PreventionReport};
pub use repository::{PreventionRepository, RepositoryError};
pub use service::{DeletionImpact, PreventionService, PreventionServiceError};
pub use status::{
    certification_status, equipment_computed_status, equipment_effective_status,
    verification_overdue, CertificationStatus, EXPIRY_WARNING_DAYS,
};
