use super::domain::{
    NewRemediationAction, NewRisk, NewWorkUnit, RemediationAction, Risk, RiskId, WorkUnit,
    WorkUnitId,
};

/// Storage abstraction for the record types the engine creates or deletes.
/// Persistence itself (schema, querying, concurrency control) belongs to the
/// caller; each create is independently committed and returns the stored
/// record with its assigned id.
pub trait PreventionRepository: Send + Sync {
    fn create_unit(&self, unit: NewWorkUnit) -> Result<WorkUnit, RepositoryError>;
    fn create_risk(&self, risk: NewRisk) -> Result<Risk, RepositoryError>;
    fn create_action(&self, action: NewRemediationAction)
        -> Result<RemediationAction, RepositoryError>;
    fn units(&self) -> Result<Vec<WorkUnit>, RepositoryError>;
    fn risks(&self) -> Result<Vec<Risk>, RepositoryError>;
    fn risks_for_unit(&self, unit: &WorkUnitId) -> Result<Vec<Risk>, RepositoryError>;
    fn delete_risk(&self, risk: &RiskId) -> Result<(), RepositoryError>;
    fn delete_unit(&self, unit: &WorkUnitId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
