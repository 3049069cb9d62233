use std::io::Read;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::workflows::advisory::{
    apply_suggestion_batch, BatchApplyError, BatchOutcome, SuggestionBatch,
};
use crate::workflows::roster::{RosterImportError, RosterImporter};

use super::catalogue::Catalogue;
use super::conformity::conformity_percent;
use super::domain::{
    CertificationRecord, EquipmentItem, SiteProfile, VerificationRecord, WorkUnitId,
};
use super::obligations::{ObligationAssessment, ObligationEngine};
use super::report::{build_report, PreventionReport};
use super::repository::{PreventionRepository, RepositoryError};

/// Service composing the catalogue, the obligation engine, and a repository.
///
/// Risks and units live behind the repository; equipment, certification, and
/// verification collections are supplied by the caller per invocation, since
/// their persistence belongs to the surrounding records tool.
pub struct PreventionService<R> {
    catalogue: Arc<Catalogue>,
    repository: Arc<R>,
    engine: ObligationEngine,
}

impl<R> PreventionService<R>
where
    R: PreventionRepository + 'static,
{
    pub fn new(catalogue: Arc<Catalogue>, repository: Arc<R>) -> Self {
        let engine = ObligationEngine::new(catalogue.clone());
        Self {
            catalogue,
            repository,
            engine,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Run the obligation inference over the stored risks and units.
    pub fn assess(
        &self,
        profile: &SiteProfile,
    ) -> Result<ObligationAssessment, PreventionServiceError> {
        let risks = self.repository.risks()?;
        let units = self.repository.units()?;
        Ok(self.engine.assess(&risks, &units, profile))
    }

    /// Aggregate conformity percentage for the caller-supplied collections.
    pub fn conformity(
        &self,
        profile: &SiteProfile,
        equipment: &[EquipmentItem],
        certifications: &[CertificationRecord],
        today: NaiveDate,
    ) -> Result<u8, PreventionServiceError> {
        let assessment = self.assess(profile)?;
        Ok(conformity_percent(
            &assessment,
            equipment,
            certifications,
            &self.catalogue,
            today,
        ))
    }

    /// Full dashboard report over a fresh assessment.
    pub fn report(
        &self,
        profile: &SiteProfile,
        equipment: &[EquipmentItem],
        certifications: &[CertificationRecord],
        verifications: &[VerificationRecord],
        today: NaiveDate,
    ) -> Result<PreventionReport, PreventionServiceError> {
        let risks = self.repository.risks()?;
        let units = self.repository.units()?;
        let assessment = self.engine.assess(&risks, &units, profile);
        Ok(build_report(
            &self.catalogue,
            &assessment,
            &risks,
            equipment,
            certifications,
            verifications,
            today,
        ))
    }

    /// Apply the accepted subset of an advisory batch.
    pub fn apply_suggestions(
        &self,
        batch: &SuggestionBatch,
    ) -> Result<BatchOutcome, PreventionServiceError> {
        Ok(apply_suggestion_batch(self.repository.as_ref(), batch)?)
    }

    /// Blast radius of deleting a unit, to be inspected before `delete_unit`.
    pub fn unit_deletion_impact(
        &self,
        unit: &WorkUnitId,
    ) -> Result<DeletionImpact, PreventionServiceError> {
        let risk_count = self.repository.risks_for_unit(unit)?.len();
        Ok(DeletionImpact { risk_count })
    }

    /// Delete a unit and its risks. Refused unless the caller confirmed the
    /// cascade after inspecting `unit_deletion_impact`.
    pub fn delete_unit(
        &self,
        unit: &WorkUnitId,
        cascade_confirmed: bool,
    ) -> Result<DeletionImpact, PreventionServiceError> {
        let risks = self.repository.risks_for_unit(unit)?;
        if !risks.is_empty() && !cascade_confirmed {
            return Err(PreventionServiceError::CascadeNotConfirmed {
                risk_count: risks.len(),
            });
        }

        for risk in &risks {
            self.repository.delete_risk(&risk.id)?;
        }
        self.repository.delete_unit(unit)?;
        info!(unit = %unit.0, risks = risks.len(), "work unit deleted with cascade");

        Ok(DeletionImpact {
            risk_count: risks.len(),
        })
    }

    /// Import a staff training roster CSV against this service's catalogue.
    pub fn import_roster<Rd: Read>(
        &self,
        reader: Rd,
    ) -> Result<Vec<CertificationRecord>, PreventionServiceError> {
        Ok(RosterImporter::from_reader(reader, &self.catalogue)?)
    }
}

/// Count of risks a unit deletion would cascade to (or did delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletionImpact {
    pub risk_count: usize,
}

/// Error raised by the prevention service.
#[derive(Debug, thiserror::Error)]
pub enum PreventionServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Batch(#[from] BatchApplyError),
    #[error(transparent)]
    Roster(#[from] RosterImportError),
    #[error("deleting this unit would cascade to {risk_count} risk(s); explicit confirmation required")]
    CascadeNotConfirmed { risk_count: usize },
}
