use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::duerp::catalogue::Catalogue;
use crate::workflows::duerp::cotation::{Frequency, Gravity, Mastery};
use crate::workflows::duerp::domain::{
    ActionId, CertificationRecord, EquipmentItem, HazardClass, NewRemediationAction, NewRisk,
    NewWorkUnit, RemediationAction, Risk, RiskCategory, RiskId, SiteProfile, VerificationRecord,
    WorkUnit, WorkUnitId,
};
use crate::workflows::duerp::obligations::ObligationEngine;
use crate::workflows::duerp::repository::{PreventionRepository, RepositoryError};
use crate::workflows::duerp::service::PreventionService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 15).expect("valid reference date")
}

pub(super) fn catalogue() -> Arc<Catalogue> {
    Arc::new(Catalogue::standard())
}

pub(super) fn engine() -> ObligationEngine {
    ObligationEngine::new(catalogue())
}

pub(super) fn profile(workforce: Option<u32>, surface: Option<u32>) -> SiteProfile {
    SiteProfile {
        workforce_size: workforce,
        sector: None,
        surface_area_m2: surface,
    }
}

pub(super) fn risk(hazard: &str) -> Risk {
    Risk {
        id: RiskId(format!("risk-{hazard}")),
        category: RiskCategory::Physical,
        hazard: hazard.to_string(),
        situation: String::new(),
        consequences: String::new(),
        existing_measures: String::new(),
        unit: None,
        hazard_classes: BTreeSet::new(),
        frequency: None,
        gravity: None,
        mastery: None,
    }
}

pub(super) fn scored_risk(
    hazard: &str,
    frequency: Frequency,
    gravity: Gravity,
    mastery: Mastery,
) -> Risk {
    Risk {
        frequency: Some(frequency),
        gravity: Some(gravity),
        mastery: Some(mastery),
        ..risk(hazard)
    }
}

pub(super) fn tagged_risk(hazard: &str, classes: &[HazardClass]) -> Risk {
    Risk {
        hazard_classes: classes.iter().copied().collect(),
        ..risk(hazard)
    }
}

pub(super) fn unit(code: &str) -> WorkUnit {
    WorkUnit {
        id: WorkUnitId(format!("unit-{code}")),
        code: code.to_string(),
        name: format!("Unité {code}"),
        headcount: Some(5),
        job_titles: None,
    }
}

pub(super) fn equipment(type_code: &str) -> EquipmentItem {
    EquipmentItem::new(type_code, "Bâtiment A")
}

pub(super) fn certification(code: &str, expires_on: Option<NaiveDate>) -> CertificationRecord {
    CertificationRecord {
        person: "Marie Lefort".to_string(),
        job_title: Some("Formatrice".to_string()),
        certification_code: code.to_string(),
        obtained_on: NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"),
        expires_on,
        issuer: Some("INRS".to_string()),
        reference: None,
        level: None,
    }
}

pub(super) fn verification(code: &str, performed_on: NaiveDate) -> VerificationRecord {
    VerificationRecord {
        verification_code: code.to_string(),
        performed_on,
        performed_by: "Bureau Veritas".to_string(),
        participants: None,
        passed: true,
        observations: None,
        next_planned_on: None,
    }
}

pub(super) fn build_service() -> (
    PreventionService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = PreventionService::new(catalogue(), repository.clone());
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    sequence: AtomicU64,
    pub(super) units: Mutex<Vec<WorkUnit>>,
    pub(super) risks: Mutex<Vec<Risk>>,
    pub(super) actions: Mutex<Vec<RemediationAction>>,
}

impl MemoryRepository {
    fn next_id(&self, prefix: &str) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id:04}")
    }
}

impl PreventionRepository for MemoryRepository {
    fn create_unit(&self, unit: NewWorkUnit) -> Result<WorkUnit, RepositoryError> {
        let mut guard = self.units.lock().expect("unit mutex poisoned");
        if guard.iter().any(|existing| existing.code == unit.code) {
            return Err(RepositoryError::Conflict);
        }
        let created = WorkUnit {
            id: WorkUnitId(self.next_id("unit")),
            code: unit.code,
            name: unit.name,
            headcount: unit.headcount,
            job_titles: unit.job_titles,
        };
        guard.push(created.clone());
        Ok(created)
    }

    fn create_risk(&self, risk: NewRisk) -> Result<Risk, RepositoryError> {
        let created = Risk {
            id: RiskId(self.next_id("risk")),
            category: risk.category,
            hazard: risk.hazard,
            situation: risk.situation,
            consequences: risk.consequences,
            existing_measures: risk.existing_measures,
            unit: risk.unit,
            hazard_classes: risk.hazard_classes,
            frequency: risk.frequency,
            gravity: risk.gravity,
            mastery: risk.mastery,
        };
        self.risks
            .lock()
            .expect("risk mutex poisoned")
            .push(created.clone());
        Ok(created)
    }

    fn create_action(
        &self,
        action: NewRemediationAction,
    ) -> Result<RemediationAction, RepositoryError> {
        let created = RemediationAction {
            id: ActionId(self.next_id("action")),
            description: action.description,
            action_type: action.action_type,
            priority: action.priority,
            responsible: action.responsible,
            due_on: action.due_on,
            estimated_cost: action.estimated_cost,
            completed_on: None,
            status: action.status,
            risk: action.risk,
        };
        self.actions
            .lock()
            .expect("action mutex poisoned")
            .push(created.clone());
        Ok(created)
    }

    fn units(&self) -> Result<Vec<WorkUnit>, RepositoryError> {
        Ok(self.units.lock().expect("unit mutex poisoned").clone())
    }

    fn risks(&self) -> Result<Vec<Risk>, RepositoryError> {
        Ok(self.risks.lock().expect("risk mutex poisoned").clone())
    }

    fn risks_for_unit(&self, unit: &WorkUnitId) -> Result<Vec<Risk>, RepositoryError> {
        Ok(self
            .risks
            .lock()
            .expect("risk mutex poisoned")
            .iter()
            .filter(|risk| risk.unit.as_ref() == Some(unit))
            .cloned()
            .collect())
    }

    fn delete_risk(&self, risk: &RiskId) -> Result<(), RepositoryError> {
        let mut guard = self.risks.lock().expect("risk mutex poisoned");
        let before = guard.len();
        guard.retain(|entry| &entry.id != risk);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn delete_unit(&self, unit: &WorkUnitId) -> Result<(), RepositoryError> {
        let mut guard = self.units.lock().expect("unit mutex poisoned");
        let before = guard.len();
        guard.retain(|entry| &entry.id != unit);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
