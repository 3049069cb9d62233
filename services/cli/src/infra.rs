use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;
use prevention_ai::workflows::duerp::domain::ActionId;
use prevention_ai::workflows::duerp::{
    NewRemediationAction, NewRisk, NewWorkUnit, PreventionRepository, RemediationAction,
    RepositoryError, Risk, RiskId, Sector, WorkUnit, WorkUnitId,
};

/// In-memory repository backing the CLI demos; the production deployments
/// plug their own persistence behind the same trait.
#[derive(Default)]
pub(crate) struct InMemoryPreventionRepository {
    sequence: AtomicU64,
    units: Mutex<Vec<WorkUnit>>,
    risks: Mutex<Vec<Risk>>,
    actions: Mutex<Vec<RemediationAction>>,
}

impl InMemoryPreventionRepository {
    fn next_id(&self, prefix: &str) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id:04}")
    }

    pub(crate) fn actions(&self) -> Vec<RemediationAction> {
        self.actions.lock().expect("action mutex poisoned").clone()
    }
}

impl PreventionRepository for InMemoryPreventionRepository {
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
        self.risks
            .lock()
            .expect("risk mutex poisoned")
            .retain(|entry| &entry.id != risk);
        Ok(())
    }

    fn delete_unit(&self, unit: &WorkUnitId) -> Result<(), RepositoryError> {
        self.units
            .lock()
            .expect("unit mutex poisoned")
            .retain(|entry| &entry.id != unit);
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_sector(raw: &str) -> Result<Sector, String> {
    match raw.trim().to_lowercase().as_str() {
        "restauration" | "catering" => Ok(Sector::Catering),
        "btp" | "construction" => Ok(Sector::Construction),
        "logistique" | "logistics" => Ok(Sector::Logistics),
        "industrie" | "industry" => Ok(Sector::Industry),
        "tertiaire" | "office" => Ok(Sector::Office),
        "formation" | "training" => Ok(Sector::Training),
        "autre" | "other" => Ok(Sector::Other),
        _ => Err(format!(
            "unknown sector '{raw}' (expected restauration, btp, logistique, industrie, tertiaire, formation, autre)"
        )),
    }
}
