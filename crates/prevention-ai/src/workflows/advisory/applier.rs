use std::collections::HashMap;

use tracing::{debug, warn};

use super::super::duerp::domain::{
    ActionStatus, HazardClass, NewRemediationAction, NewRisk, NewWorkUnit, WorkUnitId,
};
use super::super::duerp::repository::PreventionRepository;
use super::{
    BatchApplyError, BatchFailure, BatchItem, BatchOutcome, BatchStatus, ProposedRisk,
    SuggestionBatch,
};

/// Apply the accepted subset of a batch in dependency order: units first,
/// then risks resolving unit codes through the freshly created and the
/// pre-existing units, then actions under their created risks.
///
/// Individual failures are recorded and the batch continues; a failed risk
/// suppresses its nested actions (they have no valid parent) without touching
/// sibling risks. The only error path is a persistence layer that is already
/// unreachable before the first create.
pub fn apply_suggestion_batch<R: PreventionRepository>(
    repository: &R,
    batch: &SuggestionBatch,
) -> Result<BatchOutcome, BatchApplyError> {
    // Listing the existing units both seeds the code map and probes the
    // persistence layer; nothing has been created yet at this point.
    let existing_units = repository
        .units()
        .map_err(|err| BatchApplyError::Unavailable(err.to_string()))?;

    let mut unit_ids: HashMap<String, WorkUnitId> = existing_units
        .into_iter()
        .map(|unit| (unit.code.clone(), unit.id))
        .collect();

    let mut units_created = 0;
    let mut risks_created = 0;
    let mut actions_created = 0;
    let mut unresolved_unit_codes = Vec::new();
    let mut failures = Vec::new();

    for proposal in batch.units.iter().filter(|unit| unit.accepted) {
        let unit = NewWorkUnit {
            code: proposal.code.clone(),
            name: proposal.name.clone(),
            headcount: proposal.headcount,
            job_titles: proposal.job_titles.clone(),
        };
        match repository.create_unit(unit) {
            Ok(created) => {
                debug!(code = %created.code, "work unit created from suggestion");
                unit_ids.insert(created.code.clone(), created.id);
                units_created += 1;
            }
            Err(err) => {
                warn!(code = %proposal.code, error = %err, "failed to create suggested work unit");
                failures.push(BatchFailure {
                    item: BatchItem::Unit {
                        code: proposal.code.clone(),
                    },
                    error: err.to_string(),
                });
            }
        }
    }

    for proposal in batch.risks.iter().filter(|risk| risk.accepted) {
        let unit = match &proposal.unit_code {
            Some(code) => match unit_ids.get(code) {
                Some(id) => Some(id.clone()),
                None => {
                    unresolved_unit_codes.push(code.clone());
                    None
                }
            },
            None => None,
        };

        match repository.create_risk(risk_payload(proposal, unit)) {
            Ok(created) => {
                debug!(hazard = %created.hazard, "risk created from suggestion");
                risks_created += 1;

                for action in proposal.actions.iter().filter(|action| action.accepted) {
                    let payload = NewRemediationAction {
                        description: action.description.clone(),
                        action_type: action.action_type,
                        priority: action.priority,
                        responsible: action.responsible.clone(),
                        due_on: action.due_on,
                        estimated_cost: None,
                        status: ActionStatus::Todo,
                        risk: Some(created.id.clone()),
                    };
                    match repository.create_action(payload) {
                        Ok(_) => actions_created += 1,
                        Err(err) => {
                            warn!(description = %action.description, error = %err, "failed to create suggested action");
                            failures.push(BatchFailure {
                                item: BatchItem::Action {
                                    description: action.description.clone(),
                                },
                                error: err.to_string(),
                            });
                        }
                    }
                }
            }
            Err(err) => {
                warn!(hazard = %proposal.hazard, error = %err, "failed to create suggested risk");
                failures.push(BatchFailure {
                    item: BatchItem::Risk {
                        hazard: proposal.hazard.clone(),
                    },
                    error: err.to_string(),
                });
            }
        }
    }

    let status = if failures.is_empty() {
        BatchStatus::Applied
    } else {
        BatchStatus::PartiallyApplied
    };

    Ok(BatchOutcome {
        status,
        units_created,
        risks_created,
        actions_created,
        unresolved_unit_codes,
        failures,
    })
}

fn risk_payload(proposal: &ProposedRisk, unit: Option<WorkUnitId>) -> NewRisk {
    // Untagged proposals get classified at creation time, like any other
    // freshly entered risk.
    let hazard_classes = if proposal.hazard_classes.is_empty() {
        let mut detected = HazardClass::detect(&proposal.hazard);
        detected.extend(HazardClass::detect(&proposal.situation));
        detected
    } else {
        proposal.hazard_classes.clone()
    };

    NewRisk {
        category: proposal.category,
        hazard: proposal.hazard.clone(),
        situation: proposal.situation.clone(),
        consequences: proposal.consequences.clone(),
        existing_measures: proposal.existing_measures.clone(),
        unit,
        hazard_classes,
        frequency: proposal.frequency,
        gravity: proposal.gravity,
        mastery: proposal.mastery,
    }
}
