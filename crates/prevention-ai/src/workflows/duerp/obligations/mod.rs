mod alerts;
mod rules;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use super::catalogue::Catalogue;
use super::domain::{HazardClass, Risk, SiteProfile, WorkUnit};

/// Stateless engine applying the catalogue rules to the site facts.
pub struct ObligationEngine {
    catalogue: Arc<Catalogue>,
}

impl ObligationEngine {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Derive the applicable equipment and training obligations plus the
    /// advisory alerts. Pure and deterministic: identical inputs produce
    /// structurally identical output, rationale strings included. Obligations
    /// appear in rule-evaluation order; no other ordering is guaranteed.
    pub fn assess(
        &self,
        risks: &[Risk],
        units: &[WorkUnit],
        profile: &SiteProfile,
    ) -> ObligationAssessment {
        let hazards: BTreeSet<HazardClass> = risks
            .iter()
            .flat_map(Risk::effective_hazard_classes)
            .collect();

        // A jurisdiction catalogue that does not carry a type silences the
        // corresponding rule.
        let mut equipment = rules::equipment_obligations(&hazards, units.len(), profile);
        equipment.retain(|obligation| {
            self.catalogue.equipment_type(obligation.type_code).is_some()
        });
        let mut training = rules::training_obligations(&hazards, profile);
        training.retain(|obligation| {
            self.catalogue
                .certification_type(obligation.certification_code)
                .is_some()
        });

        ObligationAssessment {
            equipment,
            training,
            alerts: alerts::consultation_alerts(&hazards, profile),
        }
    }
}

/// Ephemeral evaluation output, recomputed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObligationAssessment {
    pub equipment: Vec<EquipmentObligation>,
    pub training: Vec<TrainingObligation>,
    pub alerts: Vec<PreventionAlert>,
}

/// Computed equipment requirement with quantity and rationale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentObligation {
    pub type_code: &'static str,
    pub quantity: u32,
    pub mandatory: bool,
    pub rationale: String,
    pub priority: ObligationPriority,
}

/// Computed training requirement. A `None` headcount means at least one
/// certified person, without a fixed target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingObligation {
    pub certification_code: &'static str,
    pub required_headcount: Option<u32>,
    pub mandatory: bool,
    pub rationale: String,
    pub priority: ObligationPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationPriority {
    Critical,
    High,
    Standard,
}

impl ObligationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critique",
            Self::High => "Haute",
            Self::Standard => "Normale",
        }
    }
}

/// Advisory message emitted alongside the obligations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreventionAlert {
    pub severity: AlertSeverity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Info,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "Avertissement",
            Self::Info => "Information",
        }
    }
}
