use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cotation::{residual_score, raw_score, Frequency, Gravity, Mastery};

/// Identifier wrapper for work units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkUnitId(pub String);

/// Identifier wrapper for risk entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskId(pub String);

/// Identifier wrapper for remediation actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub String);

/// Named grouping of staff/workstations sharing homogeneous risk exposure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUnit {
    pub id: WorkUnitId,
    pub code: String,
    pub name: String,
    pub headcount: Option<u32>,
    pub job_titles: Option<String>,
}

/// Input payload for creating a work unit; the repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkUnit {
    pub code: String,
    pub name: String,
    pub headcount: Option<u32>,
    pub job_titles: Option<String>,
}

/// Fixed taxonomy of risk families used across assessment documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Physical,
    Chemical,
    Biological,
    Ergonomic,
    Psychosocial,
    Organizational,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Physical => "Risques physiques",
            Self::Chemical => "Risques chimiques",
            Self::Biological => "Risques biologiques",
            Self::Ergonomic => "Risques ergonomiques",
            Self::Psychosocial => "Risques psychosociaux",
            Self::Organizational => "Risques organisationnels",
        }
    }
}

/// Structured hazard tag assigned at risk-creation time.
///
/// Historical free-text risks carry no tags; `detect` reproduces the legacy
/// lower-cased substring match (exact accented forms included) so they keep
/// triggering obligations until a one-time reclassification assigns tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardClass {
    Electrical,
    Chemical,
    Flammable,
    Corrosive,
    Fire,
    Kitchen,
    Cardiac,
    Height,
    Forklift,
    ConstructionEquipment,
    AerialPlatform,
    ManualHandling,
}

impl HazardClass {
    pub const fn all() -> [Self; 12] {
        [
            Self::Electrical,
            Self::Chemical,
            Self::Flammable,
            Self::Corrosive,
            Self::Fire,
            Self::Kitchen,
            Self::Cardiac,
            Self::Height,
            Self::Forklift,
            Self::ConstructionEquipment,
            Self::AerialPlatform,
            Self::ManualHandling,
        ]
    }

    /// Lower-cased substrings that mark a free-text hazard as belonging to
    /// this class. Accented forms are matched exactly, no folding.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Electrical => &["électri", "electri", "haute tension"],
            Self::Chemical => &["chimi", "solvant", "cmr"],
            Self::Flammable => &["inflamma", "explos", "atex"],
            Self::Corrosive => &["corros", "acide", "soude"],
            Self::Fire => &["incendie", "feu", "flamme"],
            Self::Kitchen => &["cuisine", "friteuse", "cuisson"],
            Self::Cardiac => &["cardiaque", "défibrill", "defibrill"],
            Self::Height => &["hauteur", "harnais", "échafaud", "echafaud", "toiture"],
            Self::Forklift => &["chariot", "gerbeur", "transpalette", "cariste"],
            Self::ConstructionEquipment => &["engin", "pelleteuse", "tractopelle"],
            Self::AerialPlatform => &["nacelle", "pemp", "plateforme élévatrice"],
            Self::ManualHandling => &["manutention", "port de charge", "tms", "musculo"],
        }
    }

    /// Classify a free-text hazard description by substring containment.
    pub fn detect(text: &str) -> BTreeSet<Self> {
        let haystack = text.to_lowercase();
        Self::all()
            .into_iter()
            .filter(|class| {
                class
                    .keywords()
                    .iter()
                    .any(|keyword| haystack.contains(keyword))
            })
            .collect()
    }
}

/// A single hazard/situation entry of the assessment document.
///
/// Raw and residual scores are never stored: they are recomputed from the
/// three cotation factors on every read so displayed severity cannot diverge
/// from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub id: RiskId,
    pub category: RiskCategory,
    pub hazard: String,
    pub situation: String,
    pub consequences: String,
    pub existing_measures: String,
    pub unit: Option<WorkUnitId>,
    #[serde(default)]
    pub hazard_classes: BTreeSet<HazardClass>,
    pub frequency: Option<Frequency>,
    pub gravity: Option<Gravity>,
    pub mastery: Option<Mastery>,
}

impl Risk {
    /// Frequency x gravity, absent until both factors are evaluated.
    pub fn raw_score(&self) -> Option<u8> {
        match (self.frequency, self.gravity) {
            (Some(frequency), Some(gravity)) => Some(raw_score(frequency, gravity)),
            _ => None,
        }
    }

    /// Raw score weighted by mastery, absent until all three factors are set.
    pub fn residual_score(&self) -> Option<f64> {
        match (self.frequency, self.gravity, self.mastery) {
            (Some(frequency), Some(gravity), Some(mastery)) => {
                Some(residual_score(frequency, gravity, mastery))
            }
            _ => None,
        }
    }

    /// Assigned hazard tags, falling back to keyword detection over the
    /// hazard and situation text for unclassified legacy entries.
    pub fn effective_hazard_classes(&self) -> BTreeSet<HazardClass> {
        if !self.hazard_classes.is_empty() {
            return self.hazard_classes.clone();
        }

        let mut detected = HazardClass::detect(&self.hazard);
        detected.extend(HazardClass::detect(&self.situation));
        detected
    }
}

/// Input payload for creating a risk; the repository assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRisk {
    pub category: RiskCategory,
    pub hazard: String,
    pub situation: String,
    pub consequences: String,
    pub existing_measures: String,
    pub unit: Option<WorkUnitId>,
    #[serde(default)]
    pub hazard_classes: BTreeSet<HazardClass>,
    pub frequency: Option<Frequency>,
    pub gravity: Option<Gravity>,
    pub mastery: Option<Mastery>,
}

/// Equipment family in the reference catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    FireFighting,
    FirstAid,
    Evacuation,
}

impl EquipmentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FireFighting => "Lutte contre l'incendie",
            Self::FirstAid => "Premiers secours",
            Self::Evacuation => "Évacuation",
        }
    }
}

/// Status of a physical equipment item, human-settable as the base value and
/// derived from dates for display and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Compliant,
    NeedsCheck,
    NonCompliant,
    Expired,
    Missing,
}

impl EquipmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Conforme",
            Self::NeedsCheck => "Vérification requise",
            Self::NonCompliant => "Non conforme",
            Self::Expired => "Périmé",
            Self::Missing => "Manquant",
        }
    }
}

/// An installed/owned instance of a catalogue equipment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub type_code: String,
    pub unit: Option<WorkUnitId>,
    pub location: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub capacity: Option<String>,
    pub installed_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
    pub last_checked_on: Option<NaiveDate>,
    pub next_check_on: Option<NaiveDate>,
    /// Human-entered judgment, only authoritative when no date signal exists.
    pub base_status: EquipmentStatus,
    pub notes: Option<String>,
}

impl EquipmentItem {
    pub fn new(type_code: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            type_code: type_code.into(),
            unit: None,
            location: location.into(),
            brand: None,
            model: None,
            serial: None,
            capacity: None,
            installed_on: None,
            expires_on: None,
            last_checked_on: None,
            next_check_on: None,
            base_status: EquipmentStatus::Compliant,
            notes: None,
        }
    }
}

/// One person's one certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub person: String,
    pub job_title: Option<String>,
    pub certification_code: String,
    pub obtained_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub issuer: Option<String>,
    pub reference: Option<String>,
    pub level: Option<String>,
}

/// One completed periodic-check event (drill, extinguisher service, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub verification_code: String,
    pub performed_on: NaiveDate,
    pub performed_by: String,
    pub participants: Option<u32>,
    pub passed: bool,
    pub observations: Option<String>,
    pub next_planned_on: Option<NaiveDate>,
}

/// Kind of a planned mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Prevention,
    Protection,
    Training,
    Organizational,
    Technical,
}

impl ActionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prevention => "Prévention",
            Self::Protection => "Protection",
            Self::Training => "Formation",
            Self::Organizational => "Organisationnelle",
            Self::Technical => "Technique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl ActionPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critique",
            Self::High => "Haute",
            Self::Medium => "Moyenne",
            Self::Low => "Basse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Todo,
    InProgress,
    Done,
    Cancelled,
}

impl ActionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "À faire",
            Self::InProgress => "En cours",
            Self::Done => "Réalisée",
            Self::Cancelled => "Annulée",
        }
    }
}

/// A planned mitigation, typically linked to the risk that motivated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationAction {
    pub id: ActionId,
    pub description: String,
    pub action_type: ActionType,
    pub priority: ActionPriority,
    pub responsible: Option<String>,
    pub due_on: Option<NaiveDate>,
    pub estimated_cost: Option<u32>,
    pub completed_on: Option<NaiveDate>,
    pub status: ActionStatus,
    pub risk: Option<RiskId>,
}

/// Input payload for creating a remediation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRemediationAction {
    pub description: String,
    pub action_type: ActionType,
    pub priority: ActionPriority,
    pub responsible: Option<String>,
    pub due_on: Option<NaiveDate>,
    pub estimated_cost: Option<u32>,
    pub status: ActionStatus,
    pub risk: Option<RiskId>,
}

/// Activity sector of the assessed site, used by a handful of sector rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Catering,
    Construction,
    Logistics,
    Industry,
    Office,
    Training,
    Other,
}

impl Sector {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catering => "Restauration",
            Self::Construction => "BTP",
            Self::Logistics => "Logistique",
            Self::Industry => "Industrie",
            Self::Office => "Tertiaire",
            Self::Training => "Organisme de formation",
            Self::Other => "Autre",
        }
    }
}

/// Contextual facts about the assessed site, all optional; absent values are
/// treated as not-yet-known, never defaulted to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteProfile {
    pub workforce_size: Option<u32>,
    pub sector: Option<Sector>,
    pub surface_area_m2: Option<u32>,
}
