use chrono::NaiveDate;
use serde::Serialize;

use super::catalogue::Catalogue;
use super::conformity::{conformity_breakdown, ConformityBreakdown};
use super::cotation::RiskLevel;
use super::domain::{
    CertificationRecord, EquipmentItem, EquipmentStatus, Risk, VerificationRecord,
};
use super::obligations::{ObligationAssessment, ObligationPriority, PreventionAlert};
use super::status::{
    certification_status, equipment_effective_status, verification_overdue, CertificationStatus,
};

/// Coarse reading of the conformity percentage for dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConformityLevel {
    Good,
    Watch,
    Critical,
}

impl ConformityLevel {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 80 {
            Self::Good
        } else if percent >= 50 {
            Self::Watch
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Satisfaisant",
            Self::Watch => "À surveiller",
            Self::Critical => "Critique",
        }
    }
}

/// Mandatory equipment obligation currently short of compliant items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentGap {
    pub type_code: &'static str,
    pub label: &'static str,
    pub required: u32,
    pub compliant_count: u32,
    pub missing: u32,
    pub priority: ObligationPriority,
}

/// Equipment item whose effective status calls for action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentAttention {
    pub type_code: String,
    pub location: String,
    pub status: EquipmentStatus,
    pub status_label: &'static str,
}

/// Certification expiring soon or already expired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationAttention {
    pub person: String,
    pub certification_code: String,
    pub expires_on: Option<NaiveDate>,
    pub status: CertificationStatus,
    pub status_label: &'static str,
}

/// Periodic check past its planned or regulatory follow-up date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationAttention {
    pub verification_code: String,
    pub label: &'static str,
    pub performed_on: NaiveDate,
    pub next_planned_on: Option<NaiveDate>,
}

/// Cotation coverage of the risk inventory. Risks without enough factors to
/// score are counted apart, never defaulted to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RiskSummary {
    pub scored: usize,
    pub unevaluated: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

/// Assembled dashboard view over the engine outputs. Pure data for the
/// rendering layers; recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreventionReport {
    pub conformity_percent: u8,
    pub conformity_level: ConformityLevel,
    pub breakdown: ConformityBreakdown,
    pub equipment_gaps: Vec<EquipmentGap>,
    pub equipment_attention: Vec<EquipmentAttention>,
    pub certification_attention: Vec<CertificationAttention>,
    pub overdue_verifications: Vec<VerificationAttention>,
    pub risks: RiskSummary,
    pub alerts: Vec<PreventionAlert>,
}

pub fn build_report(
    catalogue: &Catalogue,
    assessment: &ObligationAssessment,
    risks: &[Risk],
    equipment_items: &[EquipmentItem],
    certifications: &[CertificationRecord],
    verifications: &[VerificationRecord],
    today: NaiveDate,
) -> PreventionReport {
    let breakdown =
        conformity_breakdown(assessment, equipment_items, certifications, catalogue, today);
    let conformity_percent = breakdown.percent;

    let mut equipment_gaps: Vec<EquipmentGap> = breakdown
        .equipment
        .iter()
        .filter(|line| !line.satisfied)
        .map(|line| {
            let priority = assessment
                .equipment
                .iter()
                .find(|obligation| obligation.type_code == line.type_code)
                .map(|obligation| obligation.priority)
                .unwrap_or(ObligationPriority::Standard);
            EquipmentGap {
                type_code: line.type_code,
                label: catalogue
                    .equipment_type(line.type_code)
                    .map(|def| def.label)
                    .unwrap_or(line.type_code),
                required: line.required,
                compliant_count: line.compliant_count,
                missing: line.required.saturating_sub(line.compliant_count),
                priority,
            }
        })
        .collect();
    equipment_gaps.sort_by_key(|gap| gap.priority as u8);

    let equipment_attention = equipment_items
        .iter()
        .filter_map(|item| {
            let def = catalogue.equipment_type(&item.type_code)?;
            let status = equipment_effective_status(item, def, today);
            (status != EquipmentStatus::Compliant).then(|| EquipmentAttention {
                type_code: item.type_code.clone(),
                location: item.location.clone(),
                status,
                status_label: status.label(),
            })
        })
        .collect();

    let mut certification_attention: Vec<CertificationAttention> = certifications
        .iter()
        .filter_map(|record| {
            let status = certification_status(record, today);
            matches!(
                status,
                CertificationStatus::ExpiringSoon | CertificationStatus::Expired
            )
            .then(|| CertificationAttention {
                person: record.person.clone(),
                certification_code: record.certification_code.clone(),
                expires_on: record.expires_on,
                status,
                status_label: status.label(),
            })
        })
        .collect();
    certification_attention.sort_by(|a, b| {
        a.expires_on
            .cmp(&b.expires_on)
            .then_with(|| a.person.cmp(&b.person))
    });

    let overdue_verifications = verifications
        .iter()
        .filter_map(|record| {
            let def = catalogue.verification_type(&record.verification_code)?;
            verification_overdue(record, def, today).then(|| VerificationAttention {
                verification_code: record.verification_code.clone(),
                label: def.label,
                performed_on: record.performed_on,
                next_planned_on: record.next_planned_on,
            })
        })
        .collect();

    let mut summary = RiskSummary::default();
    for risk in risks {
        let score = risk.residual_score().or_else(|| risk.raw_score().map(f64::from));
        match score {
            Some(score) => {
                summary.scored += 1;
                match RiskLevel::from_score(score) {
                    RiskLevel::Low => summary.low += 1,
                    RiskLevel::Medium => summary.medium += 1,
                    RiskLevel::High => summary.high += 1,
                    RiskLevel::Critical => summary.critical += 1,
                }
            }
            None => summary.unevaluated += 1,
        }
    }

    PreventionReport {
        conformity_percent,
        conformity_level: ConformityLevel::from_percent(conformity_percent),
        breakdown,
        equipment_gaps,
        equipment_attention,
        certification_attention,
        overdue_verifications,
        risks: summary,
        alerts: assessment.alerts.clone(),
    }
}
