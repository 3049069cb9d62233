use chrono::NaiveDate;
use serde::Serialize;

use super::catalogue::Catalogue;
use super::domain::{CertificationRecord, EquipmentItem, EquipmentStatus};
use super::obligations::ObligationAssessment;
use super::status::{certification_status, equipment_effective_status};

/// Per-obligation satisfaction detail backing the aggregate percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConformityBreakdown {
    pub percent: u8,
    pub equipment: Vec<EquipmentConformityLine>,
    pub training: Vec<TrainingConformityLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentConformityLine {
    pub type_code: &'static str,
    pub required: u32,
    pub compliant_count: u32,
    pub satisfied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingConformityLine {
    pub certification_code: &'static str,
    pub required_headcount: Option<u32>,
    pub valid_count: u32,
    pub credit: f64,
}

/// Aggregate conformity over the mandatory obligations only, 0-100. Returns
/// exactly 0 when nothing is mandatory, never a division artifact.
pub fn conformity_percent(
    assessment: &ObligationAssessment,
    equipment_items: &[EquipmentItem],
    certifications: &[CertificationRecord],
    catalogue: &Catalogue,
    today: NaiveDate,
) -> u8 {
    conformity_breakdown(assessment, equipment_items, certifications, catalogue, today).percent
}

/// Full satisfaction detail: one line per mandatory obligation. Training
/// obligations earn half credit when understaffed but not empty.
pub fn conformity_breakdown(
    assessment: &ObligationAssessment,
    equipment_items: &[EquipmentItem],
    certifications: &[CertificationRecord],
    catalogue: &Catalogue,
    today: NaiveDate,
) -> ConformityBreakdown {
    let mut total: u32 = 0;
    let mut satisfied: f64 = 0.0;
    let mut equipment_lines = Vec::new();
    let mut training_lines = Vec::new();

    for obligation in assessment.equipment.iter().filter(|o| o.mandatory) {
        total += 1;
        let required = obligation.quantity.max(1);
        let compliant_count = equipment_items
            .iter()
            .filter(|item| item.type_code == obligation.type_code)
            .filter(|item| {
                // Items of a type missing from the catalogue cannot be derived
                // and never count as compliant.
                catalogue.equipment_type(&item.type_code).map_or(false, |def| {
                    equipment_effective_status(item, def, today) == EquipmentStatus::Compliant
                })
            })
            .count() as u32;

        let line_satisfied = compliant_count >= required;
        if line_satisfied {
            satisfied += 1.0;
        }
        equipment_lines.push(EquipmentConformityLine {
            type_code: obligation.type_code,
            required,
            compliant_count,
            satisfied: line_satisfied,
        });
    }

    for obligation in assessment.training.iter().filter(|o| o.mandatory) {
        total += 1;
        let valid_count = certifications
            .iter()
            .filter(|record| record.certification_code == obligation.certification_code)
            .filter(|record| certification_status(record, today).counts_as_valid())
            .count() as u32;

        let credit = match obligation.required_headcount {
            Some(required) if valid_count >= required => 1.0,
            Some(_) if valid_count > 0 => 0.5,
            Some(_) => 0.0,
            None if valid_count > 0 => 1.0,
            None => 0.0,
        };
        satisfied += credit;
        training_lines.push(TrainingConformityLine {
            certification_code: obligation.certification_code,
            required_headcount: obligation.required_headcount,
            valid_count,
            credit,
        });
    }

    let percent = if total > 0 {
        (100.0 * satisfied / f64::from(total)).round() as u8
    } else {
        0
    };

    ConformityBreakdown {
        percent,
        equipment: equipment_lines,
        training: training_lines,
    }
}
