use chrono::{Months, NaiveDate};

use super::catalogue::{EquipmentTypeDef, VerificationTypeDef};
use super::domain::{CertificationRecord, EquipmentItem, EquipmentStatus, VerificationRecord};
use serde::{Deserialize, Serialize};

/// Days before expiry at which a certification is flagged. Fixed across
/// certification types; the aggregator depends on this exact value.
pub const EXPIRY_WARNING_DAYS: i64 = 60;

/// Date-derived signal for an equipment item, in strict precedence order.
/// Expiry outranks an overdue check: callers building remediation lists must
/// be able to tell "replace immediately" from "schedule inspection".
fn equipment_date_signal(
    item: &EquipmentItem,
    type_def: &EquipmentTypeDef,
    today: NaiveDate,
) -> Option<EquipmentStatus> {
    if let Some(expires_on) = item.expires_on {
        if expires_on < today {
            return Some(EquipmentStatus::Expired);
        }
    }

    if let Some(next_check_on) = item.next_check_on {
        if next_check_on < today {
            return Some(EquipmentStatus::NeedsCheck);
        }
    }

    if let (Some(years), Some(installed_on)) = (type_def.max_service_life_years, item.installed_on)
    {
        let end_of_life = installed_on.checked_add_months(Months::new(years * 12));
        if matches!(end_of_life, Some(limit) if limit < today) {
            return Some(EquipmentStatus::Expired);
        }
    }

    if let (Some(months), Some(last_checked_on)) =
        (type_def.periodicity_months, item.last_checked_on)
    {
        let check_due = last_checked_on.checked_add_months(Months::new(months));
        if matches!(check_due, Some(due) if due < today) {
            return Some(EquipmentStatus::NeedsCheck);
        }
    }

    None
}

/// Status derived purely from dates, always present. Falls back to
/// `Compliant` when no date rule fires.
pub fn equipment_computed_status(
    item: &EquipmentItem,
    type_def: &EquipmentTypeDef,
    today: NaiveDate,
) -> EquipmentStatus {
    equipment_date_signal(item, type_def, today).unwrap_or(EquipmentStatus::Compliant)
}

/// Status shown to users and counted by the conformity aggregator: the date
/// signal when one exists, otherwise the human-entered base status. A manual
/// "non conforme" mark therefore survives until a date rule overrides it.
pub fn equipment_effective_status(
    item: &EquipmentItem,
    type_def: &EquipmentTypeDef,
    today: NaiveDate,
) -> EquipmentStatus {
    equipment_date_signal(item, type_def, today).unwrap_or(item.base_status)
}

/// Lifecycle status of one person's certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationStatus {
    Valid,
    ExpiringSoon,
    Expired,
    Unknown,
}

impl CertificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "Valide",
            Self::ExpiringSoon => "Expire bientôt",
            Self::Expired => "Expirée",
            Self::Unknown => "Échéance inconnue",
        }
    }

    /// A certification counts toward training obligations while not expired.
    pub const fn counts_as_valid(self) -> bool {
        matches!(self, Self::Valid | Self::ExpiringSoon)
    }
}

/// Derive the certification status from its expiry date alone. A record with
/// no expiry is `Unknown`, never treated as valid or expired.
pub fn certification_status(record: &CertificationRecord, today: NaiveDate) -> CertificationStatus {
    let Some(expires_on) = record.expires_on else {
        return CertificationStatus::Unknown;
    };

    let days_left = (expires_on - today).num_days();
    if days_left <= 0 {
        CertificationStatus::Expired
    } else if days_left < EXPIRY_WARNING_DAYS {
        CertificationStatus::ExpiringSoon
    } else {
        CertificationStatus::Valid
    }
}

/// Whether a periodic-check record is overdue: past its planned follow-up, or
/// past the catalogue periodicity when no follow-up was planned.
pub fn verification_overdue(
    record: &VerificationRecord,
    type_def: &VerificationTypeDef,
    today: NaiveDate,
) -> bool {
    if let Some(next_planned_on) = record.next_planned_on {
        return next_planned_on < today;
    }

    record
        .performed_on
        .checked_add_months(Months::new(type_def.periodicity_months))
        .is_some_and(|due| due < today)
}
