use chrono::{Duration, NaiveDate};

use super::common::*;
use crate::workflows::duerp::domain::EquipmentStatus;
use crate::workflows::duerp::status::{
    certification_status, equipment_computed_status, equipment_effective_status,
    verification_overdue, CertificationStatus,
};

#[test]
fn expiry_outranks_an_overdue_check() {
    let catalogue = catalogue();
    let def = catalogue
        .equipment_type("extincteur_eau")
        .expect("type in catalogue");

    let mut item = equipment("extincteur_eau");
    item.expires_on = Some(today() - Duration::days(10));
    item.next_check_on = Some(today() - Duration::days(30));

    assert_eq!(
        equipment_effective_status(&item, def, today()),
        EquipmentStatus::Expired
    );
}

#[test]
fn overdue_check_date_flags_needs_check() {
    let catalogue = catalogue();
    let def = catalogue.equipment_type("extincteur_eau").expect("type");

    let mut item = equipment("extincteur_eau");
    item.next_check_on = Some(today() - Duration::days(1));

    assert_eq!(
        equipment_effective_status(&item, def, today()),
        EquipmentStatus::NeedsCheck
    );
}

#[test]
fn service_life_exceeded_expires_without_explicit_dates() {
    let catalogue = catalogue();
    // 20 years max service life in the standard catalogue.
    let def = catalogue.equipment_type("extincteur_eau").expect("type");

    let mut item = equipment("extincteur_eau");
    item.installed_on = Some(
        NaiveDate::from_ymd_opt(2005, 4, 15).expect("valid install date"),
    );

    assert_eq!(
        equipment_effective_status(&item, def, today()),
        EquipmentStatus::Expired
    );
}

#[test]
fn regulatory_periodicity_flags_needs_check_from_last_check() {
    let catalogue = catalogue();
    let def = catalogue.equipment_type("extincteur_eau").expect("type");

    let mut item = equipment("extincteur_eau");
    item.last_checked_on = Some(today() - Duration::days(400));

    assert_eq!(
        equipment_effective_status(&item, def, today()),
        EquipmentStatus::NeedsCheck
    );
}

#[test]
fn recent_check_stays_compliant() {
    let catalogue = catalogue();
    let def = catalogue.equipment_type("extincteur_eau").expect("type");

    let mut item = equipment("extincteur_eau");
    item.last_checked_on = Some(today() - Duration::days(90));
    item.next_check_on = Some(today() + Duration::days(275));

    assert_eq!(
        equipment_effective_status(&item, def, today()),
        EquipmentStatus::Compliant
    );
}

#[test]
fn human_judgment_survives_when_no_date_signal_exists() {
    let catalogue = catalogue();
    let def = catalogue.equipment_type("plan_evacuation").expect("type");

    let mut item = equipment("plan_evacuation");
    item.base_status = EquipmentStatus::NonCompliant;

    assert_eq!(
        equipment_effective_status(&item, def, today()),
        EquipmentStatus::NonCompliant
    );
    // The purely date-derived status still reads compliant.
    assert_eq!(
        equipment_computed_status(&item, def, today()),
        EquipmentStatus::Compliant
    );
}

#[test]
fn date_signal_overrides_the_human_base_status() {
    let catalogue = catalogue();
    let def = catalogue.equipment_type("extincteur_eau").expect("type");

    let mut item = equipment("extincteur_eau");
    item.base_status = EquipmentStatus::Compliant;
    item.expires_on = Some(today() - Duration::days(1));

    assert_eq!(
        equipment_effective_status(&item, def, today()),
        EquipmentStatus::Expired
    );
}

#[test]
fn certification_thresholds_match_the_sixty_day_window() {
    let valid = certification("sst", Some(today() + Duration::days(60)));
    assert_eq!(certification_status(&valid, today()), CertificationStatus::Valid);

    let expiring = certification("sst", Some(today() + Duration::days(59)));
    assert_eq!(
        certification_status(&expiring, today()),
        CertificationStatus::ExpiringSoon
    );

    let expires_today = certification("sst", Some(today()));
    assert_eq!(
        certification_status(&expires_today, today()),
        CertificationStatus::Expired
    );

    let expired = certification("sst", Some(today() - Duration::days(5)));
    assert_eq!(
        certification_status(&expired, today()),
        CertificationStatus::Expired
    );

    let unknown = certification("sst", None);
    assert_eq!(
        certification_status(&unknown, today()),
        CertificationStatus::Unknown
    );
}

#[test]
fn verification_overdue_uses_planned_date_then_periodicity() {
    let catalogue = catalogue();
    let def = catalogue
        .verification_type("exercice_evacuation")
        .expect("type");

    let mut planned = verification("exercice_evacuation", today() - Duration::days(300));
    planned.next_planned_on = Some(today() + Duration::days(10));
    assert!(!verification_overdue(&planned, def, today()));

    let mut past_plan = verification("exercice_evacuation", today() - Duration::days(300));
    past_plan.next_planned_on = Some(today() - Duration::days(10));
    assert!(verification_overdue(&past_plan, def, today()));

    // No planned follow-up: the six month drill periodicity applies.
    let stale = verification("exercice_evacuation", today() - Duration::days(250));
    assert!(verification_overdue(&stale, def, today()));

    let fresh = verification("exercice_evacuation", today() - Duration::days(30));
    assert!(!verification_overdue(&fresh, def, today()));
}
