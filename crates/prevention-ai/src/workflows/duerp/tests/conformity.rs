use chrono::Duration;

use super::common::*;
use crate::workflows::duerp::conformity::{conformity_breakdown, conformity_percent};
use crate::workflows::duerp::domain::EquipmentStatus;
use crate::workflows::duerp::obligations::{
    EquipmentObligation, ObligationAssessment, ObligationPriority, TrainingObligation,
};

fn equipment_obligation(type_code: &'static str, quantity: u32, mandatory: bool) -> EquipmentObligation {
    EquipmentObligation {
        type_code,
        quantity,
        mandatory,
        rationale: String::new(),
        priority: ObligationPriority::Standard,
    }
}

fn training_obligation(
    certification_code: &'static str,
    required_headcount: Option<u32>,
    mandatory: bool,
) -> TrainingObligation {
    TrainingObligation {
        certification_code,
        required_headcount,
        mandatory,
        rationale: String::new(),
        priority: ObligationPriority::Standard,
    }
}

fn assessment(
    equipment: Vec<EquipmentObligation>,
    training: Vec<TrainingObligation>,
) -> ObligationAssessment {
    ObligationAssessment {
        equipment,
        training,
        alerts: Vec::new(),
    }
}

#[test]
fn no_mandatory_obligation_yields_exactly_zero() {
    let catalogue = catalogue();
    let empty = assessment(Vec::new(), Vec::new());
    assert_eq!(conformity_percent(&empty, &[], &[], &catalogue, today()), 0);

    // Advisory entries never enter the computation either.
    let advisory_only = assessment(
        vec![equipment_obligation("defibrillateur", 1, false)],
        vec![training_obligation("gestes_postures", None, false)],
    );
    assert_eq!(
        conformity_percent(&advisory_only, &[], &[], &catalogue, today()),
        0
    );
}

#[test]
fn understaffed_training_earns_half_credit() {
    let catalogue = catalogue();
    let assessment = assessment(
        Vec::new(),
        vec![training_obligation("sst", Some(3), true)],
    );
    let certifications = vec![certification("sst", Some(today() + Duration::days(300)))];

    let breakdown =
        conformity_breakdown(&assessment, &[], &certifications, &catalogue, today());
    assert_eq!(breakdown.training.len(), 1);
    assert_eq!(breakdown.training[0].valid_count, 1);
    assert_eq!(breakdown.training[0].credit, 0.5);
    assert_eq!(breakdown.percent, 50);
}

#[test]
fn mixed_obligations_round_the_aggregate() {
    let catalogue = catalogue();
    let assessment = assessment(
        vec![equipment_obligation("trousse_secours", 1, true)],
        vec![training_obligation("sst", Some(3), true)],
    );
    let equipment_items = vec![equipment("trousse_secours")];
    let certifications = vec![certification("sst", Some(today() + Duration::days(300)))];

    // (1 + 0.5) / 2 mandatory obligations.
    assert_eq!(
        conformity_percent(
            &assessment,
            &equipment_items,
            &certifications,
            &catalogue,
            today()
        ),
        75
    );
}

#[test]
fn only_effectively_compliant_items_count() {
    let catalogue = catalogue();
    let assessment = assessment(
        vec![equipment_obligation("extincteur_eau", 1, true)],
        Vec::new(),
    );

    let mut expired = equipment("extincteur_eau");
    expired.expires_on = Some(today() - Duration::days(1));
    assert_eq!(
        conformity_percent(&assessment, &[expired], &[], &catalogue, today()),
        0
    );

    let mut rejected = equipment("extincteur_eau");
    rejected.base_status = EquipmentStatus::NonCompliant;
    assert_eq!(
        conformity_percent(&assessment, &[rejected], &[], &catalogue, today()),
        0
    );

    let healthy = equipment("extincteur_eau");
    assert_eq!(
        conformity_percent(&assessment, &[healthy], &[], &catalogue, today()),
        100
    );
}

#[test]
fn required_quantity_must_be_met_in_full() {
    let catalogue = catalogue();
    let assessment = assessment(
        vec![equipment_obligation("extincteur_eau", 3, true)],
        Vec::new(),
    );
    let items = vec![
        equipment("extincteur_eau"),
        equipment("extincteur_eau"),
    ];

    // Two of three required: equipment obligations earn no partial credit.
    let breakdown = conformity_breakdown(&assessment, &items, &[], &catalogue, today());
    assert_eq!(breakdown.equipment[0].compliant_count, 2);
    assert!(!breakdown.equipment[0].satisfied);
    assert_eq!(breakdown.percent, 0);
}

#[test]
fn expired_or_undated_certifications_never_count() {
    let catalogue = catalogue();
    let assessment = assessment(
        Vec::new(),
        vec![training_obligation("sst", Some(1), true)],
    );

    let expired = certification("sst", Some(today() - Duration::days(1)));
    let undated = certification("sst", None);
    assert_eq!(
        conformity_percent(
            &assessment,
            &[],
            &[expired, undated],
            &catalogue,
            today()
        ),
        0
    );
}

#[test]
fn open_headcount_training_is_satisfied_by_one_valid_certification() {
    let catalogue = catalogue();
    let assessment = assessment(
        Vec::new(),
        vec![training_obligation("habilitation_electrique", None, true)],
    );
    let certifications = vec![certification(
        "habilitation_electrique",
        Some(today() + Duration::days(100)),
    )];

    assert_eq!(
        conformity_percent(&assessment, &[], &certifications, &catalogue, today()),
        100
    );
}

#[test]
fn expiring_soon_certifications_still_count_as_valid() {
    let catalogue = catalogue();
    let assessment = assessment(
        Vec::new(),
        vec![training_obligation("sst", Some(1), true)],
    );
    let certifications = vec![certification("sst", Some(today() + Duration::days(30)))];

    assert_eq!(
        conformity_percent(&assessment, &[], &certifications, &catalogue, today()),
        100
    );
}
