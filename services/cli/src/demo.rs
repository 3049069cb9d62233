use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use prevention_ai::error::AppError;
use prevention_ai::workflows::advisory::{batch_from_path, batch_from_str};
use prevention_ai::workflows::duerp::{
    Catalogue, CertificationRecord, EquipmentItem, Frequency, Gravity, Mastery, NewRisk,
    NewWorkUnit, ObligationAssessment, PreventionReport, PreventionService, Sector, SiteProfile,
    VerificationRecord,
};

use crate::infra::InMemoryPreventionRepository;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (YYYY-MM-DD, defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Include the per-obligation conformity breakdown in the output.
    #[arg(long)]
    pub(crate) include_breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Workforce size of the assessed site.
    #[arg(long)]
    pub(crate) workforce: Option<u32>,
    /// Total surface area in square meters.
    #[arg(long)]
    pub(crate) surface: Option<u32>,
    /// Activity sector (restauration, btp, logistique, industrie, tertiaire, formation, autre).
    #[arg(long, value_parser = crate::infra::parse_sector)]
    pub(crate) sector: Option<Sector>,
    /// Override the evaluation date (YYYY-MM-DD, defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional staff training roster CSV to score training obligations against.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Optional advisory suggestion batch (JSON) applied before assessing.
    #[arg(long)]
    pub(crate) advisory: Option<PathBuf>,
    /// Emit the raw assessment as JSON instead of the rendered summary.
    #[arg(long)]
    pub(crate) json: bool,
}

const DEMO_ADVISORY_PAYLOAD: &str = r#"{
    "units": [
        {"code": "UT3", "name": "Quai logistique", "headcount": 5, "job_titles": "Magasiniers", "rationale": "Flux de palettes quotidien non couvert par les unités existantes"}
    ],
    "risks": [
        {
            "category": "ergonomic",
            "hazard": "Manutention manuelle de charges",
            "situation": "Réception et expédition des palettes",
            "consequences": "Troubles musculo-squelettiques",
            "existing_measures": "Transpalette manuel",
            "unit_code": "UT3",
            "frequency": "frequent",
            "gravity": "significant",
            "mastery": "partial",
            "rationale": "Suggestion issue de l'analyse des intitulés de poste",
            "actions": [{
                "description": "Former l'équipe aux gestes et postures",
                "action_type": "training",
                "priority": "medium",
                "responsible": "Référent prévention",
                "due_on": null
            }]
        },
        {
            "category": "physical",
            "hazard": "Circulation de chariots élévateurs",
            "situation": "Allées partagées piétons/engins",
            "consequences": "Collision",
            "existing_measures": "Marquage au sol partiel",
            "unit_code": "UT9",
            "frequency": "frequent",
            "gravity": "severe",
            "mastery": "partial",
            "rationale": null,
            "actions": [{
                "description": "Séparer les flux piétons et engins",
                "action_type": "organizational",
                "priority": "high",
                "responsible": null,
                "due_on": null
            }]
        }
    ]
}"#;

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let catalogue = Arc::new(Catalogue::standard());
    let repository = Arc::new(InMemoryPreventionRepository::default());
    let service = PreventionService::new(catalogue.clone(), repository.clone());

    seed_site(&repository);
    let equipment = demo_equipment(today);
    let certifications = demo_certifications(today);
    let verifications = demo_verifications(today);
    let profile = SiteProfile {
        workforce_size: Some(34),
        sector: Some(Sector::Training),
        surface_area_m2: Some(850),
    };

    println!("Démonstration du moteur de prévention");
    println!("Date d'évaluation : {today}");

    let assessment = match service.assess(&profile) {
        Ok(assessment) => assessment,
        Err(err) => {
            println!("Évaluation indisponible : {err}");
            return Ok(());
        }
    };
    render_assessment(&catalogue, &assessment);

    let report = match service.report(&profile, &equipment, &certifications, &verifications, today)
    {
        Ok(report) => report,
        Err(err) => {
            println!("Rapport indisponible : {err}");
            return Ok(());
        }
    };
    render_report(&report, args.include_breakdown);

    println!("\nSuggestions de l'assistant (lot revu et accepté)");
    let mut batch = batch_from_str(DEMO_ADVISORY_PAYLOAD)?;
    batch.accept_all();
    match service.apply_suggestions(&batch) {
        Ok(outcome) => {
            println!(
                "- {} unité(s), {} risque(s), {} action(s) créés",
                outcome.units_created, outcome.risks_created, outcome.actions_created
            );
            if !outcome.unresolved_unit_codes.is_empty() {
                println!(
                    "- Références d'unité non résolues (risques créés sans rattachement) : {}",
                    outcome.unresolved_unit_codes.join(", ")
                );
            }
            for failure in &outcome.failures {
                println!("- Échec : {:?} ({})", failure.item, failure.error);
            }
        }
        Err(err) => println!("- Lot non appliqué : {err}"),
    }

    let actions = repository.actions();
    if !actions.is_empty() {
        println!("\nPlan d'actions");
        for action in &actions {
            println!(
                "- [{}] {} ({})",
                action.priority.label(),
                action.description,
                action.action_type.label()
            );
        }
    }

    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let catalogue = Arc::new(Catalogue::standard());
    let repository = Arc::new(InMemoryPreventionRepository::default());
    let service = PreventionService::new(catalogue.clone(), repository.clone());

    if let Some(path) = &args.advisory {
        let mut batch = batch_from_path(path)?;
        batch.accept_all();
        match service.apply_suggestions(&batch) {
            Ok(outcome) => println!(
                "Lot de suggestions appliqué : {} unité(s), {} risque(s), {} action(s)",
                outcome.units_created, outcome.risks_created, outcome.actions_created
            ),
            Err(err) => println!("Lot de suggestions non appliqué : {err}"),
        }
    }

    let certifications = match &args.roster {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            match service.import_roster(file) {
                Ok(records) => {
                    println!("Effectif formé importé : {} certification(s)", records.len());
                    records
                }
                Err(err) => {
                    println!("Import du roster impossible : {err}");
                    Vec::new()
                }
            }
        }
        None => Vec::new(),
    };

    let profile = SiteProfile {
        workforce_size: args.workforce,
        sector: args.sector,
        surface_area_m2: args.surface,
    };

    let assessment = match service.assess(&profile) {
        Ok(assessment) => assessment,
        Err(err) => {
            println!("Évaluation indisponible : {err}");
            return Ok(());
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&assessment) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Sérialisation impossible : {err}"),
        }
        return Ok(());
    }

    println!("Évaluation des obligations");
    println!("Date d'évaluation : {today}");
    render_assessment(&catalogue, &assessment);

    let percent = match service.conformity(&profile, &[], &certifications, today) {
        Ok(percent) => percent,
        Err(err) => {
            println!("Conformité indisponible : {err}");
            return Ok(());
        }
    };
    println!("\nConformité (équipements non renseignés) : {percent}%");

    Ok(())
}

fn render_assessment(catalogue: &Catalogue, assessment: &ObligationAssessment) {
    println!("\nObligations d'équipement");
    for obligation in &assessment.equipment {
        let label = catalogue
            .equipment_type(obligation.type_code)
            .map(|def| def.label)
            .unwrap_or(obligation.type_code);
        let kind = if obligation.mandatory {
            "obligatoire"
        } else {
            "recommandé"
        };
        println!(
            "- [{}] {} x{} — {}",
            kind, label, obligation.quantity, obligation.rationale
        );
    }

    println!("\nObligations de formation");
    for obligation in &assessment.training {
        let label = catalogue
            .certification_type(obligation.certification_code)
            .map(|def| def.label)
            .unwrap_or(obligation.certification_code);
        let target = match obligation.required_headcount {
            Some(count) => format!("{count} personne(s)"),
            None => "au moins une personne".to_string(),
        };
        println!("- {} : {} — {}", label, target, obligation.rationale);
    }

    if assessment.alerts.is_empty() {
        println!("\nAlertes : aucune");
    } else {
        println!("\nAlertes");
        for alert in &assessment.alerts {
            println!("- [{}] {}", alert.severity.label(), alert.message);
        }
    }
}

fn render_report(report: &PreventionReport, include_breakdown: bool) {
    println!(
        "\nConformité globale : {}% ({})",
        report.conformity_percent,
        report.conformity_level.label()
    );

    if report.equipment_gaps.is_empty() {
        println!("Écarts d'équipement : aucun");
    } else {
        println!("Écarts d'équipement");
        for gap in &report.equipment_gaps {
            println!(
                "- [{}] {} : {}/{} conformes, {} manquant(s)",
                gap.priority.label(),
                gap.label,
                gap.compliant_count,
                gap.required,
                gap.missing
            );
        }
    }

    if !report.equipment_attention.is_empty() {
        println!("Équipements à traiter");
        for item in &report.equipment_attention {
            println!("- {} ({}) : {}", item.type_code, item.location, item.status_label);
        }
    }

    if !report.certification_attention.is_empty() {
        println!("Certifications à renouveler");
        for record in &report.certification_attention {
            let due = record
                .expires_on
                .map(|date| date.to_string())
                .unwrap_or_else(|| "échéance inconnue".to_string());
            println!(
                "- {} — {} ({}, {})",
                record.person, record.certification_code, record.status_label, due
            );
        }
    }

    if !report.overdue_verifications.is_empty() {
        println!("Vérifications périodiques en retard");
        for verification in &report.overdue_verifications {
            println!(
                "- {} (dernière le {})",
                verification.label, verification.performed_on
            );
        }
    }

    println!(
        "Risques cotés : {} | non évalués : {} | critiques : {}",
        report.risks.scored, report.risks.unevaluated, report.risks.critical
    );

    if include_breakdown {
        println!("\nDétail de conformité");
        for line in &report.breakdown.equipment {
            println!(
                "- {} : {}/{} ({})",
                line.type_code,
                line.compliant_count,
                line.required,
                if line.satisfied { "ok" } else { "écart" }
            );
        }
        for line in &report.breakdown.training {
            println!(
                "- {} : {} valide(s), crédit {}",
                line.certification_code, line.valid_count, line.credit
            );
        }
    }
}

fn seed_site(repository: &InMemoryPreventionRepository) {
    use prevention_ai::workflows::duerp::PreventionRepository as _;
    use prevention_ai::workflows::duerp::RiskCategory;

    let atelier = repository
        .create_unit(NewWorkUnit {
            code: "UT1".to_string(),
            name: "Atelier technique".to_string(),
            headcount: Some(12),
            job_titles: Some("Formateurs techniques, apprentis".to_string()),
        })
        .ok();
    let plateau = repository
        .create_unit(NewWorkUnit {
            code: "UT2".to_string(),
            name: "Plateau de formation tertiaire".to_string(),
            headcount: Some(22),
            job_titles: Some("Formateurs, personnel administratif".to_string()),
        })
        .ok();

    let risks = [
        NewRisk {
            category: RiskCategory::Physical,
            hazard: "Contact électrique sur bancs d'essai".to_string(),
            situation: "Travaux pratiques d'électrotechnique".to_string(),
            consequences: "Électrisation, brûlures".to_string(),
            existing_measures: "Consignation, tapis isolants".to_string(),
            unit: atelier.as_ref().map(|unit| unit.id.clone()),
            hazard_classes: Default::default(),
            frequency: Some(Frequency::Frequent),
            gravity: Some(Gravity::Severe),
            mastery: Some(Mastery::Partial),
        },
        NewRisk {
            category: RiskCategory::Chemical,
            hazard: "Stockage de solvants et dégraissants".to_string(),
            situation: "Local produits de l'atelier".to_string(),
            consequences: "Intoxication, incendie".to_string(),
            existing_measures: "Armoire ventilée".to_string(),
            unit: atelier.as_ref().map(|unit| unit.id.clone()),
            hazard_classes: Default::default(),
            frequency: Some(Frequency::Intermittent),
            gravity: Some(Gravity::Severe),
            mastery: Some(Mastery::Effective),
        },
        NewRisk {
            category: RiskCategory::Ergonomic,
            hazard: "Travail prolongé sur écran".to_string(),
            situation: "Salles de formation bureautique".to_string(),
            consequences: "Fatigue visuelle, TMS".to_string(),
            existing_measures: "Sièges réglables".to_string(),
            unit: plateau.as_ref().map(|unit| unit.id.clone()),
            hazard_classes: Default::default(),
            frequency: None,
            gravity: None,
            mastery: None,
        },
    ];

    for risk in risks {
        let _ = repository.create_risk(risk);
    }
}

fn demo_equipment(today: NaiveDate) -> Vec<EquipmentItem> {
    let mut fresh = EquipmentItem::new("extincteur_eau", "Hall d'accueil");
    fresh.last_checked_on = Some(today - Duration::days(90));

    let mut stale = EquipmentItem::new("extincteur_eau", "Atelier technique");
    stale.next_check_on = Some(today - Duration::days(12));

    let mut co2 = EquipmentItem::new("extincteur_co2", "Local électrique");
    co2.last_checked_on = Some(today - Duration::days(60));

    vec![
        fresh,
        stale,
        co2,
        EquipmentItem::new("trousse_secours", "Accueil"),
        EquipmentItem::new("eclairage_securite", "Circulations"),
        EquipmentItem::new("plan_evacuation", "Hall d'accueil"),
        EquipmentItem::new("plan_evacuation", "Atelier technique"),
    ]
}

fn demo_certifications(today: NaiveDate) -> Vec<CertificationRecord> {
    let certification = |person: &str, code: &str, expires_in_days: i64| CertificationRecord {
        person: person.to_string(),
        job_title: None,
        certification_code: code.to_string(),
        obtained_on: today - Duration::days(300),
        expires_on: Some(today + Duration::days(expires_in_days)),
        issuer: Some("INRS".to_string()),
        reference: None,
        level: None,
    };

    vec![
        certification("Marie Lefort", "sst", 400),
        certification("Paul Arnaud", "sst", 45),
        certification("Nadia Bouzid", "habilitation_electrique", -15),
        certification("Luc Morel", "epi_incendie", 500),
        certification("Sonia Diallo", "evacuation", 200),
    ]
}

fn demo_verifications(today: NaiveDate) -> Vec<VerificationRecord> {
    vec![VerificationRecord {
        verification_code: "exercice_evacuation".to_string(),
        performed_on: today - Duration::days(240),
        performed_by: "Référent sécurité".to_string(),
        participants: Some(28),
        passed: true,
        observations: Some("Évacuation complète en 4 minutes".to_string()),
        next_planned_on: None,
    }]
}
