use std::collections::BTreeSet;

use super::super::domain::{HazardClass, Sector, SiteProfile};
use super::{EquipmentObligation, ObligationPriority, TrainingObligation};

/// Surface covered by one 6L water-spray extinguisher.
const WATER_EXTINGUISHER_COVERAGE_M2: u32 = 200;

/// Water extinguishers backed up by one CO2 unit in electrical environments.
const WATER_PER_CO2: u32 = 3;

/// Workforce above which a fire-alarm system and a defibrillator trigger.
const LARGE_SITE_WORKFORCE: u32 = 50;

pub(crate) fn equipment_obligations(
    hazards: &BTreeSet<HazardClass>,
    unit_count: usize,
    profile: &SiteProfile,
) -> Vec<EquipmentObligation> {
    let mut obligations = Vec::new();
    let unit_count = (unit_count as u32).max(1);
    let workforce = profile.workforce_size;

    let water_quantity = match profile.surface_area_m2 {
        Some(surface) => surface.div_ceil(WATER_EXTINGUISHER_COVERAGE_M2).max(1),
        None => unit_count,
    };
    obligations.push(EquipmentObligation {
        type_code: "extincteur_eau",
        quantity: water_quantity,
        mandatory: true,
        rationale: match profile.surface_area_m2 {
            Some(surface) => format!(
                "Un extincteur à eau pulvérisée de 6 litres pour 200 m² de plancher ({surface} m² déclarés)"
            ),
            None => format!(
                "Surface inconnue : un appareil par unité de travail ({unit_count} unités)"
            ),
        },
        priority: ObligationPriority::Critical,
    });

    if hazards.contains(&HazardClass::Electrical) {
        obligations.push(EquipmentObligation {
            type_code: "extincteur_co2",
            quantity: water_quantity.div_ceil(WATER_PER_CO2).max(1),
            mandatory: true,
            rationale: "Un extincteur CO2 pour trois extincteurs à eau en présence de risque électrique"
                .to_string(),
            priority: ObligationPriority::High,
        });
    }

    if hazards.contains(&HazardClass::Chemical) || hazards.contains(&HazardClass::Flammable) {
        obligations.push(EquipmentObligation {
            type_code: "extincteur_poudre",
            quantity: 1,
            mandatory: true,
            rationale: "Produits chimiques ou inflammables manipulés sur site".to_string(),
            priority: ObligationPriority::High,
        });
    }

    let defibrillator_trigger = workforce.is_some_and(|size| size >= LARGE_SITE_WORKFORCE)
        || hazards.contains(&HazardClass::Electrical)
        || hazards.contains(&HazardClass::Cardiac);
    obligations.push(EquipmentObligation {
        type_code: "defibrillateur",
        quantity: u32::from(defibrillator_trigger),
        mandatory: false,
        rationale: if defibrillator_trigger {
            "Recommandé : effectif d'au moins 50 personnes ou risque électrique/cardiaque identifié"
                .to_string()
        } else {
            "Aucun déclencheur identifié, installation laissée à l'appréciation de l'employeur"
                .to_string()
        },
        priority: ObligationPriority::Standard,
    });

    obligations.push(EquipmentObligation {
        type_code: "trousse_secours",
        quantity: unit_count,
        mandatory: true,
        rationale: "Une trousse de premiers secours par unité de travail".to_string(),
        priority: ObligationPriority::Critical,
    });

    if hazards.contains(&HazardClass::Corrosive) {
        obligations.push(EquipmentObligation {
            type_code: "rince_oeil",
            quantity: 1,
            mandatory: true,
            rationale: "Manipulation de produits corrosifs ou acides identifiée".to_string(),
            priority: ObligationPriority::High,
        });
    }

    let catering = profile.sector == Some(Sector::Catering);
    if catering || hazards.contains(&HazardClass::Kitchen) || hazards.contains(&HazardClass::Fire) {
        obligations.push(EquipmentObligation {
            type_code: "couverture_anti_feu",
            quantity: 1,
            mandatory: false,
            rationale: "Locaux de cuisine ou risque incendie identifié".to_string(),
            priority: ObligationPriority::Standard,
        });
    }

    if workforce.is_some_and(|size| size >= LARGE_SITE_WORKFORCE) {
        obligations.push(EquipmentObligation {
            type_code: "alarme_incendie",
            quantity: 1,
            mandatory: true,
            rationale: "Alarme sonore obligatoire au-delà de 50 personnes réunies".to_string(),
            priority: ObligationPriority::Critical,
        });
    }

    obligations.push(EquipmentObligation {
        type_code: "eclairage_securite",
        quantity: 1,
        mandatory: true,
        rationale: "Éclairage de sécurité requis dans tous les locaux de travail".to_string(),
        priority: ObligationPriority::Critical,
    });

    obligations.push(EquipmentObligation {
        type_code: "plan_evacuation",
        quantity: unit_count,
        mandatory: true,
        rationale: "Un plan d'évacuation affiché par unité de travail".to_string(),
        priority: ObligationPriority::Critical,
    });

    obligations
}

pub(crate) fn training_obligations(
    hazards: &BTreeSet<HazardClass>,
    profile: &SiteProfile,
) -> Vec<TrainingObligation> {
    let mut obligations = Vec::new();
    let workforce = profile.workforce_size;

    obligations.push(TrainingObligation {
        certification_code: "sst",
        required_headcount: workforce.map(|size| (size * 15).div_ceil(100).max(1)),
        mandatory: true,
        rationale: "15 % de l'effectif formé au sauvetage secourisme du travail".to_string(),
        priority: ObligationPriority::Critical,
    });

    obligations.push(TrainingObligation {
        certification_code: "epi_incendie",
        required_headcount: workforce.map(|size| (size * 10).div_ceil(100).max(1)),
        mandatory: true,
        rationale: "Au moins un équipier de première intervention présent en permanence".to_string(),
        priority: ObligationPriority::Critical,
    });

    obligations.push(TrainingObligation {
        certification_code: "evacuation",
        required_headcount: Some(workforce.unwrap_or(1)),
        mandatory: true,
        rationale: "Tout le personnel participe aux exercices d'évacuation".to_string(),
        priority: ObligationPriority::High,
    });

    if hazards.contains(&HazardClass::Electrical) {
        obligations.push(TrainingObligation {
            certification_code: "habilitation_electrique",
            required_headcount: None,
            mandatory: true,
            rationale: "Risque électrique identifié : au moins un intervenant habilité".to_string(),
            priority: ObligationPriority::Critical,
        });
    }

    if hazards.contains(&HazardClass::Forklift) {
        obligations.push(TrainingObligation {
            certification_code: "caces_chariot",
            required_headcount: None,
            mandatory: true,
            rationale: "Conduite de chariots de manutention identifiée".to_string(),
            priority: ObligationPriority::High,
        });
    }

    if hazards.contains(&HazardClass::ConstructionEquipment) {
        obligations.push(TrainingObligation {
            certification_code: "caces_engins",
            required_headcount: None,
            mandatory: true,
            rationale: "Conduite d'engins de chantier identifiée".to_string(),
            priority: ObligationPriority::High,
        });
    }

    if hazards.contains(&HazardClass::AerialPlatform) || hazards.contains(&HazardClass::Height) {
        obligations.push(TrainingObligation {
            certification_code: "caces_pemp",
            required_headcount: None,
            mandatory: true,
            rationale: "Utilisation de plateformes élévatrices ou travaux en élévation identifiés"
                .to_string(),
            priority: ObligationPriority::High,
        });
    }

    if hazards.contains(&HazardClass::Height) {
        obligations.push(TrainingObligation {
            certification_code: "travail_hauteur",
            required_headcount: None,
            mandatory: true,
            rationale: "Travaux en hauteur identifiés : formation au port du harnais".to_string(),
            priority: ObligationPriority::Critical,
        });
    }

    if hazards.contains(&HazardClass::ManualHandling) {
        obligations.push(TrainingObligation {
            certification_code: "gestes_postures",
            required_headcount: None,
            mandatory: false,
            rationale: "Risque de troubles musculo-squelettiques identifié".to_string(),
            priority: ObligationPriority::Standard,
        });
    }

    obligations
}
