use super::domain::EquipmentCategory;
use chrono::{Months, NaiveDate};

/// Catalogue entry for a hazard-mitigation equipment type.
#[derive(Debug, Clone)]
pub struct EquipmentTypeDef {
    pub code: &'static str,
    pub label: &'static str,
    pub category: EquipmentCategory,
    /// Regulatory check interval; some types carry no periodic check.
    pub periodicity_months: Option<u32>,
    pub max_service_life_years: Option<u32>,
    pub regulation: &'static str,
    pub notes: &'static str,
}

/// Catalogue entry for a mandatory certification type.
#[derive(Debug, Clone)]
pub struct CertificationTypeDef {
    pub code: &'static str,
    pub label: &'static str,
    pub short_code: &'static str,
    pub validity_months: u32,
    /// Whether this provider's own trainers can deliver the certification.
    pub deliverable: bool,
    pub regulation: &'static str,
    pub rationale: &'static str,
}

impl CertificationTypeDef {
    /// Expiry date implied by the catalogue validity when a record carries none.
    pub fn expiry_from(&self, obtained_on: NaiveDate) -> Option<NaiveDate> {
        obtained_on.checked_add_months(Months::new(self.validity_months))
    }
}

/// Catalogue entry for a periodic-verification type.
#[derive(Debug, Clone)]
pub struct VerificationTypeDef {
    pub code: &'static str,
    pub label: &'static str,
    pub periodicity_months: u32,
    pub regulation: &'static str,
}

/// Immutable reference tables injected into every engine call.
///
/// The tables are plain data: the engine never validates them for legal
/// correctness, and alternative catalogues (e.g. per jurisdiction) can
/// coexist in tests.
#[derive(Debug)]
pub struct Catalogue {
    equipment_types: Vec<EquipmentTypeDef>,
    certification_types: Vec<CertificationTypeDef>,
    verification_types: Vec<VerificationTypeDef>,
}

impl Catalogue {
    pub fn new(
        equipment_types: Vec<EquipmentTypeDef>,
        certification_types: Vec<CertificationTypeDef>,
        verification_types: Vec<VerificationTypeDef>,
    ) -> Self {
        Self {
            equipment_types,
            certification_types,
            verification_types,
        }
    }

    /// French reference tables used by the production deployments.
    pub fn standard() -> Self {
        Self::new(
            standard_equipment_types(),
            standard_certification_types(),
            standard_verification_types(),
        )
    }

    pub fn equipment_types(&self) -> &[EquipmentTypeDef] {
        &self.equipment_types
    }

    pub fn certification_types(&self) -> &[CertificationTypeDef] {
        &self.certification_types
    }

    pub fn verification_types(&self) -> &[VerificationTypeDef] {
        &self.verification_types
    }

    pub fn equipment_type(&self, code: &str) -> Option<&EquipmentTypeDef> {
        self.equipment_types.iter().find(|def| def.code == code)
    }

    pub fn certification_type(&self, code: &str) -> Option<&CertificationTypeDef> {
        self.certification_types.iter().find(|def| def.code == code)
    }

    pub fn verification_type(&self, code: &str) -> Option<&VerificationTypeDef> {
        self.verification_types.iter().find(|def| def.code == code)
    }
}

fn standard_equipment_types() -> Vec<EquipmentTypeDef> {
    vec![
        EquipmentTypeDef {
            code: "extincteur_eau",
            label: "Extincteur à eau pulvérisée 6L",
            category: EquipmentCategory::FireFighting,
            periodicity_months: Some(12),
            max_service_life_years: Some(20),
            regulation: "Code du travail R4227-29",
            notes: "Un appareil de 6 litres au minimum pour 200 m² de plancher, avec un minimum d'un appareil par niveau.",
        },
        EquipmentTypeDef {
            code: "extincteur_co2",
            label: "Extincteur CO2",
            category: EquipmentCategory::FireFighting,
            periodicity_months: Some(12),
            max_service_life_years: Some(20),
            regulation: "Code du travail R4227-30",
            notes: "Adapté aux feux d'origine électrique, à placer près des armoires et locaux électriques.",
        },
        EquipmentTypeDef {
            code: "extincteur_poudre",
            label: "Extincteur à poudre polyvalente",
            category: EquipmentCategory::FireFighting,
            periodicity_months: Some(12),
            max_service_life_years: Some(20),
            regulation: "Code du travail R4227-30",
            notes: "Requis lorsque des produits chimiques ou inflammables sont stockés ou manipulés.",
        },
        EquipmentTypeDef {
            code: "defibrillateur",
            label: "Défibrillateur automatisé externe (DAE)",
            category: EquipmentCategory::FirstAid,
            periodicity_months: Some(12),
            max_service_life_years: None,
            regulation: "Décret 2018-1186",
            notes: "Recommandé au-delà de 50 personnes accueillies ou en présence de risques électriques.",
        },
        EquipmentTypeDef {
            code: "trousse_secours",
            label: "Trousse de premiers secours",
            category: EquipmentCategory::FirstAid,
            periodicity_months: Some(6),
            max_service_life_years: None,
            regulation: "Code du travail R4224-14",
            notes: "Matériel de premiers secours adapté à la nature des risques, facilement accessible, par unité de travail.",
        },
        EquipmentTypeDef {
            code: "rince_oeil",
            label: "Rince-œil / douche de sécurité",
            category: EquipmentCategory::FirstAid,
            periodicity_months: Some(12),
            max_service_life_years: None,
            regulation: "Code du travail R4224-14",
            notes: "Obligatoire en cas de manipulation de produits corrosifs ou acides.",
        },
        EquipmentTypeDef {
            code: "couverture_anti_feu",
            label: "Couverture anti-feu",
            category: EquipmentCategory::FireFighting,
            periodicity_months: None,
            max_service_life_years: Some(7),
            regulation: "NF EN 1869",
            notes: "Recommandée dans les cuisines et locaux de restauration.",
        },
        EquipmentTypeDef {
            code: "alarme_incendie",
            label: "Système d'alarme incendie",
            category: EquipmentCategory::Evacuation,
            periodicity_months: Some(6),
            max_service_life_years: None,
            regulation: "Code du travail R4227-34",
            notes: "Signal sonore obligatoire dans les établissements réunissant plus de 50 personnes.",
        },
        EquipmentTypeDef {
            code: "eclairage_securite",
            label: "Éclairage de sécurité (BAES)",
            category: EquipmentCategory::Evacuation,
            periodicity_months: Some(12),
            max_service_life_years: Some(10),
            regulation: "Code du travail R4227-14",
            notes: "Permet d'assurer l'évacuation en cas d'interruption de l'éclairage normal.",
        },
        EquipmentTypeDef {
            code: "plan_evacuation",
            label: "Plan d'évacuation affiché",
            category: EquipmentCategory::Evacuation,
            periodicity_months: None,
            max_service_life_years: None,
            regulation: "Code du travail R4227-38",
            notes: "Consigne de sécurité incendie affichée dans chaque local, un plan par unité de travail.",
        },
    ]
}

fn standard_certification_types() -> Vec<CertificationTypeDef> {
    vec![
        CertificationTypeDef {
            code: "sst",
            label: "Sauveteur Secouriste du Travail",
            short_code: "SST",
            validity_months: 24,
            deliverable: true,
            regulation: "Code du travail R4224-15",
            rationale: "Un membre du personnel formé aux premiers secours dans chaque atelier et chantier.",
        },
        CertificationTypeDef {
            code: "epi_incendie",
            label: "Équipier de première intervention",
            short_code: "EPI",
            validity_months: 36,
            deliverable: true,
            regulation: "Code du travail R4227-28",
            rationale: "Personnel entraîné à la manipulation des extincteurs et à la première intervention.",
        },
        CertificationTypeDef {
            code: "evacuation",
            label: "Guide-file / serre-file évacuation",
            short_code: "EVAC",
            validity_months: 12,
            deliverable: true,
            regulation: "Code du travail R4227-39",
            rationale: "Exercices et essais périodiques d'évacuation au moins tous les six mois.",
        },
        CertificationTypeDef {
            code: "habilitation_electrique",
            label: "Habilitation électrique",
            short_code: "HAB-ELEC",
            validity_months: 36,
            deliverable: false,
            regulation: "Code du travail R4544-9",
            rationale: "Toute opération sur ou à proximité d'installations électriques exige une habilitation.",
        },
        CertificationTypeDef {
            code: "caces_chariot",
            label: "CACES chariots de manutention",
            short_code: "CACES R489",
            validity_months: 60,
            deliverable: false,
            regulation: "Code du travail R4323-56",
            rationale: "Autorisation de conduite obligatoire pour les chariots automoteurs à conducteur porté.",
        },
        CertificationTypeDef {
            code: "caces_engins",
            label: "CACES engins de chantier",
            short_code: "CACES R482",
            validity_months: 120,
            deliverable: false,
            regulation: "Code du travail R4323-56",
            rationale: "Autorisation de conduite obligatoire pour les engins de chantier.",
        },
        CertificationTypeDef {
            code: "caces_pemp",
            label: "CACES plateformes élévatrices mobiles",
            short_code: "CACES R486",
            validity_months: 60,
            deliverable: false,
            regulation: "Code du travail R4323-56",
            rationale: "Autorisation de conduite obligatoire pour les nacelles et PEMP.",
        },
        CertificationTypeDef {
            code: "travail_hauteur",
            label: "Travail en hauteur et port du harnais",
            short_code: "HAUTEUR",
            validity_months: 36,
            deliverable: true,
            regulation: "Code du travail R4323-89",
            rationale: "Formation au port des équipements de protection contre les chutes de hauteur.",
        },
        CertificationTypeDef {
            code: "gestes_postures",
            label: "Gestes et postures / PRAP",
            short_code: "PRAP",
            validity_months: 24,
            deliverable: true,
            regulation: "Code du travail R4541-8",
            rationale: "Formation à la manutention manuelle pour limiter les troubles musculo-squelettiques.",
        },
    ]
}

fn standard_verification_types() -> Vec<VerificationTypeDef> {
    vec![
        VerificationTypeDef {
            code: "exercice_evacuation",
            label: "Exercice d'évacuation",
            periodicity_months: 6,
            regulation: "Code du travail R4227-39",
        },
        VerificationTypeDef {
            code: "verification_extincteurs",
            label: "Vérification des extincteurs",
            periodicity_months: 12,
            regulation: "Code du travail R4227-39 / NF S61-919",
        },
        VerificationTypeDef {
            code: "verification_electrique",
            label: "Vérification des installations électriques",
            periodicity_months: 12,
            regulation: "Code du travail R4226-14",
        },
    ]
}
