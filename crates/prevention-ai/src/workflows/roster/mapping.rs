use super::normalizer::normalize_label;
use std::collections::HashMap;
use std::sync::OnceLock;

static ROSTER_LABEL_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

pub(crate) fn certification_code_for_normalized(normalized_label: &str) -> Option<&'static str> {
    roster_label_map().get(normalized_label).copied()
}

fn roster_label_map() -> &'static HashMap<String, &'static str> {
    ROSTER_LABEL_MAP.get_or_init(|| {
        const LABEL_TO_CODE: &[(&str, &str)] = &[
            // Premiers secours
            ("SST", "sst"),
            ("Sauveteur Secouriste du Travail", "sst"),
            ("Sauveteur secouriste du travail (SST)", "sst"),
            ("Premiers secours", "sst"),
            ("MAC SST", "sst"),
            // Incendie
            ("EPI", "epi_incendie"),
            ("Équipier de première intervention", "epi_incendie"),
            ("Equipier de premiere intervention", "epi_incendie"),
            ("Manipulation des extincteurs", "epi_incendie"),
            // Évacuation
            ("Évacuation", "evacuation"),
            ("Evacuation", "evacuation"),
            ("Guide-file / serre-file", "evacuation"),
            ("Guide file serre file", "evacuation"),
            // Habilitations
            ("Habilitation électrique", "habilitation_electrique"),
            ("Habilitation electrique", "habilitation_electrique"),
            ("Habilitation électrique B0/H0", "habilitation_electrique"),
            ("Habilitation électrique BS/BE", "habilitation_electrique"),
            // Conduite d'équipements
            ("CACES R489", "caces_chariot"),
            ("CACES chariot élévateur", "caces_chariot"),
            ("CACES R389", "caces_chariot"),
            ("Cariste", "caces_chariot"),
            ("CACES R482", "caces_engins"),
            ("CACES engins de chantier", "caces_engins"),
            ("CACES R486", "caces_pemp"),
            ("CACES nacelle", "caces_pemp"),
            ("CACES PEMP", "caces_pemp"),
            // Hauteur et manutention
            ("Travail en hauteur", "travail_hauteur"),
            ("Port du harnais", "travail_hauteur"),
            ("Travail en hauteur et port du harnais", "travail_hauteur"),
            ("Gestes et postures", "gestes_postures"),
            ("Gestes & postures", "gestes_postures"),
            ("PRAP", "gestes_postures"),
            ("PRAP IBC", "gestes_postures"),
        ];

        let mut map = HashMap::with_capacity(LABEL_TO_CODE.len());
        for (label, code) in LABEL_TO_CODE {
            map.insert(normalize_label(label), *code);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(label: &str) -> Option<&'static str> {
    let normalized = normalize_label(label);
    certification_code_for_normalized(&normalized)
}
