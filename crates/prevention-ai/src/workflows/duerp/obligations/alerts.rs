use std::collections::BTreeSet;

use super::super::domain::{HazardClass, SiteProfile};
use super::{AlertSeverity, PreventionAlert};

/// Workforce thresholds for the consultation/infrastructure alerts.
const FIRE_REVIEW_WORKFORCE: u32 = 20;
const STAFF_BODY_WORKFORCE: u32 = 11;
const INFIRMARY_WORKFORCE: u32 = 200;

pub(crate) fn consultation_alerts(
    hazards: &BTreeSet<HazardClass>,
    profile: &SiteProfile,
) -> Vec<PreventionAlert> {
    let mut alerts = Vec::new();
    let Some(workforce) = profile.workforce_size else {
        return alerts;
    };

    if workforce >= FIRE_REVIEW_WORKFORCE && !hazards.contains(&HazardClass::Fire) {
        alerts.push(PreventionAlert {
            severity: AlertSeverity::Warning,
            message: format!(
                "Aucun risque incendie recensé pour un effectif de {workforce} personnes : vérifier que l'évaluation incendie a bien été menée"
            ),
        });
    }

    if workforce >= STAFF_BODY_WORKFORCE {
        alerts.push(PreventionAlert {
            severity: AlertSeverity::Info,
            message: "À partir de 11 salariés, le CSE doit être consulté sur l'évaluation des risques"
                .to_string(),
        });
    }

    if workforce >= INFIRMARY_WORKFORCE {
        alerts.push(PreventionAlert {
            severity: AlertSeverity::Warning,
            message: "Au-delà de 200 salariés, un local d'infirmerie avec personnel infirmier est obligatoire"
                .to_string(),
        });
    }

    alerts
}
