use std::io::Read;
use std::path::Path;

use super::{AdvisoryImportError, SuggestionBatch};

pub fn batch_from_str(payload: &str) -> Result<SuggestionBatch, AdvisoryImportError> {
    Ok(serde_json::from_str(payload)?)
}

pub fn batch_from_reader<R: Read>(reader: R) -> Result<SuggestionBatch, AdvisoryImportError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn batch_from_path<P: AsRef<Path>>(path: P) -> Result<SuggestionBatch, AdvisoryImportError> {
    let file = std::fs::File::open(path)?;
    batch_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_leave_entries_unaccepted() {
        let payload = r#"{
            "units": [{"code": "UT1", "name": "Atelier soudure", "headcount": 4, "job_titles": null, "rationale": "Poste à risques spécifiques"}],
            "risks": [{
                "category": "physical",
                "hazard": "Projection d'étincelles",
                "unit_code": "UT1",
                "frequency": "frequent",
                "gravity": "significant",
                "mastery": "partial",
                "rationale": null,
                "actions": [{
                    "description": "Installer des écrans de soudage",
                    "action_type": "protection",
                    "priority": "high",
                    "responsible": null,
                    "due_on": null
                }]
            }]
        }"#;

        let batch = batch_from_str(payload).expect("payload parses");
        assert_eq!(batch.units.len(), 1);
        assert_eq!(batch.risks.len(), 1);
        assert!(!batch.units[0].accepted);
        assert!(!batch.risks[0].accepted);
        assert!(!batch.risks[0].actions[0].accepted);
        assert!(batch.risks[0].hazard_classes.is_empty());
        assert_eq!(batch.risks[0].situation, "");
    }

    #[test]
    fn accept_all_flags_every_entry() {
        let payload = r#"{
            "units": [],
            "risks": [{
                "category": "chemical",
                "hazard": "Stockage de solvants",
                "unit_code": null,
                "frequency": null,
                "gravity": null,
                "mastery": null,
                "rationale": null,
                "actions": [{
                    "description": "Mettre en place une armoire ventilée",
                    "action_type": "technical",
                    "priority": "medium",
                    "responsible": null,
                    "due_on": null
                }]
            }]
        }"#;

        let mut batch = batch_from_str(payload).expect("payload parses");
        batch.accept_all();
        assert!(batch.risks[0].accepted);
        assert!(batch.risks[0].actions[0].accepted);
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = batch_from_path("./does-not-exist.json").expect_err("expected io error");
        match error {
            AdvisoryImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
