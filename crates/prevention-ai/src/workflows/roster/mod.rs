//! Staff training-roster import.
//!
//! Providers receive certification rosters as CSV exports from HR tools.
//! The importer maps free-text training labels onto catalogue certification
//! codes and fills missing expiry dates from the catalogue validity duration.
//! Rows naming an unknown training are skipped, not errors: rosters routinely
//! mix internal course titles with the regulated certifications tracked here.

mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::duerp::catalogue::Catalogue;
use crate::workflows::duerp::domain::CertificationRecord;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalogue: &Catalogue,
    ) -> Result<Vec<CertificationRecord>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalogue)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalogue: &Catalogue,
    ) -> Result<Vec<CertificationRecord>, RosterImportError> {
        let mut records = Vec::new();

        for record in parser::parse_records(reader)? {
            let Some(code) = mapping::certification_code_for_normalized(&record.normalized_label)
            else {
                continue;
            };
            let Some(obtained_on) = record.obtained_on else {
                continue;
            };

            let expires_on = record.expires_on.or_else(|| {
                catalogue
                    .certification_type(code)
                    .and_then(|def| def.expiry_from(obtained_on))
            });

            records.push(CertificationRecord {
                person: record.person,
                job_title: record.job_title,
                certification_code: code.to_string(),
                obtained_on,
                expires_on,
                issuer: record.issuer,
                reference: record.reference,
                level: None,
            });
        }

        Ok(records)
    }
}
