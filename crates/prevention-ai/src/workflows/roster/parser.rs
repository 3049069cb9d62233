use super::normalizer::normalize_label;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) person: String,
    pub(crate) job_title: Option<String>,
    pub(crate) normalized_label: String,
    pub(crate) obtained_on: Option<NaiveDate>,
    pub(crate) expires_on: Option<NaiveDate>,
    pub(crate) issuer: Option<String>,
    pub(crate) reference: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        records.push(RosterRecord {
            person: row.person,
            job_title: row.job_title,
            normalized_label: normalize_label(&row.certification),
            obtained_on: row.obtained.as_deref().and_then(parse_date),
            expires_on: row.expires.as_deref().and_then(parse_date),
            issuer: row.issuer,
            reference: row.reference,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Nom")]
    person: String,
    #[serde(rename = "Fonction", default, deserialize_with = "empty_string_as_none")]
    job_title: Option<String>,
    #[serde(rename = "Formation")]
    certification: String,
    #[serde(rename = "Obtenue le", default, deserialize_with = "empty_string_as_none")]
    obtained: Option<String>,
    #[serde(rename = "Expire le", default, deserialize_with = "empty_string_as_none")]
    expires: Option<String>,
    #[serde(rename = "Organisme", default, deserialize_with = "empty_string_as_none")]
    issuer: Option<String>,
    #[serde(rename = "Référence", default, deserialize_with = "empty_string_as_none")]
    reference: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// HR exports mix ISO dates, French day-first dates, and full timestamps.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
