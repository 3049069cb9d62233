use std::io::Cursor;

use chrono::NaiveDate;
use prevention_ai::workflows::duerp::{certification_status, Catalogue, CertificationStatus};
use prevention_ai::workflows::roster::RosterImporter;

const ROSTER_CSV: &str = "\
Nom,Fonction,Formation,Obtenue le,Expire le,Organisme,Référence
Marie Lefort,Formatrice,SST,2025-03-10,,INRS,SST-2201
Paul Arnaud,Cariste,CACES R489,10/01/2024,10/01/2029,AFTRAL,CAC-889
Nadia Bouzid,Électricienne,Habilitation électrique B0/H0,2024-06-17,,Apave,HAB-412
Jean Petit,Commercial,Techniques de vente,2025-01-06,,,
";

#[test]
fn roster_rows_become_certification_records() {
    let catalogue = Catalogue::standard();
    let records = RosterImporter::from_reader(Cursor::new(ROSTER_CSV), &catalogue)
        .expect("roster imports");

    // The sales course is not a tracked certification.
    assert_eq!(records.len(), 3);

    let sst = records
        .iter()
        .find(|record| record.certification_code == "sst")
        .expect("sst row imported");
    assert_eq!(sst.person, "Marie Lefort");
    // Missing expiry filled from the 24 month catalogue validity.
    assert_eq!(
        sst.expires_on,
        Some(NaiveDate::from_ymd_opt(2027, 3, 10).expect("valid date"))
    );

    let caces = records
        .iter()
        .find(|record| record.certification_code == "caces_chariot")
        .expect("caces row imported");
    assert_eq!(
        caces.expires_on,
        Some(NaiveDate::from_ymd_opt(2029, 1, 10).expect("valid date"))
    );

    let habilitation = records
        .iter()
        .find(|record| record.certification_code == "habilitation_electrique")
        .expect("habilitation row imported");
    assert_eq!(
        habilitation.expires_on,
        Some(NaiveDate::from_ymd_opt(2027, 6, 17).expect("valid date"))
    );
}

#[test]
fn imported_records_feed_the_status_deriver() {
    let catalogue = Catalogue::standard();
    let records = RosterImporter::from_reader(Cursor::new(ROSTER_CSV), &catalogue)
        .expect("roster imports");

    let sst = records
        .iter()
        .find(|record| record.certification_code == "sst")
        .expect("sst row imported");

    let before_expiry = NaiveDate::from_ymd_opt(2026, 4, 15).expect("valid date");
    assert_eq!(
        certification_status(sst, before_expiry),
        CertificationStatus::Valid
    );

    let after_expiry = NaiveDate::from_ymd_opt(2027, 4, 15).expect("valid date");
    assert_eq!(
        certification_status(sst, after_expiry),
        CertificationStatus::Expired
    );
}
