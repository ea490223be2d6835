//! Demo roster generator.
//!
//! Produces a small synthetic export for trying the tool without a real
//! SIS file: John Doe with two guardians on separate rows, Jimmy Roe
//! with one.

use std::path::Path;

use crate::error::WriteResult;
use crate::models::RosterRow;

/// The built-in demo rows.
pub fn dummy_rows() -> Vec<RosterRow> {
    vec![
        RosterRow {
            student_first_name: "John".into(),
            student_last_name: "Doe".into(),
            student_birthdate: "01/01/2000".into(),
            student_grade: "10".into(),
            contact_email: "johndoe@test.com".into(),
            guardian_first_name: "Jane".into(),
            guardian_last_name: "Doe".into(),
            guardian_email: "janedoe@parent.com".into(),
            guardian_phone: "123-456-7890".into(),
        },
        RosterRow {
            student_first_name: "John".into(),
            student_last_name: "Doe".into(),
            student_birthdate: "01/01/2000".into(),
            student_grade: "9".into(),
            contact_email: "johndoe@test.com".into(),
            guardian_first_name: "Jim".into(),
            guardian_last_name: "Doe".into(),
            guardian_email: "jimdoe@parent.com".into(),
            guardian_phone: "123-456-7891".into(),
        },
        RosterRow {
            student_first_name: "Jimmy".into(),
            student_last_name: "Roe".into(),
            student_birthdate: "01/01/2000".into(),
            student_grade: "11".into(),
            contact_email: "jimmyroe@test.com".into(),
            guardian_first_name: "Janet".into(),
            guardian_last_name: "Roe".into(),
            guardian_email: "janetroe@parent.com".into(),
            guardian_phone: "123-456-7898".into(),
        },
    ]
}

/// Write the demo roster to `path` with the standard input header set.
pub fn write_dummy_roster(path: &Path) -> WriteResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in dummy_rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
