//! Collapse flat (student, guardian) rows into one record per student.
//!
//! Exports list one row per guardian, so a student with several contacts
//! appears several times. This module groups those rows by the student's
//! contact email and numbers the guardians:
//!
//! ```text
//! CSV Input (flat rows)                  Merged Output
//! ┌─────────────────────────────┐        ┌─────────────────────────────┐
//! │ johndoe@…,  contact: Jane   │        │ johndoe@…                   │
//! │ johndoe@…,  contact: Jim    │   →    │ Guardians: [Jane, Jim]      │
//! │ jimmyroe@…, contact: Janet  │        ├─────────────────────────────┤
//! └─────────────────────────────┘        │ jimmyroe@…                  │
//!                                        │ Guardians: [Janet]          │
//!                                        └─────────────────────────────┘
//! ```
//!
//! Grouping is exact string equality on the contact email, no
//! normalization. Student-level fields are first-seen-wins: later rows
//! for the same email only contribute guardian data.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{MergeError, MergeResult};
use crate::models::{Guardian, MergedStudent, RosterRow, STUDENT_COLUMNS};

const INPUT_DATE_FORMAT: &str = "%m/%d/%Y";
const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Options for the merge algorithm.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Reformat birthdates from `MM/DD/YYYY` to `YYYY-MM-DD`.
    pub normalize_birthdate: bool,

    /// Skip rows whose birthdate does not parse instead of aborting the
    /// whole run. Only consulted when `normalize_birthdate` is on.
    pub skip_bad_birthdates: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            normalize_birthdate: true,
            skip_bad_birthdates: false,
        }
    }
}

/// Result of a merge: one record per student plus the derived schema width.
#[derive(Debug, Clone)]
pub struct MergedRoster {
    /// Merged records, in first-seen order of each contact email.
    pub students: Vec<MergedStudent>,
    /// Global maximum guardian count. Every output row is padded to this
    /// many guardian column groups.
    pub guardian_slots: usize,
}

impl MergedRoster {
    /// The output header row: fixed student columns, then four columns
    /// per guardian slot.
    pub fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = STUDENT_COLUMNS.iter().map(|s| s.to_string()).collect();
        for i in 1..=self.guardian_slots {
            headers.push(format!("Guardian {i} First Name"));
            headers.push(format!("Guardian {i} Last Name"));
            headers.push(format!("Guardian {i} Email"));
            headers.push(format!("Guardian {i} Phone Number (Optional)"));
        }
        headers
    }
}

/// Merge roster rows into one record per distinct contact email.
///
/// Rows are scanned in input order. The first row for an email creates
/// the student record with that row's contact as Guardian 1; later rows
/// append their contact unless it is already recorded (see
/// [`MergedStudent::has_contact`]). Guardian numbering counts accepted
/// contacts only, so skipped duplicates never leave gaps.
///
/// Fails with [`MergeError::EmptyInput`] when no student record was
/// produced, since no output schema can be derived.
pub fn merge(rows: &[RosterRow], options: &MergeOptions) -> MergeResult<MergedRoster> {
    let mut students: Vec<MergedStudent> = Vec::new();
    let mut index_by_email: HashMap<String, usize> = HashMap::new();

    for (i, row) in rows.iter().enumerate() {
        match index_by_email.get(&row.contact_email) {
            Some(&index) => {
                let student = &mut students[index];
                let contact = Guardian::from_row(row);
                if student.has_contact(&contact) {
                    continue;
                }
                student.guardians.push(contact);
            }
            None => {
                let birthday = if options.normalize_birthdate {
                    match NaiveDate::parse_from_str(&row.student_birthdate, INPUT_DATE_FORMAT) {
                        Ok(date) => date.format(OUTPUT_DATE_FORMAT).to_string(),
                        Err(_) if options.skip_bad_birthdates => continue,
                        Err(_) => {
                            return Err(MergeError::BirthdateFormat {
                                value: row.student_birthdate.clone(),
                                row: i + 1,
                            })
                        }
                    }
                } else {
                    row.student_birthdate.clone()
                };

                index_by_email.insert(row.contact_email.clone(), students.len());
                students.push(MergedStudent {
                    first_name: row.student_first_name.clone(),
                    last_name: row.student_last_name.clone(),
                    email: row.contact_email.clone(),
                    grade: row.student_grade.clone(),
                    birthday,
                    guardians: vec![Guardian::from_row(row)],
                });
            }
        }
    }

    if students.is_empty() {
        return Err(MergeError::EmptyInput);
    }

    let guardian_slots = students.iter().map(|s| s.guardians.len()).max().unwrap_or(0);

    Ok(MergedRoster {
        students,
        guardian_slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        first: &str,
        last: &str,
        birthdate: &str,
        grade: &str,
        email: &str,
        g_first: &str,
        g_last: &str,
        g_email: &str,
        g_phone: &str,
    ) -> RosterRow {
        RosterRow {
            student_first_name: first.into(),
            student_last_name: last.into(),
            student_birthdate: birthdate.into(),
            student_grade: grade.into(),
            contact_email: email.into(),
            guardian_first_name: g_first.into(),
            guardian_last_name: g_last.into(),
            guardian_email: g_email.into(),
            guardian_phone: g_phone.into(),
        }
    }

    fn demo_rows() -> Vec<RosterRow> {
        vec![
            row("John", "Doe", "01/01/2000", "10", "johndoe@test.com",
                "Jane", "Doe", "janedoe@parent.com", "123-456-7890"),
            row("John", "Doe", "01/01/2000", "9", "johndoe@test.com",
                "Jim", "Doe", "jimdoe@parent.com", "123-456-7891"),
            row("Jimmy", "Roe", "01/01/2000", "11", "jimmyroe@test.com",
                "Janet", "Roe", "janetroe@parent.com", "123-456-7898"),
        ]
    }

    #[test]
    fn test_two_guardians_combined() {
        let roster = merge(&demo_rows(), &MergeOptions::default()).unwrap();

        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.guardian_slots, 2);

        let john = &roster.students[0];
        assert_eq!(john.email, "johndoe@test.com");
        assert_eq!(john.birthday, "2000-01-01");
        assert_eq!(john.guardians.len(), 2);
        assert_eq!(john.guardians[0].first_name, "Jane");
        assert_eq!(john.guardians[1].first_name, "Jim");
        assert_eq!(john.guardians[1].phone, "123-456-7891");

        let jimmy = &roster.students[1];
        assert_eq!(jimmy.email, "jimmyroe@test.com");
        assert_eq!(jimmy.guardians.len(), 1);
        assert_eq!(jimmy.guardians[0].first_name, "Janet");
    }

    #[test]
    fn test_first_seen_grade_wins() {
        let roster = merge(&demo_rows(), &MergeOptions::default()).unwrap();
        // The second John Doe row carries grade 9 and must not overwrite it.
        assert_eq!(roster.students[0].grade, "10");
    }

    #[test]
    fn test_student_emails_unique() {
        let roster = merge(&demo_rows(), &MergeOptions::default()).unwrap();
        let mut emails: Vec<&str> = roster.students.iter().map(|s| s.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), roster.students.len());
    }

    #[test]
    fn test_duplicate_contact_suppressed() {
        let mut rows = demo_rows();
        let repeat = rows[0].clone();
        rows.insert(1, repeat);
        let roster = merge(&rows, &MergeOptions::default()).unwrap();

        assert_eq!(roster.students[0].guardians.len(), 2);
        assert_eq!(roster.guardian_slots, 2);
    }

    #[test]
    fn test_numbering_counts_accepted_contacts_only() {
        let rows = vec![
            demo_rows()[0].clone(),
            demo_rows()[0].clone(), // duplicate, skipped
            demo_rows()[1].clone(), // distinct, becomes Guardian 2
        ];
        let roster = merge(&rows, &MergeOptions::default()).unwrap();

        let john = &roster.students[0];
        assert_eq!(john.guardians.len(), 2);
        assert_eq!(john.guardians[1].first_name, "Jim");
    }

    #[test]
    fn test_contact_matching_student_fields_suppressed() {
        // The membership test spans the whole record, so a contact whose
        // name and email equal already-stored student values is dropped
        // even though it was never stored as a guardian.
        let rows = vec![
            demo_rows()[0].clone(),
            row("John", "Doe", "01/01/2000", "10", "johndoe@test.com",
                "John", "Doe", "johndoe@test.com", "555-000-0000"),
        ];
        let roster = merge(&rows, &MergeOptions::default()).unwrap();
        assert_eq!(roster.students[0].guardians.len(), 1);
    }

    #[test]
    fn test_email_grouping_is_exact() {
        let rows = vec![
            demo_rows()[0].clone(),
            row("John", "Doe", "01/01/2000", "10", "JohnDoe@test.com",
                "Jim", "Doe", "jimdoe@parent.com", "123-456-7891"),
        ];
        let roster = merge(&rows, &MergeOptions::default()).unwrap();
        // Case differs, so these are two distinct students.
        assert_eq!(roster.students.len(), 2);
    }

    #[test]
    fn test_single_guardian_roundtrip() {
        let rows = vec![demo_rows()[0].clone(), demo_rows()[2].clone()];
        let roster = merge(&rows, &MergeOptions::default()).unwrap();

        assert_eq!(roster.guardian_slots, 1);
        for student in &roster.students {
            assert_eq!(student.guardians.len(), 1);
        }
    }

    #[test]
    fn test_headers_sequence() {
        let roster = merge(&demo_rows(), &MergeOptions::default()).unwrap();
        let headers = roster.headers();

        assert_eq!(headers.len(), 5 + 4 * 2);
        assert_eq!(headers[0], "Student First Name");
        assert_eq!(headers[4], "Student Birthday");
        assert_eq!(headers[5], "Guardian 1 First Name");
        assert_eq!(headers[8], "Guardian 1 Phone Number (Optional)");
        assert_eq!(headers[9], "Guardian 2 First Name");
        assert_eq!(headers[12], "Guardian 2 Phone Number (Optional)");
    }

    #[test]
    fn test_empty_input_fails() {
        let err = merge(&[], &MergeOptions::default()).unwrap_err();
        assert!(matches!(err, MergeError::EmptyInput));
    }

    #[test]
    fn test_malformed_birthdate_aborts() {
        let mut rows = demo_rows();
        rows[2].student_birthdate = "2000-01-01".into();
        let err = merge(&rows, &MergeOptions::default()).unwrap_err();

        match err {
            MergeError::BirthdateFormat { value, row } => {
                assert_eq!(value, "2000-01-01");
                assert_eq!(row, 3);
            }
            other => panic!("expected birthdate error, got {other:?}"),
        }
    }

    #[test]
    fn test_raw_birthdates_passed_through() {
        let mut rows = demo_rows();
        rows[0].student_birthdate = "not a date".into();
        let options = MergeOptions {
            normalize_birthdate: false,
            ..MergeOptions::default()
        };
        let roster = merge(&rows, &options).unwrap();

        assert_eq!(roster.students[0].birthday, "not a date");
        assert_eq!(roster.students[1].birthday, "01/01/2000");
    }

    #[test]
    fn test_skip_bad_birthdates_keeps_rest() {
        let mut rows = demo_rows();
        rows[0].student_birthdate = "bogus".into();
        let options = MergeOptions {
            skip_bad_birthdates: true,
            ..MergeOptions::default()
        };
        let roster = merge(&rows, &options).unwrap();

        // John's first row is skipped; his second row re-creates him with
        // Jim as Guardian 1.
        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.students[0].guardians[0].first_name, "Jim");
        assert_eq!(roster.students[1].email, "jimmyroe@test.com");
    }

    #[test]
    fn test_all_rows_skipped_is_empty_input() {
        let mut rows = demo_rows();
        for r in &mut rows {
            r.student_birthdate = "bogus".into();
        }
        let options = MergeOptions {
            skip_bad_birthdates: true,
            ..MergeOptions::default()
        };
        let err = merge(&rows, &options).unwrap_err();
        assert!(matches!(err, MergeError::EmptyInput));
    }
}
