//! Domain models for the roster merge pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`RosterRow`] - one input row, a single (student, guardian) pairing
//! - [`Guardian`] - a guardian/contact entry
//! - [`MergedStudent`] - one output record with all guardians combined

use serde::{Deserialize, Serialize};

// =============================================================================
// Column names
// =============================================================================

/// Input column headers, exactly as the SIS export writes them.
pub const INPUT_COLUMNS: [&str; 9] = [
    "student.firstName",
    "student.lastName",
    "student.birthdate",
    "student.grade",
    "pcontact.email",
    "contacts.firstName",
    "contacts.lastName",
    "contacts.email",
    "contacts.householdPhone",
];

/// Fixed student columns leading every output header row.
pub const STUDENT_COLUMNS: [&str; 5] = [
    "Student First Name",
    "Student Last Name",
    "Student Email",
    "Student Grade",
    "Student Birthday",
];

// =============================================================================
// Input Row
// =============================================================================

/// One row of the input roster export.
///
/// A student with N guardians appears as N rows sharing the same
/// `pcontact.email` value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRow {
    #[serde(rename = "student.firstName", default)]
    pub student_first_name: String,

    #[serde(rename = "student.lastName", default)]
    pub student_last_name: String,

    /// Birthdate text, `MM/DD/YYYY` in well-formed exports.
    #[serde(rename = "student.birthdate", default)]
    pub student_birthdate: String,

    #[serde(rename = "student.grade", default)]
    pub student_grade: String,

    /// The grouping key. Compared by exact string equality.
    #[serde(rename = "pcontact.email", default)]
    pub contact_email: String,

    #[serde(rename = "contacts.firstName", default)]
    pub guardian_first_name: String,

    #[serde(rename = "contacts.lastName", default)]
    pub guardian_last_name: String,

    #[serde(rename = "contacts.email", default)]
    pub guardian_email: String,

    #[serde(rename = "contacts.householdPhone", default)]
    pub guardian_phone: String,
}

// =============================================================================
// Guardian
// =============================================================================

/// A guardian/contact entry attached to a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guardian {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Guardian {
    /// Extract the guardian fields from an input row.
    pub fn from_row(row: &RosterRow) -> Self {
        Self {
            first_name: row.guardian_first_name.clone(),
            last_name: row.guardian_last_name.clone(),
            email: row.guardian_email.clone(),
            phone: row.guardian_phone.clone(),
        }
    }
}

// =============================================================================
// Merged Student
// =============================================================================

/// One output record: a student with all accepted guardians, in the
/// order they were accepted from the input.
#[derive(Debug, Clone)]
pub struct MergedStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade: String,
    /// Birthday as it will appear in the output (normalized or raw).
    pub birthday: String,
    pub guardians: Vec<Guardian>,
}

impl MergedStudent {
    /// Every value currently stored on the record, student fields included.
    fn values(&self) -> impl Iterator<Item = &str> {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.grade.as_str(),
            self.birthday.as_str(),
        ]
        .into_iter()
        .chain(self.guardians.iter().flat_map(|g| {
            [
                g.first_name.as_str(),
                g.last_name.as_str(),
                g.email.as_str(),
                g.phone.as_str(),
            ]
        }))
    }

    /// Whether `needle` appears among the record's stored values.
    pub fn contains_value(&self, needle: &str) -> bool {
        self.values().any(|v| v == needle)
    }

    /// A contact counts as already recorded when its first name, last name
    /// and email each appear anywhere among the stored values, not only in
    /// guardian slots. Phone is not part of the test.
    pub fn has_contact(&self, contact: &Guardian) -> bool {
        self.contains_value(&contact.first_name)
            && self.contains_value(&contact.last_name)
            && self.contains_value(&contact.email)
    }
}

// =============================================================================
// Tests
// =============================================================================
