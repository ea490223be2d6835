//! Render a merged roster to CSV bytes.
//!
//! Rendering is fully in-memory. The caller writes the returned bytes in
//! one shot, so a failure anywhere earlier in the pipeline leaves no
//! partial output file.

use crate::error::WriteResult;
use crate::merge::merger::MergedRoster;
use crate::models::MergedStudent;

/// Render the roster as CSV: the derived header row, then one row per
/// student with guardian cells padded to the global slot count.
pub fn render_csv(roster: &MergedRoster) -> WriteResult<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(roster.headers())?;
        for student in &roster.students {
            writer.write_record(student_cells(student, roster.guardian_slots))?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// One output row, aligned with [`MergedRoster::headers`].
fn student_cells(student: &MergedStudent, guardian_slots: usize) -> Vec<String> {
    let mut cells = vec![
        student.first_name.clone(),
        student.last_name.clone(),
        student.email.clone(),
        student.grade.clone(),
        student.birthday.clone(),
    ];
    for i in 0..guardian_slots {
        match student.guardians.get(i) {
            Some(g) => {
                cells.push(g.first_name.clone());
                cells.push(g.last_name.clone());
                cells.push(g.email.clone());
                cells.push(g.phone.clone());
            }
            None => cells.extend(std::iter::repeat(String::new()).take(4)),
        }
    }
    cells
}
