//! Semester command handler
//!
//! Displays the total credits, weighted grade points, and GPA for one
//! recorded semester.

use gpa_tracker::config::Config;
use gpa_tracker::core::engine::semester_gpa;

use super::{record_store, resolve_slot};

/// Run the semester command.
///
/// # Arguments
/// * `level` - Optional level selection; prompted for when absent
/// * `semester` - Optional semester selection; prompted for when absent
/// * `config` - Configuration naming the student record file
pub fn run(level: Option<String>, semester: Option<String>, config: &Config) {
    let store = record_store(config);
    let record = store.load();

    let Some((level, semester)) = resolve_slot(&record, level, semester) else {
        return;
    };

    // Slot existence was just checked; an empty slot still reports zeros.
    let courses = record.courses(&level, &semester).unwrap_or_default();
    let result = semester_gpa(courses);

    println!("\nSemester: {semester}, Level {level}");
    println!("Total Credits: {}", result.total_credits);
    println!("Weighted Grade Points (WGP): {:.2}", result.total_wgp);
    println!("GPA: {:.2}", result.gpa);
}
