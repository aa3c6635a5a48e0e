//! CLI command handlers and shared console helpers

pub mod add;
pub mod config;
pub mod cumulative;
pub mod menu;
pub mod semester;

use gpa_tracker::config::Config;
use gpa_tracker::core::models::StudentRecord;
use gpa_tracker::core::store::RecordStore;
use std::io::{self, Write};
use std::path::PathBuf;

/// Print a label and read one trimmed line from stdin.
pub(crate) fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

/// Build the record store from the configured data file path.
pub(crate) fn record_store(config: &Config) -> RecordStore {
    RecordStore::new(PathBuf::from(&config.storage.data_file))
}

/// Prompt for and persist the student's identity on first run.
///
/// A record with an empty `student_id` has never been set up; anything else
/// passes through untouched.
pub(crate) fn ensure_student_identity(record: &mut StudentRecord, store: &RecordStore) {
    if !record.student_id.is_empty() {
        return;
    }

    record.student_id = prompt("Enter your student ID: ");
    record.name = prompt("Enter your name: ");

    if let Err(e) = store.save(record) {
        eprintln!("✗ Failed to save student record: {e}");
    }
}

/// List the available (level, semester) slots.
pub(crate) fn print_slots(record: &StudentRecord) {
    println!("\nAvailable levels and semesters:");
    for (level, semesters) in &record.academic_history {
        let labels: Vec<&str> = semesters.keys().map(String::as_str).collect();
        println!("Level {level}: {}", labels.join(", "));
    }
}

/// Resolve a (level, semester) selection against the record.
///
/// Uses the provided arguments when present, otherwise lists the available
/// slots and prompts for both. An unknown selection is reported and yields
/// `None` so the caller aborts without touching the record.
pub(crate) fn resolve_slot(
    record: &StudentRecord,
    level: Option<String>,
    semester: Option<String>,
) -> Option<(String, String)> {
    let level = level.unwrap_or_else(|| {
        print_slots(record);
        prompt("Enter level (100, 200, etc.): ")
    });
    let semester = semester.unwrap_or_else(|| prompt("Enter semester (e.g., 'Semester I'): "));

    if record.has_slot(&level, &semester) {
        Some((level, semester))
    } else {
        eprintln!("✗ Invalid level or semester selected.");
        None
    }
}
