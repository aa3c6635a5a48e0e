//! Menu command handler
//!
//! Interactive loop over the four core operations: add/update a semester,
//! view a semester's GPA, view the CGPA and classification, and exit.

use gpa_tracker::config::Config;

use super::{add, cumulative, ensure_student_identity, prompt, record_store, semester};

/// Run the interactive menu until the user exits.
///
/// # Arguments
/// * `config` - Configuration naming the student record file
pub fn run(config: &Config) {
    let store = record_store(config);
    let mut record = store.load();
    ensure_student_identity(&mut record, &store);

    loop {
        println!("\n----------------------------------");
        println!("\n***       GPA  TRACKER         ***");
        println!("\n----------------------------------");
        println!("1. ADD/UPDATE SEMESTER DATA");
        println!("2. VIEW SEMESTER GPA");
        println!("3. VIEW CGPA AND DEGREE CLASSIFICATION");
        println!("4. EXIT");
        println!("\n----------------------------------");

        // Each handler does its own load-then-save round trip, so the menu
        // never holds a stale record across iterations.
        match prompt("Enter your choice (1-4): ").as_str() {
            "1" => add::run(None, None, config),
            "2" => semester::run(None, None, config),
            "3" => cumulative::run(config),
            "4" => {
                println!("Exiting. Goodbye!");
                break;
            }
            _ => eprintln!("✗ Invalid choice. Please try again."),
        }
    }
}
