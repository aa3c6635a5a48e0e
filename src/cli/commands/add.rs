//! Add command handler
//!
//! Records or replaces one semester's course list. Collects course entries
//! interactively, shows the derived grade per entry, and gates persistence on
//! the workload bounds.

use gpa_tracker::config::Config;
use gpa_tracker::core::engine::{
    validate_workload, MAX_SEMESTER_CREDITS, MIN_SEMESTER_CREDITS,
};
use gpa_tracker::core::models::Course;
use gpa_tracker::{error, info};

use super::{ensure_student_identity, prompt, record_store, resolve_slot};

/// Run the add command.
///
/// # Arguments
/// * `level` - Optional level selection; prompted for when absent
/// * `semester` - Optional semester selection; prompted for when absent
/// * `config` - Configuration naming the student record file
pub fn run(level: Option<String>, semester: Option<String>, config: &Config) {
    let store = record_store(config);
    let mut record = store.load();
    ensure_student_identity(&mut record, &store);

    let Some((level, semester)) = resolve_slot(&record, level, semester) else {
        return;
    };

    let courses = collect_courses();
    let total_credits: u32 = courses.iter().map(|course| course.credit).sum();

    if !validate_workload(total_credits) {
        eprintln!(
            "✗ Semester workload must be between {MIN_SEMESTER_CREDITS}-{MAX_SEMESTER_CREDITS} credits (entered: {total_credits})"
        );
        return;
    }

    if let Err(e) = record.replace_semester(&level, &semester, courses) {
        eprintln!("✗ {e}");
        return;
    }

    match store.save(&record) {
        Ok(()) => {
            info!("Semester data saved for level {level}, {semester}");
            println!("✓ Semester data saved successfully.");
        }
        Err(e) => {
            error!("Failed to save student record: {e}");
            eprintln!("✗ Failed to save student record: {e}");
        }
    }
}

/// Collect course entries until a blank name is entered.
///
/// Invalid numeric input discards the offending entry and the loop continues;
/// each accepted course is echoed with its derived grade and grade point.
fn collect_courses() -> Vec<Course> {
    let mut courses = Vec::new();
    println!("\nEnter course details (leave course name blank to finish):");

    loop {
        let name = prompt("Course name: ");
        if name.is_empty() {
            break;
        }

        let Ok(credit) = prompt("Credit hours: ").parse::<u32>() else {
            eprintln!("✗ Invalid input. Please enter numbers for credit and score.");
            continue;
        };
        let Ok(score) = prompt("Score (%): ").parse::<f64>() else {
            eprintln!("✗ Invalid input. Please enter numbers for credit and score.");
            continue;
        };

        let course = Course::new(name, credit, score);
        println!("Grade: {}, Grade Point: {:.2}", course.grade, course.grade_point);
        courses.push(course);
    }

    courses
}
