//! Cgpa command handler
//!
//! Displays the cumulative GPA, the resulting degree classification, and the
//! additional weighted grade points needed to finish at two illustrative
//! target classifications.

use gpa_tracker::config::Config;
use gpa_tracker::core::engine::{classify, cumulative_gpa, required_wgp};
use gpa_tracker::core::scales::classification_minimum;

use super::record_store;

/// Fixed degree total: 16 credits per semester across 8 semesters.
const DEGREE_TOTAL_CREDITS: u32 = 128;

/// Target classifications projected on every CGPA view.
const PROJECTION_TARGETS: [&str; 2] = ["1st Class", "2nd Class Upper"];

/// Run the cgpa command.
///
/// # Arguments
/// * `config` - Configuration naming the student record file
pub fn run(config: &Config) {
    let store = record_store(config);
    let record = store.load();

    let result = cumulative_gpa(&record.academic_history);
    let classification = classify(result.cgpa);

    println!("\nCumulative GPA (CGPA): {:.2}", result.cgpa);
    println!("Degree Classification: {classification}");

    let remaining_credits = DEGREE_TOTAL_CREDITS.saturating_sub(result.total_credits);
    if remaining_credits == 0 {
        return;
    }

    for target in PROJECTION_TARGETS {
        let Some(minimum) = classification_minimum(target) else {
            continue;
        };
        let needed = required_wgp(result.total_wgp, result.total_credits, target, remaining_credits);

        println!("\nTo achieve a {target} degree (CGPA >= {minimum}), you need:");
        println!("- Additional WGP of {needed:.2} across remaining {remaining_credits} credits");
    }
}
