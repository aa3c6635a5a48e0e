//! Grading engine
//!
//! Pure computations over course records: grade lookup, semester GPA,
//! cumulative GPA, degree classification, and required-WGP projection.
//! Every operation is a deterministic function of its inputs with no I/O
//! and no shared state.

use crate::core::models::{AcademicHistory, Course};
use crate::core::scales::{
    classification_minimum, CLASSIFICATION_SCALE, FALLBACK_GRADE, GRADE_SCALE,
};

/// Sentinel returned by [`classify`] when a CGPA falls outside every band.
pub const UNKNOWN_CLASSIFICATION: &str = "Unknown";

/// Minimum credits a semester may carry and still be persisted.
pub const MIN_SEMESTER_CREDITS: u32 = 1;

/// Maximum credits a semester may carry and still be persisted.
pub const MAX_SEMESTER_CREDITS: u32 = 24;

/// Aggregated result of a semester GPA computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SemesterGpa {
    /// GPA rounded to 2 decimals, 0.0 when no credits were taken
    pub gpa: f64,
    /// Total weighted grade points (credit × point summed over courses)
    pub total_wgp: f64,
    /// Total credit hours across the semester
    pub total_credits: u32,
}

/// Aggregated result of a cumulative GPA computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CumulativeGpa {
    /// CGPA rounded to 2 decimals, 0.0 when no credits were taken
    pub cgpa: f64,
    /// Total weighted grade points across all recorded semesters
    pub total_wgp: f64,
    /// Total credit hours across all recorded semesters
    pub total_credits: u32,
}

/// Round a value to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Map a score to its letter grade and grade point.
///
/// Scans the numeric bands of the grade scale in order and returns the first
/// band whose inclusive range contains `score`. Scores outside every band
/// (e.g., negative input) fall back to the lowest grade with point 0.0 rather
/// than erroring; callers get a silent default, not a correctness guarantee
/// for invalid input.
#[must_use]
pub fn grade_for(score: f64) -> (&'static str, f64) {
    for band in GRADE_SCALE {
        if band.contains(score) {
            if let Some(point) = band.point {
                return (band.code, point);
            }
        }
    }
    (FALLBACK_GRADE, 0.0)
}

/// Compute the GPA and total WGP for one semester's courses.
///
/// Grade points are recomputed from each course's score; the cached
/// `grade_point` field is a display convenience and never a computation
/// input. Returns an all-zero result when total credits are 0 instead of
/// dividing by zero. The sum is commutative, so the result is independent of
/// course order.
#[must_use]
pub fn semester_gpa(courses: &[Course]) -> SemesterGpa {
    let mut total_credits = 0u32;
    let mut total_wgp = 0.0f64;

    for course in courses {
        let (_, point) = grade_for(course.score);
        total_wgp += f64::from(course.credit) * point;
        total_credits += course.credit;
    }

    if total_credits == 0 {
        return SemesterGpa::default();
    }

    SemesterGpa {
        gpa: round2(total_wgp / f64::from(total_credits)),
        total_wgp,
        total_credits,
    }
}

/// Compute the cumulative GPA across every recorded level and semester.
///
/// Traverses all slots present in the history, including empty ones (which
/// contribute 0 credits and 0 WGP). Returns an all-zero result when no
/// credits have been taken.
#[must_use]
pub fn cumulative_gpa(history: &AcademicHistory) -> CumulativeGpa {
    let mut total_wgp = 0.0f64;
    let mut total_credits = 0u32;

    for semesters in history.values() {
        for courses in semesters.values() {
            let semester = semester_gpa(courses);
            total_wgp += semester.total_wgp;
            total_credits += semester.total_credits;
        }
    }

    if total_credits == 0 {
        return CumulativeGpa::default();
    }

    CumulativeGpa {
        cgpa: round2(total_wgp / f64::from(total_credits)),
        total_wgp,
        total_credits,
    }
}

/// Determine the degree classification for a CGPA.
///
/// First-match-wins scan with inclusive bounds; values outside every band
/// yield [`UNKNOWN_CLASSIFICATION`] rather than failing.
#[must_use]
pub fn classify(cgpa: f64) -> &'static str {
    CLASSIFICATION_SCALE
        .iter()
        .find(|band| band.contains(cgpa))
        .map_or(UNKNOWN_CLASSIFICATION, |band| band.label)
}

/// Compute the additional WGP needed to finish at a target classification.
///
/// Solves `(current_wgp + x) / (completed_credits + remaining_credits) =
/// target_min` for `x`, where `target_min` is the minimum CGPA bound of
/// `target_class`. An unknown target class, or one whose minimum bound is 0,
/// requires nothing and returns 0.0. The result is clamped at 0 and rounded
/// to 2 decimals, so it is never negative.
#[must_use]
pub fn required_wgp(
    current_wgp: f64,
    completed_credits: u32,
    target_class: &str,
    remaining_credits: u32,
) -> f64 {
    let Some(target_min) = classification_minimum(target_class) else {
        return 0.0;
    };
    if target_min <= 0.0 {
        return 0.0;
    }

    let final_credits = f64::from(completed_credits + remaining_credits);
    let required_total = target_min * final_credits;
    round2((required_total - current_wgp).max(0.0))
}

/// Validate a semester workload in credit hours.
///
/// True iff the total lies in `[MIN_SEMESTER_CREDITS, MAX_SEMESTER_CREDITS]`.
/// Pure predicate; callers use it to gate persistence of a semester's course
/// list.
#[must_use]
pub const fn validate_workload(total_credits: u32) -> bool {
    MIN_SEMESTER_CREDITS <= total_credits && total_credits <= MAX_SEMESTER_CREDITS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::StudentRecord;

    fn course(credit: u32, score: f64) -> Course {
        Course::new(format!("Course {score}"), credit, score)
    }

    #[test]
    fn grade_for_low_range_is_f() {
        for score in 0..=44 {
            assert_eq!(grade_for(f64::from(score)), ("F", 0.0));
        }
    }

    #[test]
    fn grade_for_band_boundaries() {
        assert_eq!(grade_for(44.0), ("F", 0.0));
        assert_eq!(grade_for(45.0), ("E", 1.00));
        assert_eq!(grade_for(79.0), ("A-", 3.85));
        assert_eq!(grade_for(80.0), ("A", 4.00));
        assert_eq!(grade_for(100.0), ("A", 4.00));
    }

    #[test]
    fn grade_for_out_of_range_falls_back() {
        assert_eq!(grade_for(-5.0), ("F", 0.0));
        assert_eq!(grade_for(101.0), ("F", 0.0));
    }

    #[test]
    fn semester_gpa_empty() {
        let result = semester_gpa(&[]);
        assert_eq!(result.gpa, 0.0);
        assert_eq!(result.total_wgp, 0.0);
        assert_eq!(result.total_credits, 0);
    }

    #[test]
    fn semester_gpa_two_courses() {
        // 3 × 4.00 + 4 × 2.50 = 22.0 over 7 credits
        let result = semester_gpa(&[course(3, 85.0), course(4, 60.0)]);
        assert!((result.total_wgp - 22.0).abs() < f64::EPSILON);
        assert_eq!(result.total_credits, 7);
        assert!((result.gpa - 3.14).abs() < f64::EPSILON);
    }

    #[test]
    fn semester_gpa_order_independent() {
        let forward = semester_gpa(&[course(3, 85.0), course(4, 60.0), course(2, 48.0)]);
        let reverse = semester_gpa(&[course(2, 48.0), course(4, 60.0), course(3, 85.0)]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn semester_gpa_ignores_stale_cached_points() {
        let mut stale = course(3, 85.0);
        stale.grade_point = 0.0; // corrupt the cache; the score is the source of truth
        let result = semester_gpa(&[stale]);
        assert!((result.total_wgp - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cumulative_gpa_empty_record() {
        let record = StudentRecord::default();
        let result = cumulative_gpa(&record.academic_history);
        assert_eq!(result.cgpa, 0.0);
        assert_eq!(result.total_credits, 0);
    }

    #[test]
    fn cumulative_gpa_spans_levels() {
        let mut record = StudentRecord::default();
        record
            .replace_semester("100", "Semester I", vec![course(3, 85.0), course(4, 60.0)])
            .expect("valid slot");
        record
            .replace_semester("200", "Semester II", vec![course(3, 72.0)])
            .expect("valid slot");

        let result = cumulative_gpa(&record.academic_history);
        // 22.0 + 10.5 = 32.5 over 10 credits
        assert_eq!(result.total_credits, 10);
        assert!((result.total_wgp - 32.5).abs() < f64::EPSILON);
        assert!((result.cgpa - 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn cumulative_gpa_invariant_under_slot_reordering() {
        let mut first = StudentRecord::default();
        first
            .replace_semester("100", "Semester I", vec![course(3, 85.0)])
            .expect("valid slot");
        first
            .replace_semester("300", "Semester II", vec![course(4, 60.0)])
            .expect("valid slot");

        let mut second = StudentRecord::default();
        second
            .replace_semester("300", "Semester II", vec![course(4, 60.0)])
            .expect("valid slot");
        second
            .replace_semester("100", "Semester I", vec![course(3, 85.0)])
            .expect("valid slot");

        assert_eq!(
            cumulative_gpa(&first.academic_history),
            cumulative_gpa(&second.academic_history)
        );
    }

    #[test]
    fn classify_bands() {
        assert_eq!(classify(3.6), "1st Class");
        assert_eq!(classify(3.59), "2nd Class Upper");
        assert_eq!(classify(4.0), "1st Class");
        assert_eq!(classify(0.0), "Fail");
    }

    #[test]
    fn classify_out_of_range() {
        assert_eq!(classify(4.5), UNKNOWN_CLASSIFICATION);
        assert_eq!(classify(-0.1), UNKNOWN_CLASSIFICATION);
    }

    #[test]
    fn required_wgp_unknown_class_is_noop() {
        assert_eq!(required_wgp(50.0, 16, "UnknownLabel", 10), 0.0);
        assert_eq!(required_wgp(0.0, 0, "UnknownLabel", 10), 0.0);
    }

    #[test]
    fn required_wgp_fail_target_is_noop() {
        assert_eq!(required_wgp(10.0, 8, "Fail", 100), 0.0);
    }

    #[test]
    fn required_wgp_projects_to_target_minimum() {
        // 32 completed credits at WGP 96 (CGPA 3.0); 96 remaining credits.
        // 1st Class needs 3.6 × 128 = 460.8 total, so 364.8 more.
        let needed = required_wgp(96.0, 32, "1st Class", 96);
        assert!((needed - 364.8).abs() < 1e-9);
    }

    #[test]
    fn required_wgp_clamps_at_zero() {
        // Already above the target: 3.8 average over 32 credits, aiming for 2nd Upper
        // with nothing remaining.
        let needed = required_wgp(121.6, 32, "2nd Class Upper", 0);
        assert_eq!(needed, 0.0);
    }

    #[test]
    fn required_wgp_never_negative_sweep() {
        for wgp in [0.0, 10.0, 96.0, 512.0] {
            for remaining in [0u32, 1, 16, 96] {
                for label in ["1st Class", "2nd Class Upper", "Pass", "Fail", "Nope"] {
                    assert!(required_wgp(wgp, 32, label, remaining) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn workload_bounds() {
        assert!(!validate_workload(0));
        assert!(validate_workload(1));
        assert!(validate_workload(24));
        assert!(!validate_workload(25));
    }

    #[test]
    fn round2_behavior() {
        assert!((round2(3.142_857) - 3.14).abs() < f64::EPSILON);
        assert!((round2(3.146) - 3.15).abs() < f64::EPSILON);
        assert!((round2(2.0) - 2.0).abs() < f64::EPSILON);
    }
}
