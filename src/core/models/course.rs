//! Course model

use crate::core::engine;
use serde::{Deserialize, Serialize};

/// A graded course as it appears on a transcript
///
/// The `grade` and `grade_point` fields are derived from `score` at
/// construction time and cached for display. They are recomputed whenever the
/// score changes; aggregation always re-derives points from the score, so the
/// cache can never skew a GPA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Introduction to Programming")
    pub name: String,

    /// Credit hours
    pub credit: u32,

    /// Raw score in percent, expected in [0, 100]
    pub score: f64,

    /// Letter grade derived from the score (display cache)
    pub grade: String,

    /// Grade point derived from the score (display cache)
    pub grade_point: f64,
}

impl Course {
    /// Create a new course, deriving the grade and grade point from `score`.
    ///
    /// # Arguments
    /// * `name` - Course name
    /// * `credit` - Credit hours
    /// * `score` - Raw score in percent
    #[must_use]
    pub fn new(name: String, credit: u32, score: f64) -> Self {
        let (grade, grade_point) = engine::grade_for(score);
        Self {
            name,
            credit,
            score,
            grade: grade.to_string(),
            grade_point,
        }
    }

    /// Update the score, recomputing the cached grade and grade point.
    pub fn set_score(&mut self, score: f64) {
        self.score = score;
        let (grade, grade_point) = engine::grade_for(score);
        self.grade = grade.to_string();
        self.grade_point = grade_point;
    }

    /// Weighted grade points for this course (credit × point).
    ///
    /// Recomputed from the score, not the cached `grade_point`.
    #[must_use]
    pub fn weighted_grade_points(&self) -> f64 {
        f64::from(self.credit) * engine::grade_for(self.score).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation_derives_grade() {
        let course = Course::new("Calculus I".to_string(), 3, 85.0);

        assert_eq!(course.name, "Calculus I");
        assert_eq!(course.credit, 3);
        assert_eq!(course.grade, "A");
        assert!((course.grade_point - 4.00).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cached_fields_match_lookup() {
        for score in [0.0, 44.0, 45.0, 59.0, 60.0, 74.0, 79.0, 80.0, 100.0] {
            let course = Course::new("Any".to_string(), 3, score);
            let (grade, point) = engine::grade_for(score);
            assert_eq!(course.grade, grade);
            assert!((course.grade_point - point).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_set_score_recomputes_cache() {
        let mut course = Course::new("Physics".to_string(), 4, 82.0);
        assert_eq!(course.grade, "A");

        course.set_score(58.0);
        assert_eq!(course.grade, "C");
        assert!((course.grade_point - 2.00).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_grade_points() {
        let course = Course::new("Chemistry".to_string(), 4, 60.0);
        assert!((course.weighted_grade_points() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_grade_points_from_score_not_cache() {
        let mut course = Course::new("Biology".to_string(), 2, 90.0);
        course.grade_point = 1.0; // stale cache must not affect the result
        assert!((course.weighted_grade_points() - 8.0).abs() < f64::EPSILON);
    }
}
