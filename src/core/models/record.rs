//! Student record model

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Level → semester label → courses.
///
/// `BTreeMap` keeps serialization deterministic; computation over the history
/// is order-independent.
pub type AcademicHistory = BTreeMap<String, BTreeMap<String, Vec<Course>>>;

/// The four standard year-group levels.
pub const LEVELS: [&str; 4] = ["100", "200", "300", "400"];

/// The two semester labels under each level.
pub const SEMESTERS: [&str; 2] = ["Semester I", "Semester II"];

/// A single student's identity and full academic history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Opaque student identifier
    pub student_id: String,

    /// Student name
    pub name: String,

    /// Recorded courses, keyed by level then semester label
    pub academic_history: AcademicHistory,
}

impl StudentRecord {
    /// Create a record with every standard (level, semester) slot present and
    /// empty.
    ///
    /// # Arguments
    /// * `student_id` - Opaque student identifier
    /// * `name` - Student name
    #[must_use]
    pub fn new(student_id: String, name: String) -> Self {
        let mut academic_history = AcademicHistory::new();
        for level in LEVELS {
            let semesters = SEMESTERS
                .iter()
                .map(|semester| ((*semester).to_string(), Vec::new()))
                .collect();
            academic_history.insert(level.to_string(), semesters);
        }

        Self {
            student_id,
            name,
            academic_history,
        }
    }

    /// Whether a (level, semester) slot exists in the history.
    #[must_use]
    pub fn has_slot(&self, level: &str, semester: &str) -> bool {
        self.academic_history
            .get(level)
            .is_some_and(|semesters| semesters.contains_key(semester))
    }

    /// Get the courses recorded under a (level, semester) slot.
    ///
    /// # Returns
    /// The slot's course list, or `None` when the slot does not exist.
    #[must_use]
    pub fn courses(&self, level: &str, semester: &str) -> Option<&[Course]> {
        self.academic_history
            .get(level)
            .and_then(|semesters| semesters.get(semester))
            .map(Vec::as_slice)
    }

    /// Replace a semester's course list wholesale.
    ///
    /// # Errors
    /// Returns an error naming the offending selection when the (level,
    /// semester) slot does not exist; the record is left unchanged.
    pub fn replace_semester(
        &mut self,
        level: &str,
        semester: &str,
        courses: Vec<Course>,
    ) -> Result<(), String> {
        let slot = self
            .academic_history
            .get_mut(level)
            .and_then(|semesters| semesters.get_mut(semester))
            .ok_or_else(|| format!("Unknown level '{level}' or semester '{semester}'"))?;

        *slot = courses;
        Ok(())
    }

    /// Total credit hours recorded across all semesters.
    #[must_use]
    pub fn completed_credits(&self) -> u32 {
        self.academic_history
            .values()
            .flat_map(BTreeMap::values)
            .flatten()
            .map(|course| course.credit)
            .sum()
    }
}

impl Default for StudentRecord {
    /// An unnamed record with all standard slots empty, as handed out on
    /// first run before the student identifies themselves.
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_shape() {
        let record = StudentRecord::default();

        assert!(record.student_id.is_empty());
        assert_eq!(record.academic_history.len(), 4);
        for level in LEVELS {
            let semesters = record.academic_history.get(level).expect("level present");
            assert_eq!(semesters.len(), 2);
            for semester in SEMESTERS {
                assert!(semesters.get(semester).expect("slot present").is_empty());
            }
        }
    }

    #[test]
    fn test_has_slot() {
        let record = StudentRecord::default();

        assert!(record.has_slot("100", "Semester I"));
        assert!(record.has_slot("400", "Semester II"));
        assert!(!record.has_slot("500", "Semester I"));
        assert!(!record.has_slot("100", "Semester III"));
    }

    #[test]
    fn test_replace_semester() {
        let mut record = StudentRecord::new("S123".to_string(), "Ada".to_string());

        let courses = vec![Course::new("Algorithms".to_string(), 3, 85.0)];
        record
            .replace_semester("200", "Semester I", courses)
            .expect("valid slot");

        let stored = record.courses("200", "Semester I").expect("slot present");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Algorithms");
    }

    #[test]
    fn test_replace_semester_overwrites_wholesale() {
        let mut record = StudentRecord::default();

        record
            .replace_semester(
                "100",
                "Semester II",
                vec![
                    Course::new("One".to_string(), 3, 70.0),
                    Course::new("Two".to_string(), 3, 80.0),
                ],
            )
            .expect("valid slot");
        record
            .replace_semester(
                "100",
                "Semester II",
                vec![Course::new("Three".to_string(), 4, 66.0)],
            )
            .expect("valid slot");

        let stored = record.courses("100", "Semester II").expect("slot present");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Three");
    }

    #[test]
    fn test_replace_semester_unknown_slot() {
        let mut record = StudentRecord::default();

        let result = record.replace_semester("700", "Semester I", Vec::new());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("700"));

        // No partial mutation
        assert_eq!(record, StudentRecord::default());
    }

    #[test]
    fn test_completed_credits() {
        let mut record = StudentRecord::default();
        assert_eq!(record.completed_credits(), 0);

        record
            .replace_semester(
                "100",
                "Semester I",
                vec![
                    Course::new("One".to_string(), 3, 70.0),
                    Course::new("Two".to_string(), 4, 80.0),
                ],
            )
            .expect("valid slot");
        record
            .replace_semester(
                "300",
                "Semester II",
                vec![Course::new("Three".to_string(), 2, 55.0)],
            )
            .expect("valid slot");

        assert_eq!(record.completed_credits(), 9);
    }
}
