//! Data models for `GpaTracker`

pub mod course;
pub mod record;

pub use course::Course;
pub use record::{AcademicHistory, StudentRecord, LEVELS, SEMESTERS};
