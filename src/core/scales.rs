//! Grade and classification scales as fixed dispatch tables
//!
//! Both scales are ordered sequences of band records scanned with
//! first-match-wins semantics, so the bands stay data-editable and
//! independently testable.

/// A single band of the grade scale.
///
/// Numeric bands carry an inclusive `[min_score, max_score]` range and a grade
/// point. Bands with absent bounds are administrative codes (exempt,
/// incomplete, etc.) that can appear on a transcript but are never produced by
/// numeric lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Letter code (e.g., "A-")
    pub code: &'static str,
    /// Inclusive lower score bound, absent for administrative codes
    pub min_score: Option<f64>,
    /// Inclusive upper score bound, absent for administrative codes
    pub max_score: Option<f64>,
    /// Grade point awarded, absent for non-gradable codes
    pub point: Option<f64>,
}

impl GradeBand {
    /// Whether this band participates in numeric score lookup.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.min_score.is_some() && self.max_score.is_some() && self.point.is_some()
    }

    /// Whether `score` falls inside this band's inclusive range.
    ///
    /// Always `false` for administrative bands.
    #[must_use]
    pub fn contains(&self, score: f64) -> bool {
        match (self.min_score, self.max_score) {
            (Some(min), Some(max)) => score >= min && score <= max,
            _ => false,
        }
    }
}

/// The grade scale, scanned in order.
///
/// Numeric bands partition [0, 100]; the trailing codes are administrative.
/// `X` is a zero-point administrative code (e.g., an unexcused miss) and the
/// remainder carry no point at all.
pub const GRADE_SCALE: &[GradeBand] = &[
    GradeBand {
        code: "A",
        min_score: Some(80.0),
        max_score: Some(100.0),
        point: Some(4.00),
    },
    GradeBand {
        code: "A-",
        min_score: Some(75.0),
        max_score: Some(79.0),
        point: Some(3.85),
    },
    GradeBand {
        code: "B+",
        min_score: Some(70.0),
        max_score: Some(74.0),
        point: Some(3.50),
    },
    GradeBand {
        code: "B",
        min_score: Some(65.0),
        max_score: Some(69.0),
        point: Some(3.00),
    },
    GradeBand {
        code: "C+",
        min_score: Some(60.0),
        max_score: Some(64.0),
        point: Some(2.50),
    },
    GradeBand {
        code: "C",
        min_score: Some(55.0),
        max_score: Some(59.0),
        point: Some(2.00),
    },
    GradeBand {
        code: "D",
        min_score: Some(50.0),
        max_score: Some(54.0),
        point: Some(1.50),
    },
    GradeBand {
        code: "E",
        min_score: Some(45.0),
        max_score: Some(49.0),
        point: Some(1.00),
    },
    GradeBand {
        code: "F",
        min_score: Some(0.0),
        max_score: Some(44.0),
        point: Some(0.0),
    },
    GradeBand {
        code: "X",
        min_score: None,
        max_score: None,
        point: Some(0.0),
    },
    GradeBand {
        code: "Z",
        min_score: None,
        max_score: None,
        point: None,
    },
    GradeBand {
        code: "I",
        min_score: None,
        max_score: None,
        point: None,
    },
    GradeBand {
        code: "Y",
        min_score: None,
        max_score: None,
        point: None,
    },
    GradeBand {
        code: "S",
        min_score: None,
        max_score: None,
        point: None,
    },
    GradeBand {
        code: "M",
        min_score: None,
        max_score: None,
        point: None,
    },
];

/// Fallback grade code for scores outside every numeric band.
pub const FALLBACK_GRADE: &str = "F";

/// A degree classification band over an inclusive CGPA range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationBand {
    /// Classification label (e.g., "1st Class")
    pub label: &'static str,
    /// Inclusive lower CGPA bound
    pub min_gpa: f64,
    /// Inclusive upper CGPA bound
    pub max_gpa: f64,
}

impl ClassificationBand {
    /// Whether `cgpa` falls inside this band's inclusive range.
    #[must_use]
    pub fn contains(&self, cgpa: f64) -> bool {
        cgpa >= self.min_gpa && cgpa <= self.max_gpa
    }
}

/// The degree classification scale, scanned in order.
///
/// Bands partition [0, 4.0] at two-decimal resolution.
pub const CLASSIFICATION_SCALE: &[ClassificationBand] = &[
    ClassificationBand {
        label: "1st Class",
        min_gpa: 3.6,
        max_gpa: 4.0,
    },
    ClassificationBand {
        label: "2nd Class Upper",
        min_gpa: 3.0,
        max_gpa: 3.59,
    },
    ClassificationBand {
        label: "2nd Class Lower",
        min_gpa: 2.5,
        max_gpa: 2.99,
    },
    ClassificationBand {
        label: "3rd Class",
        min_gpa: 2.0,
        max_gpa: 2.49,
    },
    ClassificationBand {
        label: "Pass",
        min_gpa: 1.5,
        max_gpa: 1.99,
    },
    ClassificationBand {
        label: "Fail",
        min_gpa: 0.0,
        max_gpa: 1.49,
    },
];

/// Look up the minimum CGPA bound of a classification by label.
///
/// # Returns
/// The band's `min_gpa`, or `None` when no band carries that label.
#[must_use]
pub fn classification_minimum(label: &str) -> Option<f64> {
    CLASSIFICATION_SCALE
        .iter()
        .find(|band| band.label == label)
        .map(|band| band.min_gpa)
}

/// Whether `code` is a valid grade code (numeric or administrative).
#[must_use]
pub fn is_valid_grade_code(code: &str) -> bool {
    GRADE_SCALE.iter().any(|band| band.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_bands_partition_score_range() {
        // Every whole score in [0, 100] must land in exactly one numeric band.
        for score in 0..=100u32 {
            let score = f64::from(score);
            let matches = GRADE_SCALE
                .iter()
                .filter(|band| band.contains(score))
                .count();
            assert_eq!(matches, 1, "score {score} matched {matches} bands");
        }
    }

    #[test]
    fn administrative_codes_never_match_numeric_lookup() {
        for band in GRADE_SCALE.iter().filter(|b| !b.is_numeric()) {
            for score in 0..=100u32 {
                let score = f64::from(score);
                assert!(!band.contains(score), "{} matched score {score}", band.code);
            }
        }
    }

    #[test]
    fn classification_bands_partition_gpa_range() {
        // Every two-decimal CGPA in [0, 4.0] must land in exactly one band.
        for hundredths in 0..=400 {
            let cgpa = f64::from(hundredths) / 100.0;
            let matches = CLASSIFICATION_SCALE
                .iter()
                .filter(|band| band.contains(cgpa))
                .count();
            assert_eq!(matches, 1, "cgpa {cgpa} matched {matches} bands");
        }
    }

    #[test]
    fn classification_minimum_known_labels() {
        assert_eq!(classification_minimum("1st Class"), Some(3.6));
        assert_eq!(classification_minimum("2nd Class Upper"), Some(3.0));
        assert_eq!(classification_minimum("Fail"), Some(0.0));
    }

    #[test]
    fn classification_minimum_unknown_label() {
        assert_eq!(classification_minimum("Summa Cum Laude"), None);
    }

    #[test]
    fn grade_code_validity() {
        assert!(is_valid_grade_code("A-"));
        assert!(is_valid_grade_code("X"));
        assert!(is_valid_grade_code("I"));
        assert!(!is_valid_grade_code("Q"));
    }
}
