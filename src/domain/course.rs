use std::fmt;

use serde::Serialize;

/// A course offered by the institution.
///
/// Courses are immutable once constructed. The prerequisite list only ever
/// contains course numbers that were recognised when the course was parsed;
/// see [`crate::storage::parse_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    number: String,
    name: String,
    prerequisites: Vec<String>,
}

impl Course {
    /// Creates a course from its parts.
    ///
    /// No validation is performed here; prerequisite filtering is the job of
    /// the record parser.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites,
        }
    }

    /// The course number, exactly as it appeared in the source.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The human-readable course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course numbers that must be completed before this course, in source
    /// order.
    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }
}

/// Formats a course as `NUMBER, NAME`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.name)
    }
}
