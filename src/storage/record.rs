//! Parsing of delimited course records.
//!
//! A record is one line of the form `NUMBER,NAME[,PREREQ...]`. Prerequisite
//! tokens are checked against the [`KnownCourses`] collected from the whole
//! source; tokens naming an unknown course are dropped.

use std::{
    collections::HashSet,
    io::{self, BufRead},
};

use crate::domain::Course;

/// The set of every course number that appears in a source.
///
/// Built from the first field of every line, before any record is parsed, so
/// that a prerequisite may refer to a course defined later in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownCourses(HashSet<String>);

impl KnownCourses {
    /// Collects the text before the first `delimiter` on every line.
    ///
    /// Lines without a delimiter contribute the whole line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `reader` fails. A line that is not
    /// UTF-8 fails with [`io::ErrorKind::InvalidData`].
    pub fn from_reader<R: BufRead>(reader: R, delimiter: char) -> io::Result<Self> {
        reader
            .lines()
            .map(|line| {
                line.map(|line| match line.split_once(delimiter) {
                    Some((front, _)) => front.to_string(),
                    None => line,
                })
            })
            .collect()
    }

    /// Returns `true` if `course_number` is a known course.
    ///
    /// The comparison is exact and case-sensitive.
    #[must_use]
    pub fn contains(&self, course_number: &str) -> bool {
        self.0.contains(course_number)
    }

    /// The number of distinct course numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no course numbers are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for KnownCourses {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A record that cannot be turned into a course.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    /// The line has no fields at all.
    #[error("missing course number")]
    MissingNumber,

    /// The line has a course number but no name.
    #[error("course {0} is missing a name")]
    MissingName(String),
}

/// Parses one line into a [`Course`].
///
/// Field 0 is the course number and field 1 the course name. Every further
/// field is kept as a prerequisite, in order, only if `known` contains it.
///
/// # Errors
///
/// Returns [`RecordError`] if the line has fewer than two fields.
pub fn parse_record(
    line: &str,
    delimiter: char,
    known: &KnownCourses,
) -> Result<Course, RecordError> {
    let mut fields = split_fields(line, delimiter).into_iter();

    let number = fields.next().ok_or(RecordError::MissingNumber)?;
    let name = fields
        .next()
        .ok_or_else(|| RecordError::MissingName(number.to_string()))?;

    let prerequisites = fields
        .filter(|token| {
            let recognised = known.contains(token);
            if !recognised {
                tracing::trace!("{number}: dropping unknown prerequisite '{token}'");
            }
            recognised
        })
        .map(ToString::to_string)
        .collect();

    Ok(Course::new(number, name, prerequisites))
}

/// Splits a line into fields.
///
/// An empty line has no fields, and a trailing delimiter does not introduce
/// an empty final field.
fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut fields: Vec<&str> = line.split(delimiter).collect();
    if fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
