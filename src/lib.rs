//! Course Planning and Advising
//!
//! Course records are read from a delimited text file into an ordered
//! in-memory index, which can then be listed or queried by course number.

pub mod domain;
pub use domain::{Config, Course, CourseIndex};

/// Reading and validating course records from delimited text sources.
pub mod storage;
pub use storage::{CourseSource, KnownCourses, LoadError, OpenError, RecordError};
