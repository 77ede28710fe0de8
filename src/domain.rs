//! Domain models for course planning.
//!
//! This module contains the course record, the ordered course index and the
//! planner configuration.

/// Course record type.
pub mod course;
pub use course::Course;

mod config;
pub use config::Config;

/// Ordered course container keyed by course number.
pub mod index;
pub use index::CourseIndex;
