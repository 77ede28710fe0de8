/// Parsing of single course records and the set of known course numbers.
pub mod record;
/// Opening a course source and loading it into an index.
pub mod source;

pub use record::{KnownCourses, RecordError, parse_record};
pub use source::{CourseSource, LoadError, OpenError};
