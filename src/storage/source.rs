//! A delimited text source of course records
//!
//! A [`CourseSource`] is created by opening a file (or wrapping any seekable
//! reader). Opening performs a pre-pass over the whole source to collect the
//! [`KnownCourses`], then rewinds so that [`CourseSource::load`] can parse
//! every record from the start.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    domain::{Course, CourseIndex},
    storage::record::{KnownCourses, RecordError, parse_record},
};

/// The source could not be opened for reading.
///
/// This is recoverable: the caller may try another path.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// The file could not be opened or read.
    #[error("failed to open course source {}", .path.display())]
    Io {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file was readable but is not UTF-8 text.
    #[error("course source {} is not valid UTF-8 text", .path.display())]
    NotUtf8 {
        /// The path that was requested.
        path: PathBuf,
        /// The decoding failure reported by the reader.
        #[source]
        source: io::Error,
    },
}

impl OpenError {
    fn new(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::InvalidData {
            Self::NotUtf8 { path, source }
        } else {
            Self::Io { path, source }
        }
    }

    /// The path that could not be opened.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::NotUtf8 { path, .. } => path,
        }
    }
}

/// Errors that can occur while loading a source into an index.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the source failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A record was malformed. The load is abandoned.
    #[error("line {line}: {source}")]
    Malformed {
        /// The 1-based line number of the record.
        line: usize,
        /// What was wrong with the record.
        source: RecordError,
    },
}

/// A source of course records, ready to be loaded.
#[derive(Debug)]
pub struct CourseSource<R> {
    reader: R,
    path: Option<PathBuf>,
    delimiter: char,
    known: KnownCourses,
    /// Lines consumed by previous loads.
    consumed: usize,
}

impl CourseSource<BufReader<File>> {
    /// Opens the file at `path` and collects its known course numbers.
    ///
    /// The file must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`OpenError::NotUtf8`] if the file is not UTF-8, or
    /// [`OpenError::Io`] if it cannot be opened or read.
    pub fn open(path: impl AsRef<Path>, delimiter: char) -> Result<Self, OpenError> {
        let path = path.as_ref();
        tracing::debug!("opening course source {}", path.display());
        let with_path = |source| OpenError::new(path, source);

        let file = File::open(path).map_err(with_path)?;
        let mut source = Self::new(BufReader::new(file), delimiter).map_err(with_path)?;
        source.path = Some(path.to_path_buf());
        Ok(source)
    }
}

impl<R: BufRead + Seek> CourseSource<R> {
    /// Wraps a reader, running the known-course pre-pass and rewinding it.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader cannot be read or rewound.
    pub fn new(mut reader: R, delimiter: char) -> io::Result<Self> {
        let known = KnownCourses::from_reader(&mut reader, delimiter)?;
        reader.seek(SeekFrom::Start(0))?;
        tracing::debug!("found {} known course numbers", known.len());

        Ok(Self {
            reader,
            path: None,
            delimiter,
            known,
            consumed: 0,
        })
    }

    /// Parses every remaining record and inserts it into `index`.
    ///
    /// All records are parsed before any is inserted, so if a record is
    /// malformed the index is left untouched and the source is rewound to
    /// where this load began; loading again reports the same error. After a
    /// successful load the source is consumed and loading it again inserts
    /// nothing.
    ///
    /// Returns the number of courses inserted.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Malformed`] for the first record with fewer than
    /// two fields, or [`LoadError::Io`] if reading fails.
    #[instrument(level = "debug", skip_all)]
    pub fn load(&mut self, index: &mut CourseIndex) -> Result<usize, LoadError> {
        let start = self.reader.stream_position()?;
        let courses = match self.parse_remaining() {
            Ok(courses) => courses,
            Err(e) => {
                self.reader.seek(SeekFrom::Start(start))?;
                return Err(e);
            }
        };

        let count = courses.len();
        self.consumed += count;
        index.extend(courses);

        tracing::debug!(
            "loaded {count} courses ({} total, depth {})",
            index.len(),
            index.depth()
        );
        Ok(count)
    }

    fn parse_remaining(&mut self) -> Result<Vec<Course>, LoadError> {
        let first_line = self.consumed + 1;
        (&mut self.reader)
            .lines()
            .enumerate()
            .map(|(offset, line)| {
                parse_record(&line?, self.delimiter, &self.known).map_err(|source| {
                    LoadError::Malformed {
                        line: first_line + offset,
                        source,
                    }
                })
            })
            .collect()
    }
}

impl<R> CourseSource<R> {
    /// The path this source was opened from, if it came from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The course numbers prerequisites are validated against.
    #[must_use]
    pub const fn known_courses(&self) -> &KnownCourses {
        &self.known
    }
}
