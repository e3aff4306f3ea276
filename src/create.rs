//! Recursive directory creation over the host filesystem abstraction.

use std::{error, fmt, io, result};

use crate::fs::HostFilesystem;
use crate::segment::PathSegments;
use crate::tuning::Configuration;

#[derive(Debug)]
pub enum CreationError {
    /// Appending the next segment would have pushed the reconstructed path
    /// past the configured maximum length. No filesystem call was made for
    /// the offending segment.
    PathTooLong,

    /// A single-level creation call failed; the error is whatever the
    /// platform primitive reported.
    Primitive(io::Error),
}

use self::CreationError::*;

impl CreationError {
    /// The numeric form of this error, for callers that report raw status
    /// codes rather than structured errors.
    ///
    /// Path overflow is reported as -1, which no platform uses as a real
    /// error code. Primitive failures report the raw OS code, or -2 in the
    /// unusual case where the platform produced an error without one.
    pub fn os_code(&self) -> i32 {
        match self {
            PathTooLong => -1,
            Primitive(err) => err.raw_os_error().unwrap_or(-2),
        }
    }
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathTooLong => write!(f, "Reconstructed path exceeds the maximum path length"),
            Primitive(err) => err.fmt(f),
        }
    }
}

impl error::Error for CreationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            PathTooLong => None,
            Primitive(err) => Some(err),
        }
    }
}

impl From<io::Error> for CreationError {
    fn from(error: io::Error) -> Self {
        Primitive(error)
    }
}

pub type Result<T> = result::Result<T, CreationError>;

/// Creates directory trees one level at a time against a `HostFilesystem`.
///
/// The separator and the maximum reconstructable path length are bound at
/// construction and never change afterwards. The creator keeps no state
/// between calls; the working prefix buffer is local to each call.
pub struct DirectoryCreator<F> {
    fs: F,
    config: Configuration,
}

impl<F: HostFilesystem> DirectoryCreator<F> {
    pub fn new(fs: F) -> DirectoryCreator<F> {
        DirectoryCreator::with_configuration(fs, Configuration::default())
    }

    pub fn with_configuration(fs: F, config: Configuration) -> DirectoryCreator<F> {
        DirectoryCreator {
            fs: fs,
            config: config,
        }
    }

    pub fn as_inner_filesystem(&self) -> &F {
        &self.fs
    }

    /// Create `path` and any missing intermediate directories.
    ///
    /// Walks the path segment by segment, rebuilding the prefix as it goes.
    /// Each prefix that does not exist, or exists as something other than a
    /// directory, gets a single-level creation attempt. An occupied
    /// non-directory prefix is not treated specially: the attempt is made
    /// anyway and whatever the primitive reports becomes the recorded
    /// result. Leading separators are consumed by segmentation, so
    /// reconstruction is always relative to the working directory.
    ///
    /// # Returns
    ///
    /// The result of the *last* creation attempt that was invoked, or
    /// success if no attempt was needed because every level already existed
    /// as a directory. An earlier failed level whose later sibling is
    /// created successfully or skipped over is therefore masked; callers
    /// that need the first failure should use `create_directory_strict`.
    ///
    /// `CreationError::PathTooLong` is returned as soon as appending the
    /// next segment would exceed the configured maximum, before any
    /// filesystem call for that segment. Levels already created by then are
    /// left in place; nothing is rolled back on any failure.
    ///
    /// Calling this twice over a fully-existing tree succeeds both times
    /// and performs no mutating call on the second run.
    pub fn create_directory(&self, path: &str) -> Result<()> {
        let mut prefix = String::with_capacity(self.config.max_path_length);
        let mut last_attempt = Ok(());

        for segment in PathSegments::new(path, self.config.separator) {
            if prefix.len() + segment.len() > self.config.max_path_length {
                return Err(PathTooLong);
            }

            prefix.push_str(segment);

            let entry = self.fs.query_entry(&prefix);
            if !entry.exists || !entry.is_directory {
                last_attempt = self.fs.create_directory_level(&prefix);
            }

            prefix.push(self.config.separator);
        }

        last_attempt.map_err(Primitive)
    }

    /// Create `path` and any missing intermediate directories, stopping at
    /// the first failure.
    ///
    /// Same traversal as `create_directory`, but a failed creation attempt
    /// aborts the walk immediately and is returned as-is instead of being
    /// overwritten by later attempts. Length checking is identical.
    pub fn create_directory_strict(&self, path: &str) -> Result<()> {
        let mut prefix = String::with_capacity(self.config.max_path_length);

        for segment in PathSegments::new(path, self.config.separator) {
            if prefix.len() + segment.len() > self.config.max_path_length {
                return Err(PathTooLong);
            }

            prefix.push_str(segment);

            let entry = self.fs.query_entry(&prefix);
            if !entry.exists || !entry.is_directory {
                self.fs.create_directory_level(&prefix)?;
            }

            prefix.push(self.config.separator);
        }

        Ok(())
    }
}
