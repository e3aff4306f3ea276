use std::{fs, io};

/// What the host filesystem reports about a single path.
///
/// A stat failure of any kind is reported as "does not exist"; this layer
/// never distinguishes an unreadable entry from an absent one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntryStatus {
    pub exists: bool,
    pub is_directory: bool,
}

impl EntryStatus {
    pub fn absent() -> EntryStatus {
        EntryStatus {
            exists: false,
            is_directory: false,
        }
    }
}

/// The file operations this layer consumes from the host platform.
///
/// Exactly one directory level is created per `create_directory_level` call;
/// walking a multi-segment path is the caller's job. All paths are plain
/// strings in the platform's usual file namespace, using that platform's
/// separator.
///
/// Implementations must not retry, cache, or otherwise second-guess the
/// underlying calls: every error is reported exactly once, as the platform
/// produced it, so that callers can implement their own aggregation policy.
pub trait HostFilesystem {
    /// Create exactly one directory level at `path`. Every parent of `path`
    /// must already exist.
    fn create_directory_level(&self, path: &str) -> io::Result<()>;

    /// Report existence and directory-ness of the entry at `path`.
    fn query_entry(&self, path: &str) -> EntryStatus;

    /// Remove the file at `path`.
    fn remove_file(&self, path: &str) -> io::Result<()>;

    /// Clear any hidden/read-only style attributes that would block removal
    /// of `path`. Only meaningful where `enforces_protective_attributes`
    /// reports true; a no-op elsewhere.
    fn clear_protective_attributes(&self, path: &str) -> io::Result<()>;

    /// Whether this platform refuses to delete files carrying protective
    /// attributes until they are cleared.
    fn enforces_protective_attributes(&self) -> bool {
        false
    }
}

/// The path separator recognized by the portable implementation.
pub const SEPARATOR: char = '/';

/// Host filesystem access through the Rust standard library.
///
/// # Platform considerations
///
/// This is the portable version of the implementation, used on targets that
/// are neither unix nor windows. It has no notion of protective attributes,
/// so `clear_protective_attributes` does nothing.
pub struct NativeFilesystem;

impl HostFilesystem for NativeFilesystem {
    fn create_directory_level(&self, path: &str) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn query_entry(&self, path: &str) -> EntryStatus {
        match fs::metadata(path) {
            Ok(metadata) => EntryStatus {
                exists: true,
                is_directory: metadata.is_dir(),
            },
            Err(_) => EntryStatus::absent(),
        }
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn clear_protective_attributes(&self, _path: &str) -> io::Result<()> {
        Ok(())
    }
}
