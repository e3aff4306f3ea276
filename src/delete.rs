//! File deletion over the host filesystem abstraction.

use crate::fs::HostFilesystem;

/// Delete the file at `path`.
///
/// Nothing is reported back: deletion failures, a missing file included, are
/// deliberately not surfaced to the caller. On platforms that refuse to
/// delete files carrying protective attributes, those attributes are cleared
/// first; elsewhere that step is skipped entirely.
pub fn delete_file<F: HostFilesystem>(fs: &F, path: &str) {
    if fs.enforces_protective_attributes() {
        if let Err(error) = fs.clear_protective_attributes(path) {
            debug!("Could not clear attributes on {}: {}", path, error);
        }
    }

    if let Err(error) = fs.remove_file(path) {
        debug!("Could not delete {}: {}", path, error);
    }
}
