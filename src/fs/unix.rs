//! Unix-specific implementations of fs methods.

use std::{ffi, io, mem};

pub use crate::fs::portable::{EntryStatus, HostFilesystem};

/// The path separator recognized by unix-like platforms.
pub const SEPARATOR: char = '/';

fn conv_path_to_cstr(path: &str) -> io::Result<ffi::CString> {
    ffi::CString::new(path)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Path contains an interior NUL"))
}

/// Host filesystem access through the C runtime.
///
/// # Platform considerations
///
/// This is the unix version of the implementation. Directory levels are
/// created mode 0755 (subject to the process umask), entries are classified
/// with `stat`, and files are removed with `unlink`. Unix enforces deletion
/// through directory permissions rather than per-file protective attributes,
/// so `clear_protective_attributes` does nothing here.
pub struct NativeFilesystem;

impl HostFilesystem for NativeFilesystem {
    fn create_directory_level(&self, path: &str) -> io::Result<()> {
        let cpath = conv_path_to_cstr(path)?;

        if unsafe { libc::mkdir(cpath.as_ptr(), 0o755) } != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(())
    }

    fn query_entry(&self, path: &str) -> EntryStatus {
        let cpath = match conv_path_to_cstr(path) {
            Ok(cpath) => cpath,
            Err(_) => return EntryStatus::absent(),
        };

        let mut dirstat: libc::stat = unsafe { mem::zeroed() };

        if unsafe { libc::stat(cpath.as_ptr(), &mut dirstat) } != 0 {
            return EntryStatus::absent();
        }

        EntryStatus {
            exists: true,
            is_directory: dirstat.st_mode & libc::S_IFMT == libc::S_IFDIR,
        }
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        let cpath = conv_path_to_cstr(path)?;

        if unsafe { libc::unlink(cpath.as_ptr()) } != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(())
    }

    fn clear_protective_attributes(&self, _path: &str) -> io::Result<()> {
        Ok(())
    }
}
