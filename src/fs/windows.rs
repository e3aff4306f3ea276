//! Windows-specific implementations of fs methods.

use std::os::windows::ffi::OsStrExt;
use std::{ffi, io, ptr};

use winapi::um::fileapi::{
    CreateDirectoryW, DeleteFileW, GetFileAttributesW, SetFileAttributesW,
    INVALID_FILE_ATTRIBUTES,
};
use winapi::um::winnt::{FILE_ATTRIBUTE_DIRECTORY, FILE_ATTRIBUTE_NORMAL, WCHAR};

pub use crate::fs::portable::{EntryStatus, HostFilesystem};

/// The path separator recognized by the Win32 namespace.
pub const SEPARATOR: char = '\\';

fn conv_path_to_wcstr(path: &str) -> Vec<WCHAR> {
    let mut wide: Vec<WCHAR> = ffi::OsStr::new(path).encode_wide().collect();
    wide.push(0 as WCHAR);
    wide
}

/// Host filesystem access through the Win32 API.
///
/// # Platform considerations
///
/// This is the Windows version of the implementation. Hidden and read-only
/// attributes block `DeleteFileW`, so this platform reports attribute
/// enforcement and clears the attribute word down to `FILE_ATTRIBUTE_NORMAL`
/// before deletion is attempted.
pub struct NativeFilesystem;

impl HostFilesystem for NativeFilesystem {
    fn create_directory_level(&self, path: &str) -> io::Result<()> {
        let wide = conv_path_to_wcstr(path);

        if unsafe { CreateDirectoryW(wide.as_ptr(), ptr::null_mut()) } == 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(())
    }

    fn query_entry(&self, path: &str) -> EntryStatus {
        let wide = conv_path_to_wcstr(path);

        let attributes = unsafe { GetFileAttributesW(wide.as_ptr()) };

        if attributes == INVALID_FILE_ATTRIBUTES {
            return EntryStatus::absent();
        }

        EntryStatus {
            exists: true,
            is_directory: attributes & FILE_ATTRIBUTE_DIRECTORY != 0,
        }
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        let wide = conv_path_to_wcstr(path);

        if unsafe { DeleteFileW(wide.as_ptr()) } == 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(())
    }

    fn clear_protective_attributes(&self, path: &str) -> io::Result<()> {
        let wide = conv_path_to_wcstr(path);

        if unsafe { SetFileAttributesW(wide.as_ptr(), FILE_ATTRIBUTE_NORMAL) } == 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(())
    }

    fn enforces_protective_attributes(&self) -> bool {
        true
    }
}
