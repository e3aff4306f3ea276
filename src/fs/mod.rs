//! Abstraction layer for the platform-specific file operations extraction
//! needs.

pub mod portable;

#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub mod unix;

#[cfg(test)]
pub mod testfs;

#[cfg(unix)]
pub use crate::fs::unix::*;

#[cfg(windows)]
pub use crate::fs::windows::*;

#[cfg(all(not(unix), not(windows)))]
pub use crate::fs::portable::*;
