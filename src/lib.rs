#[macro_use]
extern crate log;

#[cfg(windows)]
extern crate winapi;

#[cfg(unix)]
extern crate libc;

pub mod create;
pub mod delete;
pub mod fs;
pub mod segment;
pub mod tuning;
