//! Scripted in-memory filesystem for exercising the creation and deletion
//! logic without touching the host.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::fs::portable::{EntryStatus, HostFilesystem};

//Status codes the script reports, numerically arbitrary but stable so tests
//can assert on them.
pub const CODE_OCCUPIED: i32 = 17;
pub const CODE_MISSING: i32 = 2;
pub const CODE_PROTECTED: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateDirectoryLevel(String),
    QueryEntry(String),
    RemoveFile(String),
    ClearProtectiveAttributes(String),
}

#[derive(Copy, Clone)]
struct Entry {
    is_directory: bool,
    protected: bool,
}

/// A `HostFilesystem` whose state lives in a map and whose every primitive
/// invocation is recorded, in order, for later assertion.
pub struct ScriptedFilesystem {
    entries: RefCell<BTreeMap<String, Entry>>,
    mkdir_failures: BTreeMap<String, i32>,
    enforces_attributes: bool,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedFilesystem {
    pub fn new() -> ScriptedFilesystem {
        ScriptedFilesystem {
            entries: RefCell::new(BTreeMap::new()),
            mkdir_failures: BTreeMap::new(),
            enforces_attributes: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_attribute_enforcement() -> ScriptedFilesystem {
        let mut fs = ScriptedFilesystem::new();
        fs.enforces_attributes = true;
        fs
    }

    pub fn add_directory(&self, path: &str) {
        self.entries.borrow_mut().insert(
            path.to_string(),
            Entry {
                is_directory: true,
                protected: false,
            },
        );
    }

    pub fn add_file(&self, path: &str) {
        self.entries.borrow_mut().insert(
            path.to_string(),
            Entry {
                is_directory: false,
                protected: false,
            },
        );
    }

    pub fn add_protected_file(&self, path: &str) {
        self.entries.borrow_mut().insert(
            path.to_string(),
            Entry {
                is_directory: false,
                protected: true,
            },
        );
    }

    /// Script the single-level creation at `path` to fail with `code`.
    pub fn fail_create_directory_level(&mut self, path: &str, code: i32) {
        self.mkdir_failures.insert(path.to_string(), code);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn creation_attempts(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| match call {
                Call::CreateDirectoryLevel(_) => true,
                _ => false,
            })
            .count()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.entries.borrow().contains_key(path)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        match self.entries.borrow().get(path) {
            Some(entry) => entry.is_directory,
            None => false,
        }
    }
}

impl HostFilesystem for ScriptedFilesystem {
    fn create_directory_level(&self, path: &str) -> io::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::CreateDirectoryLevel(path.to_string()));

        if let Some(code) = self.mkdir_failures.get(path) {
            return Err(io::Error::from_raw_os_error(*code));
        }

        let mut entries = self.entries.borrow_mut();

        if entries.contains_key(path) {
            return Err(io::Error::from_raw_os_error(CODE_OCCUPIED));
        }

        entries.insert(
            path.to_string(),
            Entry {
                is_directory: true,
                protected: false,
            },
        );

        Ok(())
    }

    fn query_entry(&self, path: &str) -> EntryStatus {
        self.calls
            .borrow_mut()
            .push(Call::QueryEntry(path.to_string()));

        match self.entries.borrow().get(path) {
            Some(entry) => EntryStatus {
                exists: true,
                is_directory: entry.is_directory,
            },
            None => EntryStatus::absent(),
        }
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::RemoveFile(path.to_string()));

        let mut entries = self.entries.borrow_mut();

        match entries.get(path).copied() {
            Some(entry) if entry.protected && self.enforces_attributes => {
                Err(io::Error::from_raw_os_error(CODE_PROTECTED))
            }
            Some(_) => {
                entries.remove(path);
                Ok(())
            }
            None => Err(io::Error::from_raw_os_error(CODE_MISSING)),
        }
    }

    fn clear_protective_attributes(&self, path: &str) -> io::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::ClearProtectiveAttributes(path.to_string()));

        match self.entries.borrow_mut().get_mut(path) {
            Some(entry) => {
                entry.protected = false;
                Ok(())
            }
            None => Err(io::Error::from_raw_os_error(CODE_MISSING)),
        }
    }

    fn enforces_protective_attributes(&self) -> bool {
        self.enforces_attributes
    }
}
