//! Path handling related configuration

use crate::fs;

#[derive(Copy, Clone)]
pub struct Configuration {
    pub separator: char,
    pub max_path_length: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            separator: fs::SEPARATOR,
            max_path_length: 1024, //bytes, separators included
        }
    }
}
