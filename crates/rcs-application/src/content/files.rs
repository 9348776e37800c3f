//! Reading fixed sets of content files from a directory

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

/// Files read from one directory, keyed by file name
///
/// A file that is absent or unreadable has no entry. Callers decide whether
/// that is fatal (mandatory files) or falls back to an empty string.
#[derive(Debug, Default)]
pub(crate) struct ContentFiles {
    files: BTreeMap<&'static str, String>,
}

impl ContentFiles {
    /// Read every name of `names` from `dir`
    pub(crate) fn read(dir: &Path, names: &[&'static str]) -> Self {
        let mut files = BTreeMap::new();

        for &name in names {
            let path = dir.join(name);
            match fs::read(&path) {
                Ok(bytes) => {
                    debug!(file = %path.display(), "Parsing content file");
                    files.insert(name, String::from_utf8_lossy(&bytes).into_owned());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(file = %path.display(), "Content file not present");
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Content file cannot be read");
                }
            }
        }

        Self { files }
    }

    /// Contents of `name`, if it was read
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// Contents of `name`, or an empty string when absent
    pub(crate) fn text(&self, name: &str) -> String {
        self.get(name).map(str::to_owned).unwrap_or_default()
    }
}
