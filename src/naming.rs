use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::Error;

pub const EXTENSION: &str = "data";

/// `key-value` segments for every field in sorted key order, joined by `-`
///
/// ```rust
/// use std::collections::BTreeMap;
/// use amorph::naming::base_name;
///
/// let fields = BTreeMap::from([
///     ("density".to_string(), "2.0".to_string()),
///     ("N".to_string(), "10".to_string()),
/// ]);
/// assert_eq!(base_name(&fields), "N-10-density-2.0");
/// ```
pub fn base_name(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}-{}", k, v))
        .collect::<Vec<_>>()
        .join("-")
}

pub fn versioned_name(base: &str, version: usize) -> String {
    format!("{}-id-{}", base, version)
}

/// Create `dir` if needed and find the first `-id-<v>` name, starting at 1,
/// whose data file does not exist yet. Returns the name and its full path.
pub fn next_available(
    dir: &Path,
    fields: &BTreeMap<String, String>,
) -> Result<(String, PathBuf), Error> {
    fs::create_dir_all(dir)?;
    let base = base_name(fields);
    let mut version = 1;
    loop {
        let name = versioned_name(&base, version);
        let path = dir.join(format!("{}.{}", name, EXTENSION));
        if !path.try_exists()? {
            return Ok((name, path));
        }
        debug!("{} already exists", path.display());
        version += 1;
    }
}
