//! Load conversion policies from TOML files.
//!
//! Applications typically embed a policy table in their own configuration;
//! these entry points cover the standalone-file case. A missing file is not
//! an error (the defaults apply); a file that fails to parse or validate is
//! reported and the defaults apply.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;

use super::Policy;

/// Pure function to read a policy file's contents
pub(crate) fn read_policy_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate a policy from a TOML string
pub fn parse_policy(contents: &str) -> Result<Policy, String> {
    let policy = toml::from_str::<Policy>(contents)
        .map_err(|e| format!("Failed to parse policy: {}", e))?;
    policy.validate()?;
    Ok(policy)
}

/// Try loading a policy from a specific path, falling back to `None` on
/// any problem.
pub fn try_load_policy_from_path(path: &Path) -> Option<Policy> {
    let contents = match read_policy_file(path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(path, &e);
            return None;
        }
    };

    match parse_policy(&contents) {
        Ok(policy) => {
            log::debug!("Loaded policy from {}", path.display());
            Some(policy)
        }
        Err(e) => {
            log::warn!("{} in {}; using defaults", e, path.display());
            None
        }
    }
}

/// Load a policy from `path`, or the default policy when the file is
/// missing or invalid.
pub fn load_policy_or_default(path: &Path) -> Policy {
    try_load_policy_from_path(path).unwrap_or_default()
}

/// Load a policy from `path`, propagating read/parse failures with context.
pub fn load_policy(path: &Path) -> anyhow::Result<Policy> {
    let contents = read_policy_file(path)
        .with_context(|| format!("failed to read policy file {}", path.display()))?;
    let policy = parse_policy(&contents)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("invalid policy file {}", path.display()))?;
    Ok(policy)
}

/// Log file read errors, staying quiet about a merely missing file
fn handle_read_error(path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!("Failed to read policy file {}: {}", path.display(), error);
    }
}
