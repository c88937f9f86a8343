use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::browsers::Browser;

/// Whether a directory name looks like a Chromium profile.
fn is_profile_name(name: &str) -> bool {
    name == "Default" || name.starts_with("Profile") || name.to_lowercase().ends_with("default")
}

/// List profile directories under a user data root.
///
/// Directories matching the usual Chromium naming scheme win. If none match,
/// any subdirectory holding a History file is taken instead, which covers
/// portable and renamed setups. Results are sorted for a stable clean order.
pub fn discover_profiles(root: &Path) -> Vec<PathBuf> {
    let mut named = Vec::new();
    let mut with_history = Vec::new();

    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name();
            if is_profile_name(&name.to_string_lossy()) {
                named.push(path);
            } else if path.join("History").exists() {
                with_history.push(path);
            }
        }
    }

    let mut profiles = if named.is_empty() { with_history } else { named };
    profiles.sort();
    profiles
}

/// Resolve a browser to its user data root and profile directories.
///
/// Returns `None` when no root is known for this platform or the root does
/// not exist on disk. Never fails hard: an uninstalled browser is simply not
/// there to clean.
pub fn locate(browser: Browser) -> Option<(PathBuf, Vec<PathBuf>)> {
    let root = browser.user_data_root()?;
    if !root.is_dir() {
        debug!("{} user data root not present: {}", browser.label(), root.display());
        return None;
    }
    let profiles = discover_profiles(&root);
    debug!(
        "{}: found {} profile(s) under {}",
        browser.label(),
        profiles.len(),
        root.display()
    );
    Some((root, profiles))
}
