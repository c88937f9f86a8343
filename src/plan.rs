use std::path::{Path, PathBuf};

/// Run configuration. Every destructive behaviour defaults to off.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub dry_run: bool,
    pub shred: bool,
    pub remove_passwords: bool,
    pub remove_local_state: bool,
    pub no_kill: bool,
    pub force_kill: bool,
    pub verbose: bool,
}

/// Cache and telemetry directories removed from every profile.
const CACHE_DIRS: &[&str] = &[
    "Cache",
    "Code Cache",
    "GPUCache",
    "Service Worker",
    "Service Worker/CacheStorage",
    "IndexedDB",
    "Local Storage",
    "Session Storage",
    "Sessions",
    "Shortcuts",
    "Crashpad",
    "Crash Reports",
    "Safe Browsing",
    "Top Sites",
    "Favicons",
    "History Provider Cache",
    "Thumbnails",
];

/// Profile databases and the statements that empty their sensitive tables.
/// `None` means no statements are known and the file is removed whole.
const DATABASES: &[(&str, Option<&[&str]>)] = &[
    (
        "History",
        Some(&[
            "DELETE FROM urls;",
            "DELETE FROM visits;",
            "DELETE FROM downloads;",
            "VACUUM;",
        ]),
    ),
    ("Cookies", Some(&["DELETE FROM cookies;", "VACUUM;"])),
    (
        "Web Data",
        Some(&[
            "DELETE FROM autofill;",
            "DELETE FROM autofill_profiles;",
            "VACUUM;",
        ]),
    ),
    ("Login Data", Some(&["DELETE FROM logins;", "VACUUM;"])),
    ("Network Action Predictor", None),
];

/// Session and preference files removed from every profile.
const LOOSE_FILES: &[&str] = &[
    "Cookies-journal",
    "Current Session",
    "Current Tabs",
    "Last Session",
    "Last Tabs",
    "Preferences",
    "Secure Preferences",
    "Visited Links",
];

/// Database holding saved passwords. Only touched when asked.
pub const CREDENTIALS_DB: &str = "Login Data";

/// Cross-profile file in the user data root carrying sign-in state and the
/// last active profile. Removed only on request.
pub const LOCAL_STATE: &str = "Local State";

/// One unit of cleaning work. Items are independent of each other and carry
/// everything the executor needs to act.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanItem {
    /// Delete a file or directory tree.
    Remove { path: PathBuf },
    /// Empty sensitive tables inside a database, then compact it.
    Sanitize {
        db: PathBuf,
        statements: &'static [&'static str],
    },
    /// Leave the target in place and tell the user why.
    Preserve {
        path: PathBuf,
        reason: &'static str,
    },
}

impl CleanItem {
    pub fn target(&self) -> &Path {
        match self {
            CleanItem::Remove { path } | CleanItem::Preserve { path, .. } => path,
            CleanItem::Sanitize { db, .. } => db,
        }
    }
}

/// Build the list of clean items for one profile directory.
///
/// Pure table lookup, no filesystem access. Whether a target actually exists
/// is resolved by the executor, so a plan can be produced for a profile that
/// is already half empty.
pub fn build_plan(profile: &Path, options: &CleanOptions) -> Vec<CleanItem> {
    let mut items = Vec::new();

    for &name in CACHE_DIRS {
        items.push(CleanItem::Remove {
            path: profile.join(name),
        });
    }

    for &(name, statements) in DATABASES {
        let path = profile.join(name);
        match statements {
            Some(statements) => {
                if name == CREDENTIALS_DB && !options.remove_passwords {
                    items.push(CleanItem::Preserve {
                        path,
                        reason: "saved passwords kept, pass --remove-passwords to delete them",
                    });
                } else {
                    items.push(CleanItem::Sanitize { db: path, statements });
                }
            }
            None => items.push(CleanItem::Remove { path }),
        }
    }

    for &name in LOOSE_FILES {
        items.push(CleanItem::Remove {
            path: profile.join(name),
        });
    }

    items
}
