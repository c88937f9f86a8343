use std::path::PathBuf;

/// A supported Chromium-family browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Edge,
}

impl Browser {
    pub const ALL: [Browser; 2] = [Browser::Chrome, Browser::Edge];

    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Edge => "Edge",
        }
    }

    /// Names identifying this browser's processes. Matched case-insensitively
    /// as substrings so renderer and helper processes are caught too.
    pub fn process_aliases(self) -> &'static [&'static str] {
        match self {
            Browser::Chrome => &["chrome", "chrome.exe", "Google Chrome"],
            Browser::Edge => &["msedge", "msedge.exe", "Microsoft Edge"],
        }
    }

    /// Environment variable that overrides the user data root. Lets the tool
    /// target portable installs and lets tests point it at a fixture tree.
    pub fn root_override_var(self) -> &'static str {
        match self {
            Browser::Chrome => "CHROMIUM_SWEEP_CHROME_ROOT",
            Browser::Edge => "CHROMIUM_SWEEP_EDGE_ROOT",
        }
    }

    /// The user data root for the current platform, if one can be determined.
    /// Does not check that the directory exists.
    pub fn user_data_root(self) -> Option<PathBuf> {
        if let Some(root) = std::env::var_os(self.root_override_var()) {
            return Some(PathBuf::from(root));
        }
        self.platform_root()
    }

    fn platform_root(self) -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        return std::env::var_os("LOCALAPPDATA").map(|base| {
            PathBuf::from(base).join(match self {
                Browser::Chrome => r"Google\Chrome\User Data",
                Browser::Edge => r"Microsoft\Edge\User Data",
            })
        });

        #[cfg(target_os = "macos")]
        return dirs::home_dir().map(|home| {
            home.join("Library/Application Support").join(match self {
                Browser::Chrome => "Google/Chrome",
                Browser::Edge => "Microsoft Edge",
            })
        });

        #[cfg(target_os = "linux")]
        return dirs::home_dir().map(|home| {
            home.join(".config").join(match self {
                Browser::Chrome => "google-chrome",
                Browser::Edge => "microsoft-edge",
            })
        });

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return None;
    }
}

// The root overrides are process-global, so every unit test that sets one
// holds this lock for its whole run.
#[cfg(test)]
pub(crate) fn env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}
