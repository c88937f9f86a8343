use std::path::PathBuf;
use std::time::Duration;

use crate::browsers::Browser;

/// What happened to one clean item. In a dry run, `Cleaned` means the action
/// was simulated and reported.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Target removed or sanitized.
    Cleaned { path: PathBuf, bytes_freed: u64 },
    /// Target did not exist, nothing to do.
    Skipped { path: PathBuf },
    /// Target deliberately left in place.
    Preserved { path: PathBuf, reason: &'static str },
    /// The attempt failed. The run carries on regardless.
    Failed { path: PathBuf, error: String },
}

/// Outcomes for every item of one profile.
#[derive(Debug, Clone)]
pub struct ProfileResult {
    pub profile: PathBuf,
    pub outcomes: Vec<ItemOutcome>,
}

impl ProfileResult {
    pub fn cleaned_count(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Cleaned { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped { .. }))
    }

    pub fn preserved_count(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Preserved { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    pub fn bytes_freed(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o {
                ItemOutcome::Cleaned { bytes_freed, .. } => *bytes_freed,
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            ItemOutcome::Failed { path, error } => Some((path, error.as_str())),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Everything done for one browser installation.
#[derive(Debug, Clone)]
pub struct BrowserReport {
    pub browser: Browser,
    pub root: PathBuf,
    pub profiles: Vec<ProfileResult>,
    /// Outcome for the root-level state file, when its removal was requested.
    pub local_state: Option<ItemOutcome>,
}

impl BrowserReport {
    pub fn failed_count(&self) -> usize {
        let local = matches!(&self.local_state, Some(ItemOutcome::Failed { .. })) as usize;
        self.profiles.iter().map(ProfileResult::failed_count).sum::<usize>() + local
    }

    pub fn bytes_freed(&self) -> u64 {
        let local = match &self.local_state {
            Some(ItemOutcome::Cleaned { bytes_freed, .. }) => *bytes_freed,
            _ => 0,
        };
        self.profiles.iter().map(ProfileResult::bytes_freed).sum::<u64>() + local
    }
}

/// Final account of a whole run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub reports: Vec<BrowserReport>,
    /// Browsers that were requested but had nothing to clean, with the reason.
    pub skipped_browsers: Vec<(Browser, String)>,
    pub elapsed: Duration,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn failed_count(&self) -> usize {
        self.reports.iter().map(BrowserReport::failed_count).sum()
    }

    pub fn bytes_freed(&self) -> u64 {
        self.reports.iter().map(BrowserReport::bytes_freed).sum()
    }

    /// True when no item anywhere failed. Drives the process exit code.
    pub fn all_succeeded(&self) -> bool {
        self.failed_count() == 0
    }
}
