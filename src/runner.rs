use std::path::Path;
use std::time::Instant;

use log::debug;

use crate::browsers::Browser;
use crate::executor;
use crate::output;
use crate::plan::{self, CleanItem, CleanOptions};
use crate::processes;
use crate::profiles;
use crate::report::{BrowserReport, ProfileResult, RunSummary};
use crate::utils;

/// Clean one profile directory: build its plan and run every item.
pub fn clean_profile(profile: &Path, options: &CleanOptions) -> ProfileResult {
    let items = plan::build_plan(profile, options);
    debug!("{}: {} item(s) planned", profile.display(), items.len());
    let outcomes = items
        .iter()
        .map(|item| executor::execute(item, options))
        .collect();
    ProfileResult {
        profile: profile.to_path_buf(),
        outcomes,
    }
}

/// Run the whole sweep over the requested browsers.
///
/// A browser that is not installed, or whose data cannot be found, is
/// skipped with a notice. Failures inside a profile never stop the run.
pub fn run(browsers: &[Browser], options: &CleanOptions) -> RunSummary {
    let start = Instant::now();
    let mut inspector = processes::default_inspector();
    let mut reports = Vec::new();
    let mut skipped_browsers = Vec::new();

    for &browser in browsers {
        let (root, profile_dirs) = match profiles::locate(browser) {
            Some(found) => found,
            None => {
                let reason = "no user data folder found".to_string();
                output::print_info(&format!("{}: {}", browser.label(), reason));
                skipped_browsers.push((browser, reason));
                continue;
            }
        };
        if profile_dirs.is_empty() {
            let reason = format!("no profiles detected in {}", utils::display_path(&root));
            output::print_info(&format!("{}: {}", browser.label(), reason));
            skipped_browsers.push((browser, reason));
            continue;
        }

        output::print_browser_header(
            browser.label(),
            &utils::display_path(&root),
            profile_dirs.len(),
        );

        if !options.no_kill {
            inspector.terminate(browser, options.dry_run, options.force_kill);
        }

        let mut results = Vec::new();
        for profile in &profile_dirs {
            output::print_profile_header(&utils::display_path(profile));
            results.push(clean_profile(profile, options));
        }

        let local_state = options.remove_local_state.then(|| {
            executor::execute(
                &CleanItem::Remove {
                    path: root.join(plan::LOCAL_STATE),
                },
                options,
            )
        });

        reports.push(BrowserReport {
            browser,
            root,
            profiles: results,
            local_state,
        });
    }

    RunSummary {
        reports,
        skipped_browsers,
        elapsed: start.elapsed(),
        dry_run: options.dry_run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn clean_profile_covers_the_whole_plan() {
        let tmp = tempfile::tempdir().unwrap();
        let profile = tmp.path().join("Default");
        fs::create_dir_all(profile.join("Cache")).unwrap();
        fs::write(profile.join("Cache/f_000001"), vec![0u8; 100]).unwrap();
        fs::write(profile.join("Visited Links"), vec![0u8; 64]).unwrap();

        let options = CleanOptions::default();
        let result = clean_profile(&profile, &options);

        assert_eq!(
            result.outcomes.len(),
            plan::build_plan(&profile, &options).len()
        );
        assert_eq!(result.failed_count(), 0);
        assert_eq!(result.cleaned_count(), 2);
        assert!(!profile.join("Cache").exists());
        assert!(!profile.join("Visited Links").exists());
    }

    #[test]
    fn run_with_no_browsers_is_an_empty_success() {
        let summary = run(&[], &CleanOptions::default());
        assert!(summary.reports.is_empty());
        assert!(summary.skipped_browsers.is_empty());
        assert!(summary.all_succeeded());
    }

    #[test]
    fn missing_root_skips_the_browser_softly() {
        let _guard = crate::browsers::env_lock()
            .lock()
            .unwrap_or_else(|p| p.into_inner());
        std::env::set_var("CHROMIUM_SWEEP_CHROME_ROOT", "/definitely/not/here");
        let summary = run(&[Browser::Chrome], &CleanOptions::default());
        std::env::remove_var("CHROMIUM_SWEEP_CHROME_ROOT");

        assert!(summary.reports.is_empty());
        assert_eq!(summary.skipped_browsers.len(), 1);
        assert!(summary.all_succeeded());
    }
}
