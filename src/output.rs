use colored::Colorize;

use crate::report::{ItemOutcome, RunSummary};
use crate::utils;

pub fn print_banner() {
    println!(
        "{}",
        format!(
            "chromium-sweep v{} - browser privacy cleaner",
            env!("CARGO_PKG_VERSION")
        )
        .bold()
        .cyan()
    );
    println!();
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_info(msg: &str) {
    println!("{} {}", "Info:".cyan().bold(), msg);
}

pub fn print_browser_header(label: &str, root: &str, profiles: usize) {
    println!();
    println!("{}", format!("=== {label} ===").bold().white());
    println!(
        "  {}  {}",
        root.dimmed(),
        format!("{profiles} profile(s)").yellow()
    );
}

pub fn print_profile_header(path: &str) {
    println!("  {}", format!("Profile: {path}").bold());
}

pub fn print_deleted(path: &str, size: &str) {
    println!("  {} {}  {}", "Deleted".red(), path.dimmed(), size.yellow());
}

pub fn print_would_delete(path: &str, size: &str) {
    println!(
        "  {} {}  {}",
        "[dry-run] Would delete".yellow(),
        path.dimmed(),
        size.yellow()
    );
}

pub fn print_sanitized(path: &str, freed: &str) {
    println!(
        "  {} {}  {}",
        "Sanitized".red(),
        path.dimmed(),
        format!("{freed} compacted away").yellow()
    );
}

pub fn print_would_sanitize(path: &str, statements: usize) {
    println!(
        "  {} {}  {}",
        "[dry-run] Would sanitize".yellow(),
        path.dimmed(),
        format!("{statements} statement(s)").yellow()
    );
}

pub fn print_preserved(path: &str, reason: &str) {
    println!(
        "  {} {}  {}",
        "Kept".cyan(),
        path.dimmed(),
        format!("({reason})").dimmed()
    );
}

pub fn print_delete_error(path: &str, err: &str) {
    println!(
        "  {} {} — {}",
        "Failed".red().bold(),
        path.dimmed(),
        err.red()
    );
}

pub fn print_terminated(name: &str, pid: u32) {
    println!("  {} {} (PID {})", "Terminated".red(), name, pid);
}

pub fn print_would_terminate(name: &str, pid: u32) {
    println!(
        "  {} {} (PID {})",
        "[dry-run] Would terminate".yellow(),
        name,
        pid
    );
}

pub fn print_still_running(name: &str, pid: u32) {
    println!(
        "  {} {}",
        "Still running after timeout:".yellow().bold(),
        format!("{name} (PID {pid})")
    );
}

pub fn print_blind_kill(aliases: &str) {
    print_info(&format!(
        "process table unavailable here, issuing blind kill commands for: {aliases}"
    ));
}

pub fn print_would_blind_kill(aliases: &str) {
    println!(
        "  {} {}",
        "[dry-run] Would issue kill commands for:".yellow(),
        aliases
    );
}

pub fn print_summary_header() {
    println!("{}", "=== Summary ===".bold().white());
}

pub fn print_separator() {
    println!("  {}", "─".repeat(45).dimmed());
}

pub fn print_grand_total(label: &str, total: &str) {
    println!("  {:<30} {}", label.bold(), total.green().bold());
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Re-run without --dry-run to delete."
            .yellow()
            .bold()
    );
}

pub fn print_clean_complete(freed: &str, elapsed: &str) {
    println!(
        "{} {}",
        "Cleaned!".green().bold(),
        format!("{freed} freed in {elapsed}.").green()
    );
}

pub fn render_summary(summary: &RunSummary, verbose: bool) {
    println!();
    print_summary_header();

    for (browser, reason) in &summary.skipped_browsers {
        println!(
            "  {}  {}",
            browser.label().bold(),
            format!("skipped, {reason}").dimmed()
        );
    }

    for report in &summary.reports {
        println!(
            "  {}  {}",
            report.browser.label().bold(),
            utils::display_path(&report.root).dimmed()
        );
        for result in &report.profiles {
            let name = result
                .profile
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| result.profile.display().to_string());
            println!(
                "    {}  cleaned {}, skipped {}, preserved {}, failed {}  {}",
                name.bold(),
                result.cleaned_count(),
                result.skipped_count(),
                result.preserved_count(),
                result.failed_count(),
                utils::format_size(result.bytes_freed()).green()
            );
            if verbose {
                for outcome in &result.outcomes {
                    if let ItemOutcome::Cleaned { path, bytes_freed } = outcome {
                        println!(
                            "      {}  {}",
                            utils::display_path(path).dimmed(),
                            utils::format_size(*bytes_freed).yellow()
                        );
                    }
                }
            }
            for (path, error) in result.failures() {
                println!(
                    "      {} {} — {}",
                    "Failed".red().bold(),
                    utils::display_path(path).dimmed(),
                    error.red()
                );
            }
        }
        match &report.local_state {
            Some(ItemOutcome::Cleaned { .. }) => {
                println!("    {}", "Local State removed".red());
            }
            Some(ItemOutcome::Failed { path, error }) => {
                println!(
                    "    {} {} — {}",
                    "Failed".red().bold(),
                    utils::display_path(path).dimmed(),
                    error.red()
                );
            }
            _ => {}
        }
    }

    print_separator();
    let total = utils::format_size(summary.bytes_freed());
    if summary.dry_run {
        print_grand_total("Total reclaimable:", &total);
        println!();
        print_dry_run_footer();
    } else {
        print_grand_total("Total freed:", &total);
        println!();
        print_clean_complete(&total, &format!("{:.1?}", summary.elapsed));
    }
}
