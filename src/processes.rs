use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};
use sysinfo::{Pid, ProcessesToUpdate, Signal, System};

use crate::browsers::Browser;
use crate::output;

const TERM_TIMEOUT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A running process matched against a browser's aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessMatch {
    pub pid: u32,
    pub name: String,
}

/// Finds and stops browser processes. Chosen once at startup: precise
/// enumeration through the system process table where available, a blind
/// kill-by-name otherwise.
pub trait ProcessInspector {
    /// Running processes matching the browser's aliases. The blind fallback
    /// cannot see the process table and always reports none.
    fn find(&mut self, browser: Browser) -> Vec<ProcessMatch>;

    /// Stop matching processes, politely first, by force only when asked.
    /// In a dry run the candidates are reported and left alone.
    fn terminate(&mut self, browser: Browser, dry_run: bool, force: bool) -> Vec<ProcessMatch>;
}

/// Pick the inspector for this host.
pub fn default_inspector() -> Box<dyn ProcessInspector> {
    if sysinfo::IS_SUPPORTED_SYSTEM {
        Box::new(SysinfoInspector::new())
    } else {
        debug!("process enumeration unsupported on this platform, using blind kill fallback");
        Box::new(BlindKillInspector)
    }
}

/// Whether a process name matches any alias, case-insensitive substring.
fn matches_alias(process_name: &str, aliases: &[&str]) -> bool {
    let name = process_name.to_lowercase();
    aliases
        .iter()
        .any(|alias| name.contains(&alias.to_lowercase()))
}

pub struct SysinfoInspector {
    sys: System,
}

impl SysinfoInspector {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }

    fn wait_for_exit(&mut self, pid: Pid) -> bool {
        let deadline = Instant::now() + TERM_TIMEOUT;
        while Instant::now() < deadline {
            self.sys
                .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            if self.sys.process(pid).is_none() {
                return true;
            }
            thread::sleep(POLL_INTERVAL);
        }
        false
    }
}

impl ProcessInspector for SysinfoInspector {
    fn find(&mut self, browser: Browser) -> Vec<ProcessMatch> {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let own_pid = std::process::id();
        let aliases = browser.process_aliases();
        let mut matches = Vec::new();
        for (pid, process) in self.sys.processes() {
            // never target our own process
            if pid.as_u32() == own_pid {
                continue;
            }
            let name = process.name().to_string_lossy();
            if matches_alias(&name, aliases) {
                matches.push(ProcessMatch {
                    pid: pid.as_u32(),
                    name: name.into_owned(),
                });
            }
        }
        matches.sort_by_key(|m| m.pid);
        matches
    }

    fn terminate(&mut self, browser: Browser, dry_run: bool, force: bool) -> Vec<ProcessMatch> {
        let matches = self.find(browser);
        for m in &matches {
            if dry_run {
                output::print_would_terminate(&m.name, m.pid);
                continue;
            }
            let pid = Pid::from_u32(m.pid);
            if let Some(process) = self.sys.process(pid) {
                // graceful first; None means TERM does not exist here
                if process.kill_with(Signal::Term).is_none() {
                    process.kill();
                }
            }
            let mut gone = self.wait_for_exit(pid);
            if !gone && force {
                if let Some(process) = self.sys.process(pid) {
                    process.kill();
                }
                thread::sleep(POLL_INTERVAL);
                self.sys
                    .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
                gone = self.sys.process(pid).is_none();
            }
            if gone {
                output::print_terminated(&m.name, m.pid);
            } else {
                output::print_still_running(&m.name, m.pid);
                warn!("{} (PID {}) survived the termination request", m.name, m.pid);
            }
        }
        matches
    }
}

/// Last resort for hosts whose process table sysinfo cannot read. Fires the
/// platform kill command at every alias and cannot verify the result.
pub struct BlindKillInspector;

impl ProcessInspector for BlindKillInspector {
    fn find(&mut self, _browser: Browser) -> Vec<ProcessMatch> {
        Vec::new()
    }

    fn terminate(&mut self, browser: Browser, dry_run: bool, _force: bool) -> Vec<ProcessMatch> {
        let joined = browser.process_aliases().join(", ");
        if dry_run {
            output::print_would_blind_kill(&joined);
            return Vec::new();
        }
        output::print_blind_kill(&joined);
        for alias in browser.process_aliases() {
            blind_kill(alias);
        }
        Vec::new()
    }
}

#[cfg(windows)]
fn blind_kill(name: &str) {
    let _ = Command::new("taskkill")
        .args(["/F", "/IM", name])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
}

#[cfg(not(windows))]
fn blind_kill(name: &str) {
    let _ = Command::new("pkill")
        .args(["-f", name])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
}
