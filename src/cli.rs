use clap::Parser;

use crate::browsers::Browser;
use crate::plan::CleanOptions;

#[derive(Parser)]
#[command(
    name = "chromium-sweep",
    about = "Clean browsing traces from Chrome and Edge profiles",
    version
)]
pub struct Cli {
    /// Only clean Google Chrome
    #[arg(long)]
    pub chrome: bool,

    /// Only clean Microsoft Edge
    #[arg(long)]
    pub edge: bool,

    /// Report what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite file contents with random bytes before deletion (slower)
    #[arg(long)]
    pub shred: bool,

    /// Also clear saved passwords (Login Data)
    #[arg(long)]
    pub remove_passwords: bool,

    /// Also remove the root-level Local State file (affects sign-in state)
    #[arg(long)]
    pub remove_local_state: bool,

    /// Do not try to close running browsers first
    #[arg(long)]
    pub no_kill: bool,

    /// Force-kill browser processes that ignore the polite request
    #[arg(long)]
    pub force_kill: bool,

    /// List every cleaned path in the summary and enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Browsers chosen on the command line. Neither flag means both.
    pub fn selected_browsers(&self) -> Vec<Browser> {
        match (self.chrome, self.edge) {
            (true, false) => vec![Browser::Chrome],
            (false, true) => vec![Browser::Edge],
            _ => Browser::ALL.to_vec(),
        }
    }

    pub fn options(&self) -> CleanOptions {
        CleanOptions {
            dry_run: self.dry_run,
            shred: self.shred,
            remove_passwords: self.remove_passwords,
            remove_local_state: self.remove_local_state,
            no_kill: self.no_kill,
            force_kill: self.force_kill,
            verbose: self.verbose,
        }
    }
}
