pub mod browsers;
pub mod cli;
pub mod error;
pub mod executor;
pub mod output;
pub mod plan;
pub mod processes;
pub mod profiles;
pub mod report;
pub mod runner;
pub mod shredder;
pub mod utils;

pub use browsers::Browser;
pub use error::{Result, SweepError};
pub use plan::{CleanItem, CleanOptions};
pub use report::{BrowserReport, ItemOutcome, ProfileResult, RunSummary};
pub use runner::run;
