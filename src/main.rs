use std::process::ExitCode;

use clap::Parser;
use log::debug;

use chromium_sweep::cli::Cli;
use chromium_sweep::{output, runner};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let browsers = cli.selected_browsers();
    let options = cli.options();

    output::print_banner();
    if options.remove_passwords {
        output::print_warning(
            "--remove-passwords is set, saved passwords will be permanently deleted",
        );
    }
    if options.dry_run {
        output::print_info("dry run, nothing will be deleted");
    }

    let summary = runner::run(&browsers, &options);
    output::render_summary(&summary, options.verbose);

    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).is_test(false).try_init();
    debug!("logger initialized with level: {}", default_level);
}
