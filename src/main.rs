#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use topup_report::{args::Args, bootstrap, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let outcome = bootstrap::run(&args);
    log::debug!("run finished: {outcome:?}");
    ExitCode::SUCCESS
}
