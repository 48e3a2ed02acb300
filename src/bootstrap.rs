use topup_report_domain::config::ReportPaths;
use topup_report_infra::{ConsoleNotifier, FileReportSink, JsonFileLoader, StdoutReportSink};
use topup_report_ports::{Notifier, ReportSink};
use topup_report_usecase::{GenerateReport, RunOutcome};

use crate::args::Args;

pub fn run(args: &Args) -> RunOutcome {
    let paths = args.paths();
    if args.stdout {
        run_with(&paths, &StdoutReportSink, &ConsoleNotifier)
    } else {
        run_paths(&paths)
    }
}

/// Run the pipeline against `paths`, reading inputs from disk.
pub fn run_with(paths: &ReportPaths, sink: &dyn ReportSink, notifier: &dyn Notifier) -> RunOutcome {
    let loader = JsonFileLoader;
    GenerateReport::new(&loader, sink, notifier).run(paths)
}

/// Default wiring: file inputs, file output, stderr diagnostics.
pub fn run_paths(paths: &ReportPaths) -> RunOutcome {
    run_with(paths, &FileReportSink::new(&paths.output), &ConsoleNotifier)
}
