use topup_report_ports::Notifier;

/// Writes diagnostics to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&self, message: &str) {
        eprintln!("[warn] {message}");
    }
}
