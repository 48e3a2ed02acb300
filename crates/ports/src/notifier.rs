// crates/ports/src/notifier.rs
/// Receives user-facing diagnostics about file-level problems.
pub trait Notifier {
    fn warn(&self, message: &str);
}
