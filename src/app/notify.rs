/// Reports user-facing errors from file and print commands.
///
/// The production implementation pops a modal alert (see `ui::alert`);
/// tests substitute a stub that records the messages instead. Every
/// diagnostic goes through here synchronously, and a notified command
/// has already aborted without mutating any state.
pub trait Notifier {
    fn notify_error(&mut self, message: &str);
}
