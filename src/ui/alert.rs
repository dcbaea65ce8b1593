use fltk::dialog;

use crate::app::notify::Notifier;

/// Error reporting through FLTK's stock alert box.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}
