use super::error::Result;

/// The editable text widget the application drives, as an interface.
///
/// The production implementation wraps an FLTK `TextEditor` plus its
/// `TextBuffer` (see `ui::editor`); tests substitute an in-memory stub.
/// The widget owns the text content and its edit history, so clipboard
/// and undo commands are pure delegations from the session's point of
/// view.
pub trait TextSurface {
    /// Current content of the whole buffer.
    fn text(&self) -> String;

    /// Replace the whole buffer.
    fn set_text(&mut self, text: &str);

    fn copy(&mut self);
    fn cut(&mut self);
    fn paste(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);

    /// Run the system print dialog and render the current content to
    /// the chosen printer. Fails with `AppError::PrinterUnavailable`
    /// when the dialog is rejected or no printer can be reached.
    fn print(&mut self) -> Result<()>;
}
