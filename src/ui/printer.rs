use fltk::{printer::Printer, text::TextEditor};

use crate::app::error::{AppError, Result};

/// Send the editor widget to a system printer. FLTK pops its native
/// print dialog inside `begin_job`; a dismissed dialog and an
/// unreachable device both surface as the same error there.
pub fn print_text_editor(editor: &TextEditor) -> Result<()> {
    let mut printer = Printer::default();
    if printer.begin_job(1).is_err() {
        return Err(AppError::PrinterUnavailable);
    }
    printer.begin_page().ok();
    printer.print_widget(editor, 0, 0);
    printer.end_page().ok();
    printer.end_job();
    Ok(())
}
