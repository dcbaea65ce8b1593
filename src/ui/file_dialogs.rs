use fltk::dialog;

/// Ask the user for a file to open. `None` means the dialog was
/// cancelled, which callers treat as a no-op.
pub fn native_open_dialog(dir: Option<&str>) -> Option<String> {
    dialog::file_chooser("Open File", "*", dir.unwrap_or("."), false)
}

/// Ask the user for a destination path. `None` means cancelled.
pub fn native_save_dialog(dir: Option<&str>) -> Option<String> {
    dialog::file_chooser("Save As", "*", dir.unwrap_or("."), false)
}
