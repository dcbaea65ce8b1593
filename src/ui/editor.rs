use fltk::{
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::error::Result;
use crate::app::surface::TextSurface;

use super::printer;

/// The FLTK-backed text surface: the editor widget plus the buffer it
/// displays. Edit commands map onto the editor's key functions so they
/// share the widget's own clipboard handling and undo history.
pub struct EditorSurface {
    editor: TextEditor,
    buffer: TextBuffer,
}

impl EditorSurface {
    pub fn new(editor: TextEditor) -> Self {
        let buffer = editor.buffer().expect("editor has no buffer");
        Self { editor, buffer }
    }
}

impl TextSurface for EditorSurface {
    fn text(&self) -> String {
        buffer_text(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    fn copy(&mut self) {
        self.editor.copy();
    }

    fn cut(&mut self) {
        self.editor.cut();
    }

    fn paste(&mut self) {
        self.editor.paste();
    }

    fn undo(&mut self) {
        self.editor.undo();
    }

    fn redo(&mut self) {
        self.editor.redo();
    }

    fn print(&mut self) -> Result<()> {
        printer::print_text_editor(&self.editor)
    }
}

/// Read the buffer through the C API directly. fltk-rs's
/// `TextBuffer::text()` copies the malloc'd C string into a `String`
/// but never frees the original allocation, leaking the full buffer
/// size on every call.
fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: the inner pointer is valid for as long as `buf` lives,
    // Fl_Text_Buffer_text returns a malloc'd NUL-terminated string (or
    // null when empty), and we free that allocation after copying it.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
