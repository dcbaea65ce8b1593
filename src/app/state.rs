use std::path::Path;

use fltk::{prelude::*, window::Window};

use super::session::DocumentSession;
use super::surface::TextSurface;
use crate::ui::alert::AlertNotifier;
use crate::ui::editor::EditorSurface;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;

/// Owns the one document session, the one text surface, and the window
/// they live in. Every menu command lands here: the `file_*` methods
/// run the relevant dialog and delegate to the session, the `edit_*`
/// methods route straight to the widget.
pub struct AppState {
    pub session: DocumentSession,
    pub surface: EditorSurface,
    pub notifier: AlertNotifier,
    pub window: Window,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(widgets: MainWidgets) -> Self {
        Self {
            session: DocumentSession::new(),
            surface: EditorSurface::new(widgets.text_editor),
            notifier: AlertNotifier,
            window: widgets.wind,
            last_open_directory: None,
        }
    }

    /// Keep the window label in step with the session. Safe to call
    /// after failed commands too: the title depends only on session
    /// state, which failures never change.
    fn sync_window_title(&mut self) {
        self.window.set_label(&self.session.window_title());
    }

    /// Remember the parent directory for future open/save dialogs.
    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = Path::new(path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    // --- File commands ---

    pub fn file_new(&mut self) {
        self.session.new_document(&mut self.surface);
        self.sync_window_title();
    }

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(path);
        }
    }

    /// Open a specific path, bypassing the dialog.
    pub fn open_file(&mut self, path: String) {
        self.remember_directory(&path);
        self.session
            .open(path, &mut self.surface, &mut self.notifier);
        self.sync_window_title();
    }

    pub fn file_save(&mut self) {
        if self.session.is_untitled() {
            self.file_save_as();
        } else {
            self.session.save(&self.surface, &mut self.notifier);
        }
    }

    pub fn file_save_as(&mut self) {
        if let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) {
            self.remember_directory(&path);
            self.session
                .save_as(path, &self.surface, &mut self.notifier);
            self.sync_window_title();
        }
    }

    pub fn file_print(&mut self) {
        self.session.print(&mut self.surface, &mut self.notifier);
    }

    // --- Edit commands: direct delegation to the widget ---

    pub fn edit_undo(&mut self) {
        self.surface.undo();
    }

    pub fn edit_redo(&mut self) {
        self.surface.redo();
    }

    pub fn edit_cut(&mut self) {
        self.surface.cut();
    }

    pub fn edit_copy(&mut self) {
        self.surface.copy();
    }

    pub fn edit_paste(&mut self) {
        self.surface.paste();
    }
}
