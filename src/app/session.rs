use super::error::AppError;
use super::notify::Notifier;
use super::storage;
use super::surface::TextSurface;

/// Window title shown while no file backs the document.
const UNTITLED_TITLE: &str = "Untitled - Jotter";

/// Tracks which file (if any) backs the text currently on screen and
/// performs the file-affecting commands against it.
///
/// The session never caches document content: the `TextSurface` owns
/// the buffer and the session reads it only at save time. Failed
/// commands are reported through the `Notifier` and leave the session,
/// the surface, and the file on disk exactly as they were.
pub struct DocumentSession {
    current_path: Option<String>,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self { current_path: None }
    }

    /// Path of the backing file, or `None` while the document is untitled.
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn is_untitled(&self) -> bool {
        self.current_path.is_none()
    }

    /// Window title for the current state: the backing path once a
    /// file is open, the untitled placeholder otherwise.
    pub fn window_title(&self) -> String {
        match &self.current_path {
            Some(path) => path.clone(),
            None => UNTITLED_TITLE.to_string(),
        }
    }

    /// Start over with an empty, untitled document.
    ///
    /// Whatever was on the surface is discarded without prompting;
    /// there is no dirty tracking anywhere in the application.
    pub fn new_document(&mut self, surface: &mut dyn TextSurface) {
        surface.set_text("");
        self.current_path = None;
    }

    /// Load `path` into the surface and make it the backing file.
    pub fn open(
        &mut self,
        path: String,
        surface: &mut dyn TextSurface,
        notifier: &mut dyn Notifier,
    ) {
        match storage::read_document(&path) {
            Ok(content) => {
                surface.set_text(&content);
                self.current_path = Some(path);
            }
            Err(e) => notifier.notify_error(&e.to_string()),
        }
    }

    /// Write the surface content to the backing file.
    ///
    /// Calling this while untitled reports the untitled diagnostic and
    /// writes nothing; the command layer reroutes that case to Save As
    /// before it gets here.
    pub fn save(&self, surface: &dyn TextSurface, notifier: &mut dyn Notifier) {
        let path = match self.current_path.as_deref() {
            Some(path) => path,
            None => {
                notifier.notify_error(&AppError::Untitled.to_string());
                return;
            }
        };
        if let Err(e) = storage::write_document(path, &surface.text()) {
            notifier.notify_error(&e.to_string());
        }
    }

    /// Write the surface content to `path` and adopt it as the backing
    /// file. The path is adopted only after the write succeeds, so a
    /// failed Save As leaves the previous association intact.
    pub fn save_as(
        &mut self,
        path: String,
        surface: &dyn TextSurface,
        notifier: &mut dyn Notifier,
    ) {
        match storage::write_document(&path, &surface.text()) {
            Ok(()) => self.current_path = Some(path),
            Err(e) => notifier.notify_error(&e.to_string()),
        }
    }

    /// Print the document via the widget's own print capability. Page
    /// setup and rendering belong entirely to the surface.
    pub fn print(&self, surface: &mut dyn TextSurface, notifier: &mut dyn Notifier) {
        if let Err(e) = surface.print() {
            notifier.notify_error(&e.to_string());
        }
    }
}
