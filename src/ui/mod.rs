//! UI layer - FLTK widgets and the adapters that satisfy the
//! application seams.
//!
//! # Structure
//!
//! - `main_window.rs` - Window, layout and editor construction
//! - `menu.rs` - Menu bar entries and their shortcuts
//! - `editor.rs` - `TextSurface` adapter over the editor widget
//! - `alert.rs` - `Notifier` adapter over FLTK's alert box
//! - `file_dialogs.rs` - Native open/save dialogs
//! - `printer.rs` - Printing through the system print dialog

pub mod alert;
pub mod editor;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod printer;
