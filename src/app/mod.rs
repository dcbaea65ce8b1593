//! Application layer - the document session core and its seams.
//!
//! # Structure
//!
//! - `session` - the document session (which file backs the editor)
//! - `storage` - whole-file text reads and writes
//! - `surface` / `notify` - interfaces over the toolkit widget and alerts
//! - `messages` - commands sent through the FLTK channel
//! - `state` - application object coordinating session, surface, window
//! - `error` - the user-visible error taxonomy

pub mod error;
pub mod messages;
pub mod notify;
pub mod session;
pub mod state;
pub mod storage;
pub mod surface;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use notify::Notifier;
pub use session::DocumentSession;
pub use state::AppState;
pub use surface::TextSurface;
