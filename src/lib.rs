//! Jotter - a small, no-frills plain-text notepad.
//!
//! The crate splits into an `app` layer holding the document session
//! and the seams it talks through, and a `ui` layer binding that
//! session to FLTK widgets. The binary in `main.rs` wires the two
//! together over a message channel.

pub mod app;
pub mod ui;
