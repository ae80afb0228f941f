//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep parsing, formatting and browser-storage concerns out
//! of components so they can be tested natively.

pub mod form;
pub mod format;
pub mod lookup;
pub mod prefs;
