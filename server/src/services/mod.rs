//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence and storage concerns so route handlers
//! can stay focused on protocol translation.

pub mod repo;
pub mod tables;
pub mod uploads;
