//! Client state modules.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with pure transition methods. Components
//! wrap them in `RwSignal`s; the async loaders here take any
//! [`crate::net::api::ResourceApi`] so the same flows run against HTTP and
//! against the in-memory store in tests.

pub mod dashboard;
pub mod notice;
pub mod pagination;
pub mod reports;
pub mod resource;
