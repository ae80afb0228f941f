//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the `/api/*` endpoints behind the [`api::ResourceApi`] trait
//! so the page controller can run against HTTP in the browser and against
//! an in-memory store in tests.

pub mod api;
#[cfg(test)]
pub(crate) mod memory;
