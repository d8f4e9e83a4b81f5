//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth and essay HTTP calls, `types` defines the shared
//! wire schema, role model, and error taxonomy.

pub mod api;
pub mod types;
