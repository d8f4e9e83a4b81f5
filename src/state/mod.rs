//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the persisted login state; `auth` is the reactive context
//! struct pages read for identity-dependent rendering.

pub mod auth;
pub mod session;
