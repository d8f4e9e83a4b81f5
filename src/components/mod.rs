//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route_guard` wraps protected page content and enforces the
//! authentication and role checks before anything renders.

pub mod route_guard;
