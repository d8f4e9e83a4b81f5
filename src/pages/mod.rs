//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, API calls,
//! redirects) and keeps rendering thin. Role-restricted pages wrap their
//! content in `RouteGuard`.

pub mod login;
pub mod recover;
pub mod register;
pub mod student_home;
pub mod submit_essay;
pub mod teacher_home;
