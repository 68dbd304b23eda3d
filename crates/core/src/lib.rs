//! # OfficeHours Core
//!
//! Shared domain types for the OfficeHours appointment-scheduling service:
//! users and roles, availability slots, appointments, and the error type
//! every other crate maps into HTTP responses.

pub mod errors;
pub mod models;
