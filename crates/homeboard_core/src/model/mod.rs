//! Domain model for the dashboard sections.
//!
//! # Responsibility
//! - Define the canonical records mirrored from the hosted sync service.
//! - Keep field names and wire shapes aligned with the external schema.
//!
//! # Invariants
//! - Every record carries a stable `Uuid` identity assigned at creation.
//! - `created_at` is set once and never rewritten by core code.

pub mod chore;
pub mod note;
pub mod profile;
pub mod quick_list;
pub mod shopping;
