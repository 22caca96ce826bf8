//! Use-case services.
//!
//! # Responsibility
//! - Provide the entry points presentation code calls per dashboard
//!   section.
//! - Own input normalization and defaulting; delegate persistence to the
//!   store contracts.
//!
//! # Invariants
//! - Services never bypass store validation.
//! - Services stay generic over the store traits and hold no transport
//!   state of their own.

pub mod chore_service;
pub mod note_service;
pub mod quick_list_service;
pub mod shopping_service;
