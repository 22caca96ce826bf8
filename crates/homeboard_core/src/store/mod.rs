//! Data-access seam over the hosted realtime sync service.
//!
//! # Responsibility
//! - Define per-entity store contracts consumed by the use-case services.
//! - Keep the sync transport injectable: callers receive snapshots and
//!   cancellation handles, never a process-wide client.
//!
//! # Invariants
//! - Query results have a deterministic order (documented per trait).
//! - Writes are committed atomically; subscribers observe whole
//!   replacement snapshots, never partial mutations.

use crate::model::chore::ChoreValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod chore_store;
pub mod list_store;
pub mod memory;
pub mod note_store;
pub mod profile_store;
pub mod shopping_store;
pub mod subscription;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error shared by every entity contract.
#[derive(Debug)]
pub enum StoreError {
    /// Target record does not exist.
    NotFound { entity: &'static str, id: Uuid },
    /// A record with this id already exists.
    DuplicateId { entity: &'static str, id: Uuid },
    /// Write rejected by record-level validation.
    Validation(ChoreValidationError),
    /// Failure reported by the backing service.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::DuplicateId { entity, id } => {
                write!(f, "{entity} id already exists: {id}")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "store backend error: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ChoreValidationError> for StoreError {
    fn from(value: ChoreValidationError) -> Self {
        Self::Validation(value)
    }
}
