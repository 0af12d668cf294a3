//! `greenline-core` — shared domain building blocks.
//!
//! Pure domain primitives only: identifiers, the error model and marker traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{RecordId, SessionId};
pub use value_object::ValueObject;
