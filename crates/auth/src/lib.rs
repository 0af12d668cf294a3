//! `greenline-auth` — session context and admin impersonation.
//!
//! An admin can temporarily act as a sales rep. The swap is an explicit,
//! validated transition on a typed [`Session`] rather than free-form state in
//! client storage. This crate is decoupled from HTTP and from the concrete
//! storage backend.

pub mod error;
pub mod identity;
pub mod service;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use identity::{Identity, UserRole};
pub use service::SessionService;
pub use session::{Impersonation, Session};
pub use store::{InMemorySessionStore, SessionStore};
