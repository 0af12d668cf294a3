use thiserror::Error;

use greenline_core::RecordId;

/// Rejected session transitions and unreadable persisted sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("only admins can impersonate (user {0} is not an admin)")]
    NotAdmin(RecordId),

    #[error("session is already impersonating user {0}")]
    AlreadyImpersonating(RecordId),

    #[error("session is not impersonating anyone")]
    NotImpersonating,

    #[error("invalid impersonation target: {0}")]
    InvalidTarget(String),

    #[error("no active session")]
    NoSession,

    #[error("persisted session is corrupt: {0}")]
    Corrupt(String),
}
