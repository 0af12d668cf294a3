//! Session context and the impersonation transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use greenline_core::SessionId;

use crate::error::SessionError;
use crate::identity::{Identity, UserRole};

/// The admin behind an impersonated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impersonation {
    pub admin: Identity,
    /// Session to return to when impersonation ends.
    pub admin_session_id: SessionId,
    pub started_at: DateTime<Utc>,
}

/// Signed-in session.
///
/// # Invariants
/// - An impersonated session is driven by an admin and acts as a rep.
/// - The admin and the impersonated user are different users.
/// - Impersonation does not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSession")]
pub struct Session {
    session_id: SessionId,
    identity: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    impersonation: Option<Impersonation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    session_id: SessionId,
    identity: Identity,
    #[serde(default)]
    impersonation: Option<Impersonation>,
}

impl TryFrom<RawSession> for Session {
    type Error = SessionError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        if let Some(imp) = &raw.impersonation {
            validate_pair(&imp.admin, &raw.identity)
                .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        }
        Ok(Self {
            session_id: raw.session_id,
            identity: raw.identity,
            impersonation: raw.impersonation,
        })
    }
}

fn validate_pair(admin: &Identity, target: &Identity) -> Result<(), SessionError> {
    if !admin.is_admin() {
        return Err(SessionError::NotAdmin(admin.user_id.clone()));
    }
    if admin.user_id == target.user_id {
        return Err(SessionError::InvalidTarget("cannot impersonate yourself".to_string()));
    }
    if target.role != UserRole::Rep {
        return Err(SessionError::InvalidTarget(format!(
            "user {} is {}, only reps can be impersonated",
            target.user_id, target.role
        )));
    }
    Ok(())
}

impl Session {
    /// Fresh session for a user who just signed in.
    pub fn sign_in(identity: Identity) -> Self {
        Self::with_id(SessionId::new(), identity)
    }

    pub fn with_id(session_id: SessionId, identity: Identity) -> Self {
        Self {
            session_id,
            identity,
            impersonation: None,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The identity requests are made as (the rep while impersonating).
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The person actually at the keyboard.
    pub fn actor(&self) -> &Identity {
        self.impersonation
            .as_ref()
            .map_or(&self.identity, |imp| &imp.admin)
    }

    pub fn impersonation(&self) -> Option<&Impersonation> {
        self.impersonation.as_ref()
    }

    pub fn is_impersonating(&self) -> bool {
        self.impersonation.is_some()
    }

    /// Start acting as `target`. The current session must be a plain admin session.
    pub fn begin_impersonation(
        &self,
        target: Identity,
        now: DateTime<Utc>,
    ) -> Result<Session, SessionError> {
        if self.impersonation.is_some() {
            return Err(SessionError::AlreadyImpersonating(self.identity.user_id.clone()));
        }
        validate_pair(&self.identity, &target)?;

        Ok(Session {
            session_id: SessionId::new(),
            identity: target,
            impersonation: Some(Impersonation {
                admin: self.identity.clone(),
                admin_session_id: self.session_id,
                started_at: now,
            }),
        })
    }

    /// Return to the admin's own session.
    pub fn end_impersonation(&self) -> Result<Session, SessionError> {
        let imp = self
            .impersonation
            .as_ref()
            .ok_or(SessionError::NotImpersonating)?;

        Ok(Session::with_id(imp.admin_session_id, imp.admin.clone()))
    }

    /// Encode for client-side persistence.
    pub fn to_json(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|e| SessionError::Corrupt(e.to_string()))
    }

    /// Decode persisted state, rejecting anything that breaks the invariants.
    pub fn from_json(json: &str) -> Result<Session, SessionError> {
        serde_json::from_str(json).map_err(|e| SessionError::Corrupt(e.to_string()))
    }
}
