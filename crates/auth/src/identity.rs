use serde::{Deserialize, Serialize};

use greenline_core::{Entity, RecordId};

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Rep,
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserRole::Admin => f.write_str("admin"),
            UserRole::Rep => f.write_str("rep"),
        }
    }
}

/// A user as returned by the remote API's sign-in and rep endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "_id")]
    pub user_id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
}

impl Identity {
    pub fn new(user_id: RecordId, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: String::new(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl Entity for Identity {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.user_id
    }
}
