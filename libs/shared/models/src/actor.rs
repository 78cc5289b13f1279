use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The actor the surrounding session context hands to the engine.
/// Role decides whose calendar a view is allowed to scope to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub email: Option<String>,
    pub role: ActorRole,
    pub metadata: Option<serde_json::Value>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Client,
    Practitioner,
    Admin,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == ActorRole::Admin
    }
}
