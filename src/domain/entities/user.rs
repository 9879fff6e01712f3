use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read model for the externally-owned user account. Accounts are created,
/// authenticated and deleted outside this service; resumes only need the
/// owner id and the public display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

/// The slice of a user exposed next to a public resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub username: String,
    pub name: Option<String>,
}

impl From<UserRecord> for PublicUser {
    fn from(user: UserRecord) -> Self {
        PublicUser {
            username: user.username,
            name: user.name,
        }
    }
}
