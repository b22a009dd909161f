use crate::shared::core::primitives::UserId;
use serde::Serialize;
use uuid::Uuid;

/// Simulated session handed out by log in and sign up. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub remember_me: bool,
}

impl Session {
    pub fn open(email: &str, remember_me: bool) -> Self {
        Self {
            session_id: Uuid::now_v7(),
            user_id: user_id_for(email),
            remember_me,
        }
    }
}

/// Users are identified by their trimmed, lowercased email address.
pub fn user_id_for(email: &str) -> UserId {
    UserId::new(email.trim().to_lowercase())
}
