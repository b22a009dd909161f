use crate::modules::events::core::event::Event;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What is stored per (user, event).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    #[default]
    None,
    Registered,
    Organizing,
}

/// What callers see. `Past` is never stored; it is derived from the event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationState {
    None,
    Registered,
    Organizing,
    Past,
}

impl RegistrationState {
    pub fn derive(membership: Membership, event: Option<&Event>, today: NaiveDate) -> Self {
        let Some(event) = event else {
            return RegistrationState::None;
        };
        match membership {
            Membership::None => RegistrationState::None,
            _ if event.has_ended(today) => RegistrationState::Past,
            Membership::Registered => RegistrationState::Registered,
            Membership::Organizing => RegistrationState::Organizing,
        }
    }
}
