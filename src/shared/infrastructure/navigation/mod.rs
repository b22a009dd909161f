use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target screen the rendering layer should move to after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn dashboard() -> Self {
        Self::new("/dashboard")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collaborator that owns the visible screen. The core only tells it where to go.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, route: Route);
}

pub mod in_memory;
pub mod logging;
