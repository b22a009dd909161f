use crate::shared::infrastructure::navigation::{Navigator, Route};

/// Navigator for the HTTP shell: the client performs the redirect, we only trace it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

#[async_trait::async_trait]
impl Navigator for TracingNavigator {
    async fn navigate(&self, route: Route) {
        tracing::info!(route = %route, "navigation requested");
    }
}
