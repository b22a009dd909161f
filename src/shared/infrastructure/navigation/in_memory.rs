use crate::shared::infrastructure::navigation::{Navigator, Route};
use tokio::sync::Mutex;

/// Keeps every requested route so tests can assert where a flow ended up.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn visited(&self) -> Vec<Route> {
        self.routes.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, route: Route) {
        self.routes.lock().await.push(route);
    }
}
