use platen::RenderDelegate;
use std::sync::Arc;

/// Shared application state accessible to all handlers.
///
/// The delegate is the only long-lived object; everything a render request
/// touches beyond it is call-local, so handlers need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub delegate: Arc<dyn RenderDelegate>,
}

impl AppState {
    pub fn new(delegate: Arc<dyn RenderDelegate>) -> Self {
        Self { delegate }
    }
}
