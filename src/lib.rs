pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod render;
pub mod state;

use std::sync::Arc;
use analyzer::Analyzer;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}
