use serde::{Deserialize, Serialize};

use crate::normalize::{DisplayItem, SiteSummary};
use crate::state::{DisplayState, Snapshot};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// The component's observable properties: current URL, current summary (or
/// absent), current items (possibly empty).
#[derive(Serialize)]
pub struct StateResponse {
    pub url: String,
    pub summary: Option<SiteSummary>,
    pub items: Vec<DisplayItem>,
}

impl From<Snapshot> for StateResponse {
    fn from(snapshot: Snapshot) -> Self {
        let Snapshot { url, display } = snapshot;
        let (summary, items) = match display {
            DisplayState::Empty => (None, Vec::new()),
            DisplayState::Populated { summary, items } => (Some(summary), items),
        };
        StateResponse { url, summary, items }
    }
}
