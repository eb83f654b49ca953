use crate::normalize::{DisplayItem, SiteSummary};

/// What the component currently shows.
///
/// Transitions replace the whole value; the summary and the item list can
/// never be observed from different fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    /// Initial state, and the state after any failed analysis.
    #[default]
    Empty,
    Populated {
        summary: SiteSummary,
        items: Vec<DisplayItem>,
    },
}

impl DisplayState {
    pub fn populated(summary: SiteSummary, items: Vec<DisplayItem>) -> Self {
        DisplayState::Populated { summary, items }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, DisplayState::Populated { .. })
    }

    pub fn summary(&self) -> Option<&SiteSummary> {
        match self {
            DisplayState::Empty => None,
            DisplayState::Populated { summary, .. } => Some(summary),
        }
    }

    pub fn items(&self) -> &[DisplayItem] {
        match self {
            DisplayState::Empty => &[],
            DisplayState::Populated { items, .. } => items,
        }
    }
}

/// The analyzer's observable properties: the last submitted URL and the
/// display state it produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub url: String,
    pub display: DisplayState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{NO_DESCRIPTION, UNKNOWN_SITE};

    fn summary() -> SiteSummary {
        SiteSummary {
            name: UNKNOWN_SITE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            theme: "Default Theme".to_string(),
            created: "N/A".to_string(),
            last_updated: "N/A".to_string(),
            logo: String::new(),
        }
    }

    #[test]
    fn initial_state_is_empty() {
        let state = DisplayState::default();
        assert!(!state.is_populated());
        assert!(state.summary().is_none());
        assert!(state.items().is_empty());
    }

    #[test]
    fn populated_state_exposes_both_halves() {
        let state = DisplayState::populated(summary(), Vec::new());
        assert!(state.is_populated());
        assert!(state.summary().is_some());
    }
}
