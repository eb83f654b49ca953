//! The fetch/normalize pipeline and the state it owns.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::fetch::{canonicalize_url, fetch_site_document};
use crate::normalize::normalize;
use crate::state::{DisplayState, Snapshot};

/// Owns the component's display state and runs analyses against it.
///
/// Each analysis carries a generation number so that overlapping requests
/// resolve in favor of the most recently issued one; a response arriving for
/// a superseded request is dropped instead of overwriting newer state.
pub struct Analyzer {
    config: Arc<Config>,
    snapshot: Mutex<Snapshot>,
    generation: AtomicU64,
}

impl Analyzer {
    pub fn new(config: Arc<Config>) -> Self {
        Analyzer {
            config,
            snapshot: Mutex::new(Snapshot::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Current URL + display state, cloned out from under the lock.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.lock().unwrap().clone()
    }

    /// Run one analysis: canonicalize, fetch, normalize, publish.
    ///
    /// Network, HTTP-status, and parse failures all collapse to the empty
    /// state; the error only reaches the log. Returns the state as it stands
    /// after publishing, which is the prior state if this request was
    /// superseded while in flight.
    pub async fn analyze(&self, input_url: &str) -> Snapshot {
        let generation = self.next_generation();
        let canonical = canonicalize_url(input_url);
        info!("Fetching site document from {}", canonical);

        let next = match fetch_site_document(&canonical, self.config.fetch_timeout).await {
            Ok(document) => {
                let (summary, items) = normalize(&document, &canonical);
                info!("Analyzed {}: {} item(s)", canonical, items.len());
                DisplayState::populated(summary, items)
            }
            Err(err) => {
                error!("Analysis of {} failed, clearing state: {}", canonical, err);
                DisplayState::Empty
            }
        };

        self.publish(generation, input_url, next)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Replace the snapshot wholesale, unless a newer analysis has been
    /// issued since this one started.
    fn publish(&self, generation: u64, url: &str, next: DisplayState) -> Snapshot {
        let mut snapshot = self.snapshot.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) == generation {
            *snapshot = Snapshot {
                url: url.to_string(),
                display: next,
            };
        } else {
            debug!("Dropping stale analysis result (generation {})", generation);
        }
        snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{DisplayItem, SiteSummary};
    use std::time::Duration;

    fn analyzer() -> Analyzer {
        let config = Config {
            server_addr: "127.0.0.1:0".parse().unwrap(),
            fetch_timeout: Duration::from_secs(1),
        };
        Analyzer::new(Arc::new(config))
    }

    fn populated() -> DisplayState {
        DisplayState::populated(
            SiteSummary {
                name: "Demo Site".to_string(),
                description: "A demo site".to_string(),
                theme: "Clean Theme".to_string(),
                created: "N/A".to_string(),
                last_updated: "N/A".to_string(),
                logo: String::new(),
            },
            vec![DisplayItem {
                title: "First Page".to_string(),
                description: "Intro".to_string(),
                last_updated: "N/A".to_string(),
                link: "https://x.com/page1/index.html".to_string(),
                source: "https://x.com/page1/index.html".to_string(),
                image: "https://x.com/a.jpg".to_string(),
            }],
        )
    }

    #[test]
    fn latest_generation_publishes() {
        let analyzer = analyzer();
        let generation = analyzer.next_generation();

        let snapshot = analyzer.publish(generation, "https://x.com", populated());
        assert!(snapshot.display.is_populated());
        assert_eq!(snapshot.url, "https://x.com");
    }

    #[test]
    fn stale_generation_is_dropped() {
        let analyzer = analyzer();
        let stale = analyzer.next_generation();
        let latest = analyzer.next_generation();

        // The superseded request resolves first with a populated state, then
        // the latest one resolves with a failure. Only the latest applies.
        let snapshot = analyzer.publish(stale, "https://old.example", populated());
        assert_eq!(snapshot, Snapshot::default());

        let snapshot = analyzer.publish(latest, "https://new.example", DisplayState::Empty);
        assert_eq!(snapshot.url, "https://new.example");
        assert!(!snapshot.display.is_populated());
    }

    #[test]
    fn failure_resets_a_populated_state() {
        let analyzer = analyzer();
        let first = analyzer.next_generation();
        analyzer.publish(first, "https://x.com", populated());

        let second = analyzer.next_generation();
        let snapshot = analyzer.publish(second, "https://x.com", DisplayState::Empty);
        assert_eq!(snapshot.display, DisplayState::Empty);
        assert!(snapshot.display.items().is_empty());
    }
}
