//! Keystroke debouncing for the search box.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{search_all, SearchHit};
use crate::client::{CatalogClient, Fetch};

/// Quiescence window before a query fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Minimum trimmed query length; anything shorter never triggers a search.
pub const MIN_QUERY_LEN: usize = 2;

/// Debounced driver for [`search_all`].
///
/// Each [`submit`](Self::submit) replaces the armed timer: the previous
/// pending task is aborted, so a burst of keystrokes issues at most one
/// request set per pause, and a superseded submission never delivers late
/// results. Ranked hits arrive on the channel handed to [`new`](Self::new);
/// dropping the debouncer cancels whatever is pending.
pub struct SearchDebouncer<F: Fetch + 'static> {
    client: Arc<CatalogClient<F>>,
    results: mpsc::UnboundedSender<Vec<SearchHit>>,
    pending: Option<JoinHandle<()>>,
}

impl<F: Fetch + 'static> SearchDebouncer<F> {
    pub fn new(
        client: Arc<CatalogClient<F>>,
        results: mpsc::UnboundedSender<Vec<SearchHit>>,
    ) -> Self {
        Self {
            client,
            results,
            pending: None,
        }
    }

    /// Record a keystroke's worth of query text.
    ///
    /// Below [`MIN_QUERY_LEN`] the pending timer is cancelled and an empty
    /// hit list is delivered immediately (the UI clears its dropdown);
    /// otherwise a fresh [`DEBOUNCE_DELAY`] timer is armed.
    pub fn submit(&mut self, query: &str) {
        self.cancel_pending();

        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            let _ = self.results.send(Vec::new());
            return;
        }

        let query = trimmed.to_string();
        let client = Arc::clone(&self.client);
        let results = self.results.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE_DELAY).await;
            let hits = search_all(&client, &query).await;
            let _ = results.send(hits);
        }));
    }

    /// Cancel the armed timer (and any in-flight fan-out it started).
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<F: Fetch + 'static> Drop for SearchDebouncer<F> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
