pub(crate) mod collection;
pub(crate) mod detail;

use crate::api::ApiClient;
use leptos::prelude::*;

pub(crate) use collection::{CollectionDisplay, CollectionState, PAGE_SIZE};
pub(crate) use detail::DetailState;

/// App-wide context. Views keep their own data; only the configured client
/// is shared.
#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Monotonic request ids used to drop responses that were overtaken by a
/// newer request of the same kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest == id
    }

    /// Makes every id handed out so far stale.
    pub fn invalidate(&mut self) {
        self.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_seq_only_latest_is_current() {
        let mut seq = RequestSeq::default();
        let a = seq.next();
        let b = seq.next();
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn test_request_seq_invalidate() {
        let mut seq = RequestSeq::default();
        let a = seq.next();
        seq.invalidate();
        assert!(!seq.is_current(a));
    }
}
