use std::collections::HashMap;
use std::future::Future;

use dioxus::prelude::*;
use shared_types::{CachePolicy, Freshness};

/// One cached server payload, stored as the raw JSON string the server
/// function returned.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheEntry {
    pub fetched_at: i64,
    pub payload: String,
}

/// Client-side cache for dashboard payloads, keyed by query name.
///
/// Fresh entries are served without touching the network. Stale entries
/// trigger a refetch with bounded retries; if every attempt fails, a stale
/// entry still within the retention window is served instead of an error.
/// Entries past retention are evicted.
#[derive(Clone, Copy)]
pub struct QueryClient {
    pub policy: CachePolicy,
    entries: Signal<HashMap<String, CacheEntry>>,
}

impl QueryClient {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: Signal::new(HashMap::new()),
        }
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn age(now: i64, fetched_at: i64) -> u64 {
        (now - fetched_at).max(0) as u64
    }

    fn evict_expired(&mut self, now: i64) {
        let policy = self.policy;
        self.entries
            .write()
            .retain(|_, e| policy.freshness(Self::age(now, e.fetched_at)) != Freshness::Expired);
    }

    /// Drop a single entry so the next read refetches.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Resolve a query through the cache. `fetch` is only called when the
    /// cached entry is stale or missing.
    pub async fn fetch_through<F, Fut>(mut self, key: &str, fetch: F) -> Result<String, String>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<String, ServerFnError>>,
    {
        let now = Self::now();
        self.evict_expired(now);

        let cached = self.entries.read().get(key).cloned();
        if let Some(entry) = &cached {
            if self.policy.freshness(Self::age(now, entry.fetched_at)) == Freshness::Fresh {
                return Ok(entry.payload.clone());
            }
        }

        let mut last_err = String::new();
        for attempt in 0..=self.policy.max_retries {
            match fetch().await {
                Ok(payload) => {
                    self.entries.write().insert(
                        key.to_string(),
                        CacheEntry {
                            fetched_at: now,
                            payload: payload.clone(),
                        },
                    );
                    return Ok(payload);
                }
                Err(e) => {
                    tracing::warn!(key, attempt, "Query fetch failed: {e}");
                    last_err = e.to_string();
                }
            }
        }

        // All attempts failed: serve the stale entry if it's still retained
        if let Some(entry) = cached {
            if self.policy.freshness(Self::age(now, entry.fetched_at)) != Freshness::Expired {
                tracing::debug!(key, "Serving stale payload after fetch failure");
                return Ok(entry.payload);
            }
        }

        Err(last_err)
    }
}

/// Hook to access the query client. Panics outside the app root.
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}
