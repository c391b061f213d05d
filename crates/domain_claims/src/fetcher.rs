//! Mount-scoped list fetching
//!
//! A [`ListFetcher`] backs one dashboard list. It holds the list's items,
//! loading flag, last error and last load time, and re-issues its source's
//! request on demand.
//!
//! # Stale results
//!
//! Every request takes a ticket. Mounting, refreshing and unmounting each
//! move the current ticket forward, and a response is applied only if its
//! ticket is still current and the fetcher is still mounted. Anything else is
//! dropped as [`FetchOutcome::Discarded`] without touching the state.
//! Requests themselves are never aborted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

use core_kernel::RequestError;

/// A backend list addressed by key `K`
#[async_trait]
pub trait ListSource<K, T>: Send + Sync
where
    K: Send + Sync,
    T: Send,
{
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    async fn fetch(&self, key: &K) -> Result<Vec<T>, RequestError>;
}

/// What happened to a fetch's response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response (items or error) was written to the state
    Applied,
    /// A newer request or an unmount superseded this one
    Discarded,
    /// `refresh` was called with nothing mounted; no request was sent
    NotMounted,
}

/// Observable state of a list
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// User-facing message of the last failed load
    pub error: Option<String>,
    pub last_loaded_at: Option<DateTime<Utc>>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            last_loaded_at: None,
        }
    }
}

struct Slot<K, T> {
    key: Option<K>,
    mounted: bool,
    ticket: u64,
    state: FetchState<T>,
}

impl<K, T> Slot<K, T> {
    fn begin(&mut self) -> u64 {
        self.ticket += 1;
        self.state.loading = true;
        self.state.error = None;
        self.ticket
    }
}

/// One list's fetch state plus the source that fills it
pub struct ListFetcher<K, T> {
    source: Arc<dyn ListSource<K, T>>,
    slot: Mutex<Slot<K, T>>,
}

impl<K, T> ListFetcher<K, T>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + 'static,
{
    pub fn new(source: Arc<dyn ListSource<K, T>>) -> Self {
        Self {
            source,
            slot: Mutex::new(Slot {
                key: None,
                mounted: false,
                ticket: 0,
                state: FetchState::default(),
            }),
        }
    }

    /// Attaches the fetcher to `key` and loads it
    ///
    /// Mounting a different key clears the items of the previous one before
    /// the request goes out; mounting the same key again reloads in place.
    pub async fn mount(&self, key: K) -> FetchOutcome {
        let ticket = {
            let mut slot = self.slot();
            if slot.key.as_ref() != Some(&key) {
                slot.state = FetchState::default();
                slot.key = Some(key.clone());
            }
            slot.mounted = true;
            slot.begin()
        };
        self.load(key, ticket).await
    }

    /// Reloads the mounted key
    pub async fn refresh(&self) -> FetchOutcome {
        let (key, ticket) = {
            let mut slot = self.slot();
            let key = match (&slot.key, slot.mounted) {
                (Some(key), true) => key.clone(),
                _ => return FetchOutcome::NotMounted,
            };
            (key, slot.begin())
        };
        self.load(key, ticket).await
    }

    /// Detaches the fetcher; in-flight responses will be discarded
    pub fn unmount(&self) {
        let mut slot = self.slot();
        slot.mounted = false;
        slot.ticket += 1;
        slot.state.loading = false;
    }

    pub fn snapshot(&self) -> FetchState<T> {
        self.slot().state.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.slot().mounted
    }

    /// Key last mounted, kept after unmount
    pub fn key(&self) -> Option<K> {
        self.slot().key.clone()
    }

    async fn load(&self, key: K, ticket: u64) -> FetchOutcome {
        let source = self.source.name();
        debug!(source, ?key, ticket, "Loading list");

        let result = self.source.fetch(&key).await;

        let mut slot = self.slot();
        if !slot.mounted || slot.ticket != ticket {
            debug!(source, ?key, ticket, current = slot.ticket, "Discarding stale list response");
            return FetchOutcome::Discarded;
        }

        slot.state.loading = false;
        match result {
            Ok(items) => {
                debug!(source, ?key, count = items.len(), "List loaded");
                slot.state.items = items;
                slot.state.error = None;
                slot.state.last_loaded_at = Some(Utc::now());
            }
            Err(error) => {
                warn!(source, ?key, error = %error, "List load failed");
                slot.state.error = Some(error.user_message());
            }
        }
        FetchOutcome::Applied
    }

    fn slot(&self) -> MutexGuard<'_, Slot<K, T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
