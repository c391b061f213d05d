//! Stale-response handling of the list fetcher
//!
//! The gated source below holds every request until the test releases its
//! key, so the tests control exactly when each response arrives.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

use core_kernel::RequestError;
use domain_claims::{FetchOutcome, ListFetcher, ListSource};

struct GatedSource {
    gates: HashMap<u32, Arc<Semaphore>>,
    started: mpsc::UnboundedSender<u32>,
}

#[async_trait]
impl ListSource<u32, String> for GatedSource {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn fetch(&self, key: &u32) -> Result<Vec<String>, RequestError> {
        let _ = self.started.send(*key);
        let gate = self.gates.get(key).cloned().expect("gate for key");
        gate.acquire().await.expect("gate open").forget();
        Ok(vec![format!("item-{}", key)])
    }
}

struct Harness {
    fetcher: Arc<ListFetcher<u32, String>>,
    gates: HashMap<u32, Arc<Semaphore>>,
    started: mpsc::UnboundedReceiver<u32>,
}

impl Harness {
    fn new(keys: &[u32]) -> Self {
        let gates: HashMap<u32, Arc<Semaphore>> =
            keys.iter().map(|key| (*key, Arc::new(Semaphore::new(0)))).collect();
        let (tx, rx) = mpsc::unbounded_channel();
        let source = GatedSource { gates: gates.clone(), started: tx };

        Self {
            fetcher: Arc::new(ListFetcher::new(Arc::new(source))),
            gates,
            started: rx,
        }
    }

    fn release(&self, key: u32) {
        self.gates[&key].add_permits(1);
    }

    fn spawn_mount(&self, key: u32) -> tokio::task::JoinHandle<FetchOutcome> {
        let fetcher = Arc::clone(&self.fetcher);
        tokio::spawn(async move { fetcher.mount(key).await })
    }

    fn spawn_refresh(&self) -> tokio::task::JoinHandle<FetchOutcome> {
        let fetcher = Arc::clone(&self.fetcher);
        tokio::spawn(async move { fetcher.refresh().await })
    }
}

#[tokio::test]
async fn test_unmount_before_response_discards_it() {
    let mut harness = Harness::new(&[1]);

    let pending = harness.spawn_mount(1);
    assert_eq!(harness.started.recv().await, Some(1));
    assert!(harness.fetcher.snapshot().loading);

    harness.fetcher.unmount();
    let after_unmount = harness.fetcher.snapshot();
    harness.release(1);

    assert_eq!(pending.await.unwrap(), FetchOutcome::Discarded);
    assert_eq!(harness.fetcher.snapshot(), after_unmount);
    assert!(harness.fetcher.snapshot().items.is_empty());
    assert!(!harness.fetcher.snapshot().loading);
}

#[tokio::test]
async fn test_remount_with_new_key_discards_older_response() {
    let mut harness = Harness::new(&[1, 2]);

    let first = harness.spawn_mount(1);
    assert_eq!(harness.started.recv().await, Some(1));
    let second = harness.spawn_mount(2);
    assert_eq!(harness.started.recv().await, Some(2));

    harness.release(2);
    assert_eq!(second.await.unwrap(), FetchOutcome::Applied);

    harness.release(1);
    assert_eq!(first.await.unwrap(), FetchOutcome::Discarded);

    assert_eq!(harness.fetcher.snapshot().items, vec!["item-2".to_string()]);
    assert_eq!(harness.fetcher.key(), Some(2));
}

#[tokio::test]
async fn test_newer_refresh_wins() {
    let mut harness = Harness::new(&[5]);

    let mount = harness.spawn_mount(5);
    harness.started.recv().await;
    harness.release(5);
    assert_eq!(mount.await.unwrap(), FetchOutcome::Applied);

    let older = harness.spawn_refresh();
    harness.started.recv().await;
    let newer = harness.spawn_refresh();
    harness.started.recv().await;

    harness.release(5);
    harness.release(5);
    let mut outcomes = vec![older.await.unwrap(), newer.await.unwrap()];
    outcomes.sort_by_key(|outcome| *outcome == FetchOutcome::Applied);

    assert_eq!(outcomes, vec![FetchOutcome::Discarded, FetchOutcome::Applied]);
    assert!(!harness.fetcher.snapshot().loading);
}
