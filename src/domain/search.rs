//! Catalog search helpers for the storefront.
//!
//! The server exposes no search; the client filters the full fetched list.
//! Keystrokes are debounced with a fixed delay, and every outgoing query
//! carries a monotonic ticket so that only the latest query may publish
//! its results — a response arriving late for a superseded query is
//! discarded instead of overwriting newer results.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::product::Product;

/// Ticket for one outgoing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

/// Issues monotonic tickets and recognizes the latest one.
#[derive(Debug, Default)]
pub struct QuerySequencer {
    latest: u64,
}

impl QuerySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> QueryTicket {
        self.latest += 1;
        QueryTicket(self.latest)
    }

    /// True only for the most recently issued ticket.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Runs a task after a fixed delay; scheduling again before the delay
/// elapses drops the pending run.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Case-insensitive name search over the fetched list, capped at `limit`.
pub fn search_by_name<'a>(products: &'a [Product], query: &str, limit: usize) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .take(limit)
        .collect()
}

pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.category == category).collect()
}
