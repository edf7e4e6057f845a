//! Ordered fan-out over a set of items.
//!
//! The executor is injected into the harvester rather than selected through
//! a module-level switch, so the concurrent and sequential backends are
//! interchangeable per run. Both return results in input order.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Runs one async operation per item, collecting results in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Executor {
    /// Bounded concurrency: at most `limit` operations in flight.
    Buffered {
        /// Maximum in-flight operations.
        limit: usize,
    },
    /// One operation at a time.
    Sequential,
}

impl Executor {
    /// Create a buffered executor with at least one in-flight slot.
    #[must_use]
    pub fn buffered(limit: usize) -> Self {
        Self::Buffered { limit: limit.max(1) }
    }

    /// Apply `per_item` to every item, returning outputs in input order
    /// regardless of completion order.
    pub async fn run_ordered<T, R, F, Fut>(&self, items: Vec<T>, per_item: F) -> Vec<R>
    where
        F: Fn(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Buffered { limit } => {
                stream::iter(items).map(per_item).buffered(*limit).collect().await
            }
            Self::Sequential => {
                let mut results = Vec::with_capacity(items.len());
                for item in items {
                    results.push(per_item(item).await);
                }
                results
            }
        }
    }
}
