//! Paginated actual-cost iterator
//!
//! A pull-based cursor over the paginated actual-cost RPC. The iterator
//! owns all cursor state and is single-consumer: advance it from one task
//! only. Records are yielded in the exact order pages return them; the
//! iterator never prefetches beyond the current page.
//!
//! Upstream implementations may legitimately emit empty interstitial
//! pages, so an empty page with a continuation token is skipped — but only
//! [`MAX_CONSECUTIVE_EMPTY_PAGES`] times. A backend that returns empty
//! pages with fresh tokens forever becomes a bounded, observable error
//! instead of a hang. Keep the bound and its error; they are contract.
//!
//! # Example
//!
//! ```ignore
//! let mut iter = client.actual_costs(request);
//! while iter.advance().await {
//!     let record = iter.current().unwrap();
//!     println!("{}: {} {}", record.resource_id, record.amount, record.currency);
//! }
//! if let Some(err) = iter.err() {
//!     eprintln!("iteration failed: {err}");
//! }
//! ```

use crate::error::ClientError;
use hinta_core::proto::{ActualCostResponse, CostRecord};
use std::future::Future;
use std::pin::Pin;
use tokio_util::sync::CancellationToken;

/// Consecutive empty pages tolerated before iteration fails.
pub const MAX_CONSECUTIVE_EMPTY_PAGES: u32 = 10;

/// Page size used when the request does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Future returned by a page fetch.
pub type PageFuture =
    Pin<Box<dyn Future<Output = Result<Option<ActualCostResponse>, ClientError>> + Send>>;

/// Page-fetch callback: `(page_token, page_size)` to one page.
///
/// `Ok(None)` — no response and no error — is a protocol violation and
/// terminates iteration; a well-behaved fetcher never produces it.
pub type PageFetcher = Box<dyn FnMut(String, u32) -> PageFuture + Send>;

/// Client-side cursor over paginated actual-cost results.
pub struct ActualCostIterator {
    fetch: PageFetcher,
    cancel: CancellationToken,
    page_size: u32,
    records: Vec<CostRecord>,
    /// Read position in `records`; -1 before the first record.
    index: isize,
    page_token: String,
    /// Whether any page has been fetched yet.
    started: bool,
    done: bool,
    error: Option<ClientError>,
    total_count: u64,
}

impl ActualCostIterator {
    /// Build an iterator over a page-fetch callback.
    pub fn new(fetch: PageFetcher, page_size: u32) -> Self {
        Self {
            fetch,
            cancel: CancellationToken::new(),
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            records: Vec::new(),
            index: -1,
            page_token: String::new(),
            started: false,
            done: false,
            error: None,
            total_count: 0,
        }
    }

    /// Tie iteration to a cancellation token. A cancelled token makes the
    /// next [`advance`](Self::advance) fail even if unread records remain.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Move to the next record. Returns `false` at the end of iteration or
    /// on error; check [`err`](Self::err) to distinguish.
    ///
    /// Terminal states are sticky: once this returns `false`, it keeps
    /// returning `false` without further fetches.
    pub async fn advance(&mut self) -> bool {
        if self.done || self.error.is_some() {
            return false;
        }

        if self.cancel.is_cancelled() {
            self.error = Some(ClientError::Cancelled);
            return false;
        }

        // Unread record in the current buffer: no network.
        if self.index + 1 < self.records.len() as isize {
            self.index += 1;
            return true;
        }

        // Buffer consumed and the last page ended the stream.
        if self.started && self.page_token.is_empty() {
            self.done = true;
            return false;
        }

        let mut empty_fetches = 0u32;
        loop {
            let response = match (self.fetch)(self.page_token.clone(), self.page_size).await {
                Ok(Some(response)) => response,
                Ok(None) => {
                    self.error = Some(ClientError::Protocol(
                        "page fetch returned neither a response nor an error".to_string(),
                    ));
                    return false;
                }
                Err(err) => {
                    self.error = Some(err);
                    return false;
                }
            };

            // The fetch may have blocked across a cancellation event.
            if self.cancel.is_cancelled() {
                self.error = Some(ClientError::Cancelled);
                return false;
            }

            self.started = true;
            self.page_token = response.next_page_token;
            if response.total_count > 0 {
                self.total_count = response.total_count;
            }
            self.records = response.records;

            if !self.records.is_empty() {
                self.index = 0;
                return true;
            }

            self.index = -1;
            if self.page_token.is_empty() {
                self.done = true;
                return false;
            }

            empty_fetches += 1;
            if empty_fetches >= MAX_CONSECUTIVE_EMPTY_PAGES {
                self.error = Some(if self.cancel.is_cancelled() {
                    ClientError::Cancelled
                } else {
                    ClientError::PaginationSafety(MAX_CONSECUTIVE_EMPTY_PAGES)
                });
                return false;
            }
        }
    }

    /// The record at the cursor, if [`advance`](Self::advance) last
    /// returned `true`. The reference is invalidated by the next advance.
    pub fn current(&self) -> Option<&CostRecord> {
        if self.index >= 0 {
            self.records.get(self.index as usize)
        } else {
            None
        }
    }

    /// Terminal error, if iteration failed.
    pub fn err(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    /// Most recent total-count hint reported by the server.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn record(id: &str) -> CostRecord {
        CostRecord {
            resource_id: id.to_string(),
            amount: 1.0,
            currency: "USD".to_string(),
            ..Default::default()
        }
    }

    fn page(ids: &[&str], token: &str, total: u64) -> ActualCostResponse {
        ActualCostResponse {
            records: ids.iter().map(|id| record(id)).collect(),
            next_page_token: token.to_string(),
            total_count: total,
        }
    }

    /// Fetcher serving a fixed script of pages, counting calls.
    fn scripted(
        pages: Vec<ActualCostResponse>,
    ) -> (PageFetcher, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let mut pages = pages.into_iter();
        let fetch: PageFetcher = Box::new(move |_token, _size| {
            counter.fetch_add(1, Ordering::SeqCst);
            let next = pages.next();
            Box::pin(async move {
                match next {
                    Some(page) => Ok(Some(page)),
                    None => Err(ClientError::Protocol(
                        "fetcher script exhausted".to_string(),
                    )),
                }
            })
        });
        (fetch, calls)
    }

    #[tokio::test]
    async fn test_round_trip_in_order() {
        let (fetch, calls) = scripted(vec![
            page(&["a", "b"], "t1", 3),
            page(&["c"], "", 3),
        ]);
        let mut iter = ActualCostIterator::new(fetch, 10);

        let mut seen = Vec::new();
        while iter.advance().await {
            seen.push(iter.current().unwrap().resource_id.clone());
        }

        assert_eq!(seen, vec!["a", "b", "c"]);
        assert!(iter.err().is_none());
        assert_eq!(iter.total_count(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // Terminal state is idempotent, no further fetches.
        assert!(!iter.advance().await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_buffered_records_need_no_fetch() {
        let (fetch, calls) = scripted(vec![page(&["a", "b", "c"], "", 0)]);
        let mut iter = ActualCostIterator::new(fetch, 10);

        assert!(iter.advance().await);
        assert!(iter.advance().await);
        assert!(iter.advance().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "one page, one fetch");
    }

    #[tokio::test]
    async fn test_current_before_first_advance_is_none() {
        let (fetch, _) = scripted(vec![page(&["a"], "", 0)]);
        let iter = ActualCostIterator::new(fetch, 10);
        assert!(iter.current().is_none());
    }

    #[tokio::test]
    async fn test_empty_interstitial_page_skipped() {
        let (fetch, calls) = scripted(vec![
            page(&["a"], "t1", 0),
            page(&[], "t2", 0),
            page(&["b"], "", 0),
        ]);
        let mut iter = ActualCostIterator::new(fetch, 10);

        let mut seen = Vec::new();
        while iter.advance().await {
            seen.push(iter.current().unwrap().resource_id.clone());
        }

        assert_eq!(seen, vec!["a", "b"]);
        assert!(iter.err().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_empty_final_page_is_clean_end() {
        let (fetch, _) = scripted(vec![page(&["a"], "t1", 0), page(&[], "", 0)]);
        let mut iter = ActualCostIterator::new(fetch, 10);

        assert!(iter.advance().await);
        assert!(!iter.advance().await);
        assert!(iter.err().is_none());
    }

    #[tokio::test]
    async fn test_safety_bound_after_exactly_ten_fetches() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let fetch: PageFetcher = Box::new(move |_token, _size| {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Ok(Some(page(&[], "again", 0))) })
        });
        let mut iter = ActualCostIterator::new(fetch, 10);

        assert!(!iter.advance().await);
        assert_eq!(calls.load(Ordering::SeqCst), MAX_CONSECUTIVE_EMPTY_PAGES);
        match iter.err() {
            Some(ClientError::PaginationSafety(n)) => {
                assert_eq!(*n, MAX_CONSECUTIVE_EMPTY_PAGES);
            }
            other => panic!("expected PaginationSafety, got {other:?}"),
        }

        // Sticky: no more fetches after the bound trips.
        assert!(!iter.advance().await);
        assert_eq!(calls.load(Ordering::SeqCst), MAX_CONSECUTIVE_EMPTY_PAGES);
    }

    #[tokio::test]
    async fn test_nil_response_is_protocol_violation() {
        let fetch: PageFetcher =
            Box::new(move |_token, _size| Box::pin(async { Ok(None) }));
        let mut iter = ActualCostIterator::new(fetch, 10);

        assert!(!iter.advance().await);
        assert!(matches!(iter.err(), Some(ClientError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_fetch_error_is_terminal() {
        let (fetch, calls) = scripted(vec![]); // first fetch errors
        let mut iter = ActualCostIterator::new(fetch, 10);

        assert!(!iter.advance().await);
        assert!(iter.err().is_some());
        assert!(!iter.advance().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "no retry after error");
    }

    #[tokio::test]
    async fn test_cancellation_masks_buffered_records() {
        let (fetch, _) = scripted(vec![page(&["a", "b", "c"], "t1", 0)]);
        let token = CancellationToken::new();
        let mut iter = ActualCostIterator::new(fetch, 10).with_cancellation(token.clone());

        assert!(iter.advance().await);
        token.cancel();

        // Two unread records remain, but cancellation wins.
        assert!(!iter.advance().await);
        assert!(matches!(iter.err(), Some(ClientError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancellation_during_fetch_detected_after() {
        let token = CancellationToken::new();
        let cancel_inside = token.clone();
        let fetch: PageFetcher = Box::new(move |_token, _size| {
            let cancel = cancel_inside.clone();
            Box::pin(async move {
                // The fetch blocks across a cancellation event.
                cancel.cancel();
                Ok(Some(page(&["a"], "", 0)))
            })
        });
        let mut iter = ActualCostIterator::new(fetch, 10).with_cancellation(token);

        assert!(!iter.advance().await);
        assert!(matches!(iter.err(), Some(ClientError::Cancelled)));
    }

    #[tokio::test]
    async fn test_page_size_passed_to_fetcher() {
        let fetch: PageFetcher = Box::new(move |_token, size| {
            Box::pin(async move {
                assert_eq!(size, 25);
                Ok(Some(page(&["a"], "", 0)))
            })
        });
        let mut iter = ActualCostIterator::new(fetch, 25);
        assert!(iter.advance().await);
    }

    #[tokio::test]
    async fn test_zero_page_size_uses_default() {
        let fetch: PageFetcher = Box::new(move |_token, size| {
            Box::pin(async move {
                assert_eq!(size, DEFAULT_PAGE_SIZE);
                Ok(Some(page(&["a"], "", 0)))
            })
        });
        let mut iter = ActualCostIterator::new(fetch, 0);
        assert!(iter.advance().await);
    }

    #[tokio::test]
    async fn test_token_threaded_between_fetches() {
        let tokens = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let seen = Arc::clone(&tokens);
        let mut pages = vec![page(&["a"], "cursor-1", 0), page(&["b"], "", 0)].into_iter();
        let fetch: PageFetcher = Box::new(move |token, _size| {
            seen.lock().push(token);
            let next = pages.next().unwrap();
            Box::pin(async move { Ok(Some(next)) })
        });
        let mut iter = ActualCostIterator::new(fetch, 10);

        while iter.advance().await {}

        assert_eq!(*tokens.lock(), vec!["".to_string(), "cursor-1".to_string()]);
    }
}
