//! Cooperative cancellation for outstanding fill requests.
//!
//! The session holds the [`CancellationSource`]; the running fill holds a
//! [`CancellationToken`] and either polls it or awaits
//! [`cancelled`](CancellationToken::cancelled) alongside its work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Cloneable handle observing a [`CancellationSource`].
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<CancellationInner>,
}

/// Control side of a cancellation signal.
///
/// Dropping the source does not cancel its tokens.
#[derive(Debug)]
pub struct CancellationSource {
    inner: Arc<CancellationInner>,
}

#[derive(Debug)]
struct CancellationInner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancellationSource {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CancellationInner {
                cancelled: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Signals cancellation and wakes every pending
    /// [`cancelled`](CancellationToken::cancelled) future.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once cancellation has been requested.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            // Checked after registering so a cancel between the two is not lost.
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}
