use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Stops an ongoing collection from another thread.
///
/// Clones share the same state. Once cancelled a token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token and wakes every waiter.
    pub fn cancel(&self) {
        let (cancelled, cvar) = &*self.inner;
        *cancelled.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (cancelled, _) = &*self.inner;
        *cancelled.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks for up to `timeout`, returning early if the token is cancelled.
    ///
    /// Returns true if the token is cancelled.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (cancelled, cvar) = &*self.inner;
        let deadline = Instant::now() + timeout;
        let mut guard = cancelled.lock().unwrap_or_else(PoisonError::into_inner);
        while !*guard {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            guard = cvar
                .wait_timeout(guard, deadline - now)
                .map(|(guard, _)| guard)
                .unwrap_or_else(|err| err.into_inner().0);
        }
        *guard
    }
}
