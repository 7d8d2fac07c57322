//! Scripted lookup doubles shared by the unit tests.

use async_trait::async_trait;
use lookups::{Lookup, LookupError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Answers every request with the same result, optionally after a delay,
/// and counts how often it was called.
pub struct StubLookup<Resp> {
    name: &'static str,
    response: Result<Resp, LookupError>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl<Resp> StubLookup<Resp> {
    pub fn ok(name: &'static str, response: Resp) -> Self {
        Self::with_result(name, Ok(response))
    }

    pub fn failing(name: &'static str) -> Self {
        Self::with_result(name, Err(LookupError::failed(name, "scripted fault")))
    }

    fn with_result(name: &'static str, response: Result<Resp, LookupError>) -> Self {
        Self {
            name,
            response,
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Share a call counter with other stubs
    pub fn counting(mut self, calls: &Arc<AtomicUsize>) -> Self {
        self.calls = calls.clone();
        self
    }
}

#[async_trait]
impl<Req, Resp> Lookup<Req, Resp> for StubLookup<Resp>
where
    Req: Send + 'static,
    Resp: Clone + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    async fn lookup(&self, _request: Req) -> Result<Resp, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response.clone()
    }
}

pub fn call_count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}
