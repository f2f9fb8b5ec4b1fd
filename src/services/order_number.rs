use std::{fmt, future::Future, sync::Arc, time::Duration};

use rand::{Rng, distributions::Alphanumeric};

use crate::error::AppResult;

pub const ORDER_NUMBER_LEN: usize = 15;
/// Length used once every short candidate has collided.
pub const FALLBACK_ORDER_NUMBER_LEN: usize = 30;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_BASE_BACKOFF: Duration = Duration::from_millis(10);

/// Random token over `[0-9a-zA-Z]`.
pub fn random_order_number(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Produces a candidate token of the requested length.
pub type TokenGenerator = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Hands out order numbers that are not yet present in the store.
///
/// The existence check and the later insert are not atomic; the unique index on
/// `orders.order_number` is what guarantees uniqueness.
#[derive(Clone)]
pub struct OrderNumberAllocator {
    max_attempts: u32,
    base_backoff: Duration,
    generator: TokenGenerator,
}

impl fmt::Debug for OrderNumberAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderNumberAllocator")
            .field("max_attempts", &self.max_attempts)
            .field("base_backoff", &self.base_backoff)
            .finish_non_exhaustive()
    }
}

impl Default for OrderNumberAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_BACKOFF)
    }
}

impl OrderNumberAllocator {
    pub fn new(max_attempts: u32, base_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_backoff,
            generator: Arc::new(random_order_number),
        }
    }

    /// Replace the token source, e.g. to force collisions.
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.generator = Arc::new(generator);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draw candidates until `is_taken` reports a free one.
    ///
    /// Waits between attempts, doubling the delay each time. When all attempts
    /// collide, returns a longer token instead of looping forever.
    pub async fn allocate<F, Fut>(&self, mut is_taken: F) -> AppResult<String>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = AppResult<bool>>,
    {
        let mut backoff = self.base_backoff;
        for attempt in 1..=self.max_attempts {
            let candidate = (self.generator)(ORDER_NUMBER_LEN);
            if !is_taken(candidate.clone()).await? {
                return Ok(candidate);
            }
            tracing::debug!(attempt, "order number collision");
            if attempt < self.max_attempts {
                tokio::time::sleep(backoff).await;
                backoff = backoff.saturating_mul(2);
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "order number space contended, falling back to long token"
        );
        Ok((self.generator)(FALLBACK_ORDER_NUMBER_LEN))
    }
}
