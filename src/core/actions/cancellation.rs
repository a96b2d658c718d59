use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by long-running work before each pixel is committed.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Numbered generations of work, of which only the newest is live.
///
/// Generation 0 is never issued. A generation goes stale when a newer one
/// is issued or when it is stopped.
#[derive(Debug, Default)]
pub struct Generations {
    current: AtomicU64,
    stopped: AtomicU64,
}

impl Generations {
    /// Issues the next generation, making every earlier one stale.
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Stops whichever generation is current at the time of the call.
    pub fn stop_current(&self) {
        let current = self.current.load(Ordering::Acquire);
        self.stopped.fetch_max(current, Ordering::AcqRel);
    }

    #[must_use]
    pub fn is_stale(&self, generation: u64) -> bool {
        generation != self.current.load(Ordering::Acquire)
            || self.stopped.load(Ordering::Acquire) >= generation
    }

    #[must_use]
    pub fn token(generations: &Arc<Self>, generation: u64) -> GenerationToken {
        GenerationToken {
            generations: Arc::clone(generations),
            generation,
        }
    }
}

/// Cancelled as soon as its generation goes stale.
#[derive(Debug, Clone)]
pub struct GenerationToken {
    generations: Arc<Generations>,
    generation: u64,
}

impl CancelToken for GenerationToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.generations.is_stale(self.generation)
    }
}
