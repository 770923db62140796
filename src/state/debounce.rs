//! Search debouncing
//!
//! Raw keystrokes only reach the filter pipeline once the user has paused
//! for `SEARCH_DELAY`. Every new input cancels the pending timer and
//! schedules a fresh one, so only the final value of a burst is published.

use std::future::Future;
use std::time::Duration;

use iced::task;
use tokio::time::{sleep_until, Instant};

/// Quiescence window before a search term is published
pub const SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Identifies one scheduled timer; only the newest ticket may publish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Coalesces bursts of input into a single settled value
pub struct Debouncer<T> {
    delay: Duration,
    /// Latest value typed by the user
    raw: T,
    /// Latest value published to consumers
    settled: T,
    generation: u64,
    /// Abort handle of the scheduled timer task (aborts on drop)
    pending: Option<task::Handle>,
}

impl<T: Clone + Default> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            raw: T::default(),
            settled: T::default(),
            generation: 0,
            pending: None,
        }
    }
}

impl<T: Clone> Debouncer<T> {
    /// Record a raw input and cancel whatever timer was pending.
    /// Returns the ticket the new timer must carry.
    pub fn input(&mut self, value: T) -> Ticket {
        self.cancel();
        self.raw = value;
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Keep the abort handle of the timer scheduled for the latest ticket
    pub fn arm(&mut self, handle: task::Handle) {
        self.pending = Some(handle.abort_on_drop());
    }

    /// Timer future: resolves with `ticket` once the delay has elapsed.
    /// The deadline is fixed when the timer is created, not when first polled.
    pub fn sleep(&self, ticket: Ticket) -> impl Future<Output = Ticket> + Send + 'static {
        let deadline = Instant::now() + self.delay;
        async move {
            sleep_until(deadline).await;
            ticket
        }
    }

    /// Publish the raw value if `ticket` belongs to the newest input.
    /// Stale tickets return `None` and leave the settled value untouched.
    pub fn settle(&mut self, ticket: Ticket) -> Option<&T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending = None;
        self.settled = self.raw.clone();
        Some(&self.settled)
    }

    /// Set raw and settled values at once, dropping any pending timer
    pub fn reset(&mut self, value: T) {
        self.cancel();
        self.generation += 1;
        self.raw = value.clone();
        self.settled = value;
    }

    /// Value currently in the input box
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Value the pipeline filters with
    pub fn settled(&self) -> &T {
        &self.settled
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("raw", &self.raw)
            .field("settled", &self.settled)
            .field("generation", &self.generation)
            .finish()
    }
}
