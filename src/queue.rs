//! Unbounded, lock-protected FIFO queue with a timed blocking pop.
//!
//! Producers never block on capacity. Consumers either take the head
//! immediately or park on a condition variable until a producer wakes them or
//! their wait budget runs out.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::sync::{recover, Condvar, Mutex, MutexGuard};

/// Thread-safe FIFO queue for handing values between any number of producer
/// and consumer threads.
///
/// Share it through an `Arc<Queue<T>>`. The queue is intentionally not
/// `Clone`: two copies would no longer share a lock.
///
/// `len` and `is_empty` are snapshots; another thread may change the queue
/// right after they return.
pub struct Queue<T> {
    items: Mutex<VecDeque<T>>,
    not_empty: Condvar,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::from_deque(VecDeque::new())
    }

    /// Creates an empty queue with room for `capacity` items before the
    /// backing buffer reallocates. The queue still grows without bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_deque(VecDeque::with_capacity(capacity))
    }

    fn from_deque(items: VecDeque<T>) -> Self {
        Queue {
            items: Mutex::new(items),
            not_empty: Condvar::new(),
        }
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        recover(self.items.lock())
    }

    /// Number of queued items at the time of the call.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the queue held no items at the time of the call.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Appends `value` at the tail and wakes one waiting consumer.
    pub fn push(&self, value: T) {
        let mut items = self.lock();
        items.push_back(value);
        self.not_empty.notify_one();
    }

    /// Appends every item of `values`, in iteration order, under a single lock
    /// acquisition.
    ///
    /// Items from one batch are never interleaved with items pushed by other
    /// threads.
    pub fn push_batch<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = self.lock();
        let before = items.len();
        items.extend(values);
        match items.len() - before {
            0 => {}
            1 => self.not_empty.notify_one(),
            _ => self.not_empty.notify_all(),
        }
    }

    /// Discards every queued item and releases the backing buffer.
    ///
    /// Waiting consumers are not woken; there is nothing for them to take.
    pub fn clear(&self) {
        let mut items = self.lock();
        let dropped = std::mem::take(&mut *items);
        drop(items);
        trace!(dropped = dropped.len(), "queue cleared");
    }

    /// Removes and returns every queued item in FIFO order.
    pub fn drain(&self) -> Vec<T> {
        let mut items = self.lock();
        items.drain(..).collect()
    }

    /// Removes the head item if there is one, without waiting.
    #[inline]
    pub fn try_pop(&self) -> Option<T> {
        self.pop(Duration::ZERO)
    }

    /// Removes and returns the head item, waiting up to `wait` for one to
    /// arrive.
    ///
    /// A zero `wait` checks once and returns. Otherwise the lock is released
    /// while parked and the queue is re-checked after every wakeup, so a
    /// spurious wakeup never yields `None` early. On timeout the queue is left
    /// untouched and `None` is returned.
    pub fn pop(&self, wait: Duration) -> Option<T> {
        let mut items = self.lock();
        if let Some(value) = items.pop_front() {
            return Some(value);
        }
        if wait.is_zero() {
            return None;
        }

        // `None` when `wait` is too large to represent; wait in `wait` slices.
        let deadline = Instant::now().checked_add(wait);
        loop {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => wait,
            };
            if remaining.is_zero() {
                trace!(?wait, "pop timed out on empty queue");
                return None;
            }

            let (guard, _) = recover(self.not_empty.wait_timeout(items, remaining));
            items = guard;
            if let Some(value) = items.pop_front() {
                return Some(value);
            }
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_deque(iter.into_iter().collect())
    }
}

impl<T> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("len", &self.len()).finish()
    }
}
