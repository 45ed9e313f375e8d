//! Timer queue polled by the loop driver
//!
//! Replaces callback-style timers: each entry is a (due time, token) pair and
//! the driver decides what a token means when it pops out. Entries are never
//! cancelled; a scheduled one-shot always fires.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Entry<T> {
    due: Duration,
    /// Scheduling order, breaks ties between equal due times
    seq: u64,
    /// Re-arm interval for repeating entries
    period: Option<Duration>,
    token: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Virtual clock plus a min-queue of pending timers
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending entries
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Fire `token` once, `delay` from now
    pub fn schedule_once(&mut self, delay: Duration, token: T) {
        self.push(self.now + delay, None, token);
    }

    /// Fire `token` every `interval`, first time one interval from now
    pub fn schedule_repeating(&mut self, interval: Duration, token: T) {
        // A zero period would never let the clock move
        let interval = interval.max(Duration::from_nanos(1));
        self.push(self.now + interval, Some(interval), token);
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, token: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry {
            due,
            seq,
            period,
            token,
        }));
    }

    /// Pop the earliest entry due at or before `deadline`
    ///
    /// Moves the clock to the entry's due time, so anything scheduled while
    /// handling it is relative to when it fired.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<T>
    where
        T: Clone,
    {
        if self.queue.peek().is_none_or(|Reverse(entry)| entry.due > deadline) {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);

        if let Some(period) = entry.period {
            self.push(entry.due + period, Some(period), entry.token.clone());
        }

        Some(entry.token)
    }

    /// Move the clock up to `deadline` once everything due has been popped
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}
