//! One-shot deferred callbacks on a virtual clock.
//!
//! Nothing here sleeps. The owning [`crate::Window`] moves the clock with
//! `advance` and fires whatever has come due, in deadline order.

use std::time::Duration;

use crate::window::Scope;

/// Callback run when a timer fires. Receives the page state and a dispatch scope.
pub type TimerCallback<S> = Box<dyn FnOnce(&mut S, &mut Scope<'_, S>)>;

/// Handle returned by scheduling, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct TimerEntry<S> {
    id: TimerId,
    deadline: Duration,
    callback: TimerCallback<S>,
}

/// Pending one-shot timers.
pub struct TimerQueue<S> {
    next_id: u64,
    entries: Vec<TimerEntry<S>>,
}

impl<S> Default for TimerQueue<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<S> std::fmt::Debug for TimerQueue<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.entries.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}

impl<S> TimerQueue<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to run once `delay` after `now`.
    pub fn schedule(
        &mut self,
        now: Duration,
        delay: Duration,
        callback: TimerCallback<S>,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            deadline: now + delay,
            callback,
        });
        log::trace!("[timer] scheduled {:?} at {:?}", id, now + delay);
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove and return the earliest timer due at or before `now`.
    /// Timers sharing a deadline come out in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, TimerCallback<S>)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(i, _)| i)?;

        let entry = self.entries.remove(index);
        log::trace!("[timer] firing {:?} due {:?}", entry.id, entry.deadline);
        Some((entry.deadline, entry.callback))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
