// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Identifier for a scheduled task.
///
/// Handles are allocated from a monotonically increasing counter and are
/// never reused, so a handle can only ever refer to the task it was issued
/// for. Once that task fires or is cancelled the handle is stale:
/// [`TaskQueue::is_scheduled`] returns `false` and [`TaskQueue::cancel`] is a
/// no-op returning `false`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskHandle(u64);

struct Entry<T> {
    handle: TaskHandle,
    deadline: f64,
    payload: T,
}

/// Deadline-ordered queue of cancellable tasks.
///
/// See the crate docs for the overall model. The queue holds a handful of
/// entries at a time in the intended use, so storage is a plain vector and
/// every operation is a linear scan.
pub struct TaskQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> TaskQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    ///
    /// Deadlines are caller-defined timestamps; the queue only ever compares
    /// them against the `now` passed to [`TaskQueue::drain_due`].
    pub fn schedule(&mut self, deadline: f64, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            deadline,
            payload,
        });
        handle
    }

    /// Cancels a pending task.
    ///
    /// Returns `true` if the task was still pending, `false` for a stale
    /// handle (already fired, already cancelled, or cleared).
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.entries.iter().position(|e| e.handle == handle) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while the task for `handle` is still pending.
    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts that drive the queue from their own timer can use this to arm
    /// a wake-up instead of polling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.deadline)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Removes every task with `deadline <= now` and returns their payloads.
    ///
    /// Payloads come back in deadline order; tasks sharing a deadline keep
    /// their scheduling order.
    pub fn drain_due(&mut self, now: f64) -> Vec<T> {
        let mut due = Vec::new();
        let mut idx = 0;
        while idx < self.entries.len() {
            if self.entries[idx].deadline <= now {
                due.push(self.entries.remove(idx));
            } else {
                idx += 1;
            }
        }

        due.sort_by(|a, b| {
            a.deadline
                .partial_cmp(&b.deadline)
                .unwrap_or(Ordering::Equal)
                .then(a.handle.0.cmp(&b.handle.0))
        });
        due.into_iter().map(|e| e.payload).collect()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for TaskQueue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_queue_basics() {
        let mut queue = TaskQueue::<u32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.next_deadline(), None);
        assert!(queue.drain_due(1.0e9).is_empty());
    }

    #[test]
    fn drain_respects_deadlines() {
        let mut queue = TaskQueue::new();
        queue.schedule(2.0, "late");
        queue.schedule(1.0, "early");

        assert!(queue.drain_due(0.5).is_empty());
        assert_eq!(queue.drain_due(1.0), vec!["early"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain_due(5.0), vec!["late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_orders_by_deadline_then_schedule_order() {
        let mut queue = TaskQueue::new();
        queue.schedule(3.0, "c");
        queue.schedule(1.0, "a1");
        queue.schedule(1.0, "a2");
        queue.schedule(2.0, "b");

        assert_eq!(queue.drain_due(3.0), vec!["a1", "a2", "b", "c"]);
    }

    #[test]
    fn cancel_removes_pending_task() {
        let mut queue = TaskQueue::new();
        let kept = queue.schedule(1.0, "kept");
        let dropped = queue.schedule(1.0, "dropped");

        assert!(queue.cancel(dropped));
        assert!(!queue.is_scheduled(dropped));
        assert!(queue.is_scheduled(kept));
        assert_eq!(queue.drain_due(1.0), vec!["kept"]);
    }

    #[test]
    fn handles_are_never_reused() {
        let mut queue = TaskQueue::new();
        let first = queue.schedule(1.0, "first");
        queue.drain_due(1.0);

        // A fired task's handle is stale even after new tasks are scheduled.
        let second = queue.schedule(1.0, "second");
        assert_ne!(first, second);
        assert!(!queue.cancel(first));
        assert!(queue.is_scheduled(second));
    }

    #[test]
    fn cancel_twice_is_a_no_op() {
        let mut queue = TaskQueue::new();
        let handle = queue.schedule(1.0, ());
        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = TaskQueue::new();
        let a = queue.schedule(1.0, "a");
        queue.schedule(2.0, "b");

        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.is_scheduled(a));
        assert!(queue.drain_due(10.0).is_empty());
    }

    #[test]
    fn exact_deadline_is_due() {
        let mut queue = TaskQueue::new();
        queue.schedule(0.25, "at");
        assert_eq!(queue.drain_due(0.25), vec!["at"]);
    }
}
