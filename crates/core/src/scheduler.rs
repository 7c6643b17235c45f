//! Scheduler module - one-shot delayed tasks driven by the game clock
//!
//! Every delayed action of the game (the startup reveal, hiding a mismatched
//! pair, removing a matched pair) is a task in this queue. Time only moves
//! when [`Scheduler::advance`] is called from the fixed-timestep loop, so
//! the whole thing is deterministic and needs no threads.
//!
//! Each task gets a [`TaskHandle`] that can cancel it before it fires.

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    handle: TaskHandle,
    due_ms: u64,
    task: T,
}

/// Queue of pending one-shot tasks.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_handle: u64,
    /// Kept sorted by (due_ms, handle).
    pending: Vec<Scheduled<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// Milliseconds advanced since creation.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `task` to fire `delay_ms` from now.
    ///
    /// `GameState` never cancels a single task during play, so it drops the
    /// handle and only tears down through [`cancel_all`](Self::cancel_all) on
    /// restart. The handle is for callers that retire individual tasks.
    pub fn schedule(&mut self, delay_ms: u32, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;

        let due_ms = self.now_ms + delay_ms as u64;
        // Handles increase monotonically, so inserting after every entry with
        // due <= ours keeps equal-due tasks in scheduling order.
        let at = self.pending.partition_point(|s| s.due_ms <= due_ms);
        self.pending.insert(
            at,
            Scheduled {
                handle,
                due_ms,
                task,
            },
        );
        handle
    }

    /// Cancel a pending task, returning it if it had not fired yet.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let idx = self.pending.iter().position(|s| s.handle == handle)?;
        Some(self.pending.remove(idx).task)
    }

    /// Cancel everything. Returns the number of dropped tasks.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// Time until the earliest pending task is due.
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .first()
            .map(|s| s.due_ms.saturating_sub(self.now_ms))
    }

    /// Advance the clock and take every task that became due, in due order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<T> {
        self.now_ms += elapsed_ms as u64;
        let due = self.pending.partition_point(|s| s.due_ms <= self.now_ms);
        self.pending.drain(..due).map(|s| s.task).collect()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
