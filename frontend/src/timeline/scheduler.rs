use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Deferred execution. Handles are cancelled explicitly by the player;
/// a task whose handle was cancelled must never run.
pub trait Scheduler: 'static {
    type Handle;

    fn defer(&self, delay_ms: u32, task: Task) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn defer(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        // Dropping the returned closure releases it without running it.
        drop(handle.cancel());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaskId {
    due_ms: u64,
    seq: u64,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_seq: u64,
    pending: BTreeMap<TaskId, Task>,
}

/// Virtual clock. Nothing runs until [`ManualClock::advance`] moves time
/// forward; due tasks then run in due-time order, ties in the order they
/// were deferred. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualClock {
    queue: Rc<RefCell<Queue>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now_ms().saturating_add(ms);
        while let Some(task) = self.pop_due(target) {
            // The queue borrow is released here, tasks may defer more work.
            task();
        }
        self.queue.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let id = *queue
            .pending
            .keys()
            .next()
            .filter(|id| id.due_ms <= target)?;
        let task = queue.pending.remove(&id)?;
        queue.now_ms = id.due_ms;
        Some(task)
    }
}

impl Scheduler for ManualClock {
    type Handle = TaskId;

    fn defer(&self, delay_ms: u32, task: Task) -> TaskId {
        let mut queue = self.queue.borrow_mut();
        let id = TaskId {
            due_ms: queue.now_ms + u64::from(delay_ms),
            seq: queue.next_seq,
        };
        queue.next_seq += 1;
        queue.pending.insert(id, task);
        id
    }

    fn cancel(&self, handle: TaskId) {
        self.queue.borrow_mut().pending.remove(&handle);
    }
}
