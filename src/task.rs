//! Work items stored by the task queue
//!
//! A [`Task`] pairs a caller-assigned identifier with a priority and some
//! bookkeeping. Only the priority takes part in ordering; the arrival time,
//! deadline and payload are carried along untouched.
//!
//! The priority has no public setter. Once a task is inside a
//! [`TaskQueue`](crate::queue::TaskQueue) its priority can only be changed
//! through [`TaskQueue::modify_priority`](crate::queue::TaskQueue::modify_priority),
//! which repairs heap order afterwards.

use chrono::{DateTime, Utc};

/// Caller-assigned task identifier
///
/// The queue never checks identifiers for uniqueness. Lookups by identifier
/// act on the first match they find.
pub type TaskId = u64;

/// A prioritized work item
///
/// Larger priorities are more urgent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task<P, D = ()> {
    id: TaskId,
    priority: P,
    arrival_time: DateTime<Utc>,
    deadline: Option<DateTime<Utc>>,
    data: D,
}

impl<P> Task<P> {
    /// Creates a task without a payload, arriving now
    pub fn new(id: TaskId, priority: P) -> Self {
        Self::with_data(id, priority, ())
    }
}

impl<P, D> Task<P, D> {
    /// Creates a task carrying `data`, arriving now
    pub fn with_data(id: TaskId, priority: P, data: D) -> Self {
        Self {
            id,
            priority,
            arrival_time: Utc::now(),
            deadline: None,
            data,
        }
    }

    /// Overrides the arrival time
    #[must_use]
    pub fn arrived_at(mut self, arrival_time: DateTime<Utc>) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Attaches a deadline
    #[must_use]
    pub fn due_by(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.arrival_time
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// Mutable access to the payload. The payload never affects ordering.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }

    /// Returns true if the task has a deadline that lies before `now`.
    ///
    /// Informational only; the queue orders by priority alone.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now > deadline)
    }

    /// Replaces the priority, returning the old one
    pub(crate) fn replace_priority(&mut self, priority: P) -> P {
        std::mem::replace(&mut self.priority, priority)
    }
}
