//! Virtual-clock timer queue for staged presentation updates.
//!
//! Callbacks are modelled as plain values: the owner schedules an item with a
//! delay and later pulls every item whose deadline has passed. Items with the
//! same deadline come out in the order they were scheduled. There is no
//! cancellation; once scheduled, an item always fires.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Entry<T> {
    deadline: Duration,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap yields the earliest (deadline, seq) first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap of pending items keyed by deadline on a monotonic virtual clock.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    heap: BinaryHeap<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            heap: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Deadline of the earliest pending item.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|e| e.deadline)
    }

    /// Schedule `item` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, item: T) {
        let entry = Entry {
            deadline: self.now + delay,
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    /// Pop the earliest item due by `now`.
    ///
    /// While an item is popped the clock sits at that item's deadline, so a
    /// follow-up scheduled by the caller is timed from when the item was due,
    /// not from `now`. Once nothing is due the clock moves to `now` (never
    /// backwards).
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        let horizon = now.max(self.now);
        match self.heap.peek() {
            Some(entry) if entry.deadline <= horizon => {
                let entry = self.heap.pop()?;
                self.now = self.now.max(entry.deadline);
                Some(entry.item)
            }
            _ => {
                self.now = horizon;
                None
            }
        }
    }

    /// Pop the earliest item regardless of its deadline, jumping the clock to it.
    pub fn pop_next(&mut self) -> Option<T> {
        let entry = self.heap.pop()?;
        if entry.deadline > self.now {
            self.now = entry.deadline;
        }
        Some(entry.item)
    }

    /// Advance to `now` and return every item due by then, in firing order.
    pub fn advance_to(&mut self, now: Duration) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(item) = self.pop_due(now) {
            due.push(item);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(600), "release");
        q.schedule(ms(50), "activate");
        q.schedule(ms(300), "spin");

        assert_eq!(q.advance_to(ms(40)), Vec::<&str>::new());
        assert_eq!(q.advance_to(ms(400)), vec!["activate", "spin"]);
        assert_eq!(q.advance_to(ms(600)), vec!["release"]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(100), 1);
        q.schedule(ms(100), 2);
        q.schedule(ms(100), 3);
        assert_eq!(q.advance_to(ms(100)), vec![1, 2, 3]);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut q: TimerQueue<u8> = TimerQueue::new();
        q.advance_to(ms(500));
        q.advance_to(ms(100));
        assert_eq!(q.now(), ms(500));

        q.schedule(ms(10), 7);
        assert_eq!(q.next_deadline(), Some(ms(510)));
    }

    #[test]
    fn follow_up_timed_from_due_item() {
        let mut q = TimerQueue::new();
        q.schedule(ms(50), "activate");
        assert_eq!(q.pop_due(ms(400)), Some("activate"));
        assert_eq!(q.now(), ms(50));
        q.schedule(ms(600), "release");
        assert_eq!(q.pop_due(ms(400)), None);
        assert_eq!(q.now(), ms(400));
        assert_eq!(q.next_deadline(), Some(ms(650)));
    }

    #[test]
    fn pop_next_jumps_clock() {
        let mut q = TimerQueue::new();
        q.schedule(ms(50), 'a');
        q.schedule(ms(650), 'b');
        assert_eq!(q.pop_next(), Some('a'));
        assert_eq!(q.now(), ms(50));
        assert_eq!(q.pop_next(), Some('b'));
        assert_eq!(q.now(), ms(650));
        assert_eq!(q.pop_next(), None);
    }
}
