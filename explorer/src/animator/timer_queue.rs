// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering, collections::BinaryHeap, time::Duration};

/// A min-heap of events keyed by fire time. Events with the same fire time come out in
/// the order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<E> {
    heap: BinaryHeap<Timer<E>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Timer<E> {
    fire_at: Duration,
    seq: u64,
    event: E,
}

impl<E> Ord for Timer<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, so the max-heap pops the earliest timer.
        other
            .fire_at
            .cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<E> PartialOrd for Timer<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<E> PartialEq for Timer<E> {
    fn eq(&self, other: &Self) -> bool { self.fire_at == other.fire_at && self.seq == other.seq }
}

impl<E> Eq for Timer<E> {}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn schedule(&mut self, fire_at: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Timer {
            fire_at,
            seq,
            event,
        });
    }

    /// Remove and return the earliest event, if it is due at or before `deadline`.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(Duration, E)> {
        if self.heap.peek()?.fire_at > deadline {
            return None;
        }
        self.heap.pop().map(|it| (it.fire_at, it.event))
    }

    #[must_use]
    pub fn next_fire_at(&self) -> Option<Duration> { self.heap.peek().map(|it| it.fire_at) }

    #[must_use]
    pub fn len(&self) -> usize { self.heap.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn ms(it: u64) -> Duration { Duration::from_millis(it) }

    fn drain(queue: &mut TimerQueue<&'static str>, deadline: Duration) -> Vec<&'static str> {
        std::iter::from_fn(|| queue.pop_due(deadline).map(|(_, it)| it)).collect()
    }

    #[test]
    fn test_pops_in_fire_time_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(30), "c");
        queue.schedule(ms(10), "a");
        queue.schedule(ms(20), "b");
        assert_eq2!(queue.next_fire_at(), Some(ms(10)));
        assert_eq2!(drain(&mut queue, ms(100)), vec!["a", "b", "c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_pop_in_schedule_order() {
        let mut queue = TimerQueue::new();
        for it in ["first", "second", "third"] {
            queue.schedule(ms(5), it);
        }
        assert_eq2!(drain(&mut queue, ms(5)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_respects_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(10), "due");
        queue.schedule(ms(11), "later");
        assert_eq2!(drain(&mut queue, ms(10)), vec!["due"]);
        assert_eq2!(queue.len(), 1);
        assert_eq2!(queue.pop_due(ms(0)), None);
    }
}
