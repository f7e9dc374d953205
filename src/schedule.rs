/// Deferred game events.
///
/// Anything that should happen "some milliseconds from now" goes in here
/// instead of running on its own timer. The tick drains every event whose due
/// time has passed before it touches the rest of the state, so a burst is
/// never half-applied from the point of view of a tick.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::entities::AlienId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Peel a random patrolling alien off the formation.
    StartDescent { started_at: u64 },
    /// One shot of a burst, fired from wherever `alien` is when it comes due.
    SpawnAlienShot { alien: AlienId, slope: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scheduled {
    pub due: u64,
    /// Reset generation the event was scheduled under.
    pub generation: u64,
    pub event: Event,
}

#[derive(Clone, Debug)]
struct Entry {
    seq: u64,
    scheduled: Scheduled,
}

// Min-heap on (due, seq): earliest first, ties in scheduling order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .scheduled
            .due
            .cmp(&self.scheduled.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Entry {}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: u64, generation: u64, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            seq,
            scheduled: Scheduled {
                due,
                generation,
                event,
            },
        });
    }

    /// Pop the earliest event if it is due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Scheduled> {
        if self.queue.peek()?.scheduled.due > now {
            return None;
        }
        self.queue.pop().map(|entry| entry.scheduled)
    }

    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|entry| entry.scheduled.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
