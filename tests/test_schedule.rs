use galaxian::entities::AlienId;
use galaxian::schedule::*;

fn descent(at: u64) -> Event {
    Event::StartDescent { started_at: at }
}

#[test]
fn empty_scheduler() {
    let mut q = Scheduler::new();
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
    assert_eq!(q.next_due(), None);
    assert_eq!(q.pop_due(u64::MAX), None);
}

#[test]
fn nothing_pops_before_due() {
    let mut q = Scheduler::new();
    q.schedule(1000, 0, descent(1000));
    assert_eq!(q.pop_due(999), None);
    assert_eq!(q.len(), 1);
    let popped = q.pop_due(1000).unwrap();
    assert_eq!(popped.due, 1000);
    assert_eq!(popped.event, descent(1000));
    assert!(q.is_empty());
}

#[test]
fn pops_earliest_first() {
    let mut q = Scheduler::new();
    q.schedule(300, 0, descent(300));
    q.schedule(100, 0, descent(100));
    q.schedule(200, 0, descent(200));
    assert_eq!(q.next_due(), Some(100));

    let order: Vec<u64> = std::iter::from_fn(|| q.pop_due(1000))
        .map(|s| s.due)
        .collect();
    assert_eq!(order, vec![100, 200, 300]);
}

#[test]
fn ties_pop_in_scheduling_order() {
    let mut q = Scheduler::new();
    for i in 0..3 {
        q.schedule(
            50,
            0,
            Event::SpawnAlienShot {
                alien: AlienId(i),
                slope: 0.0,
            },
        );
    }
    let aliens: Vec<AlienId> = std::iter::from_fn(|| q.pop_due(50))
        .map(|s| match s.event {
            Event::SpawnAlienShot { alien, .. } => alien,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(aliens, vec![AlienId(0), AlienId(1), AlienId(2)]);
}

#[test]
fn generation_is_carried_through() {
    let mut q = Scheduler::new();
    q.schedule(10, 7, descent(10));
    assert_eq!(q.pop_due(10).unwrap().generation, 7);
}

#[test]
fn drain_stops_at_first_future_event() {
    let mut q = Scheduler::new();
    q.schedule(10, 0, descent(10));
    q.schedule(20, 0, descent(20));
    q.schedule(30, 0, descent(30));
    assert!(q.pop_due(25).is_some());
    assert!(q.pop_due(25).is_some());
    assert!(q.pop_due(25).is_none());
    assert_eq!(q.next_due(), Some(30));
}
