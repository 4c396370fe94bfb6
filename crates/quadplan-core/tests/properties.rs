//! Property tests for ordering, time round-trips, and schedule invariants.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use quadplan_core::{
    build_schedule, minutes_to_time, order_tasks, parse_time_to_minutes, Quadrant, Task,
};

fn arb_quadrant() -> impl Strategy<Value = Quadrant> {
    prop_oneof![
        Just(Quadrant::Q1),
        Just(Quadrant::Q2),
        Just(Quadrant::Q3),
        Just(Quadrant::Q4),
    ]
}

fn arb_task() -> impl Strategy<Value = Task> {
    (arb_quadrant(), 1u32..600, 0i64..1_000_000).prop_map(|(quadrant, duration, secs)| {
        Task::new(
            "task",
            quadrant,
            duration,
            Utc.timestamp_opt(secs, 0).unwrap(),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn minutes_round_trip(m in 0u32..1440) {
        prop_assert_eq!(parse_time_to_minutes(&minutes_to_time(m)).unwrap(), m);
    }

    #[test]
    fn ordering_is_idempotent(tasks in prop::collection::vec(arb_task(), 0..20)) {
        let once = order_tasks(&tasks);
        let twice = order_tasks(&once);
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn ordering_respects_the_sort_keys(tasks in prop::collection::vec(arb_task(), 0..20)) {
        let ordered = order_tasks(&tasks);
        let key = |t: &Task| (t.quadrant.precedence(), t.created_at);
        for pair in ordered.windows(2) {
            prop_assert!(key(&pair[0]) <= key(&pair[1]));
        }
    }

    #[test]
    fn schedule_is_contiguous(
        tasks in prop::collection::vec(arb_task(), 0..20),
        start in 0u32..1440,
    ) {
        let start_time = minutes_to_time(start);
        let schedule = build_schedule(&tasks, &start_time).unwrap();

        prop_assert_eq!(schedule.len(), tasks.len());
        if let Some(first) = schedule.first() {
            prop_assert_eq!(first.start, start);
        }
        for pair in schedule.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        for entry in &schedule {
            prop_assert_eq!(entry.end - entry.start, entry.task.duration);
        }
    }
}
