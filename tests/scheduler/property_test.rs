/*!
 * FCFS Property Tests
 * Invariants that hold for every valid batch
 */

use fcfs_sim::{compress, expand, schedule, ProcessInput, TimelineUnit};
use proptest::prelude::*;

fn batch() -> impl Strategy<Value = Vec<ProcessInput>> {
    prop::collection::vec((0u32..=500, 1u32..=500), 1..12).prop_map(|times| {
        times
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| ProcessInput::new(format!("P{}", i + 1), arrival, burst))
            .collect()
    })
}

proptest! {
    #[test]
    fn schedule_is_deterministic(processes in batch()) {
        prop_assert_eq!(schedule(&processes), schedule(&processes));
    }

    #[test]
    fn timeline_covers_makespan(processes in batch()) {
        let schedule = schedule(&processes);
        let last = schedule.results.last().unwrap();
        prop_assert_eq!(schedule.timeline.len() as u32, last.completion_time);

        // Each process owns exactly its [start, completion) window
        for result in &schedule.results {
            let window = &schedule.timeline[result.start_time as usize..result.completion_time as usize];
            prop_assert!(window.iter().all(|u| u.label() == result.id));
        }
    }

    #[test]
    fn waiting_time_is_consistent(processes in batch()) {
        for result in schedule(&processes).results {
            prop_assert!(result.start_time >= result.arrival_time);
            prop_assert_eq!(result.waiting_time, result.start_time - result.arrival_time);
            prop_assert_eq!(result.turnaround_time, result.waiting_time + result.burst_time);
            prop_assert!(result.completion_time >= result.arrival_time + result.burst_time);
        }
    }

    #[test]
    fn busy_units_equal_total_burst(processes in batch()) {
        let schedule = schedule(&processes);
        let busy = schedule.timeline.iter().filter(|u| !u.is_idle()).count() as u32;
        let total: u32 = processes.iter().map(|p| p.burst_time).sum();
        prop_assert_eq!(busy, total);
    }

    #[test]
    fn equal_arrivals_run_in_id_order(processes in batch()) {
        let results = schedule(&processes).results;
        for pair in results.windows(2) {
            prop_assert!(pair[0].arrival_time <= pair[1].arrival_time);
            if pair[0].arrival_time == pair[1].arrival_time {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn compression_round_trips(processes in batch()) {
        let timeline = schedule(&processes).timeline;
        let blocks = compress(&timeline);

        prop_assert_eq!(blocks.iter().map(|b| b.duration).sum::<u32>() as usize, timeline.len());
        prop_assert!(blocks.windows(2).all(|w| w[0].id != w[1].id));
        prop_assert_eq!(expand(&blocks), timeline);
    }

    #[test]
    fn idle_only_before_arrivals(processes in batch()) {
        let schedule = schedule(&processes);
        // The server never idles while a process has arrived and not started
        for (t, unit) in schedule.timeline.iter().enumerate() {
            if *unit == TimelineUnit::Idle {
                let t = t as u32;
                prop_assert!(schedule
                    .results
                    .iter()
                    .all(|r| r.arrival_time > t || r.start_time <= t));
            }
        }
    }
}
