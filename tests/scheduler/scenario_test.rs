/*!
 * FCFS Scenario Tests
 * Worked examples for timelines, metrics and tie-breaking
 */

use fcfs_sim::{compress, schedule, ProcessInput, TimelineBlock, TimelineUnit};
use pretty_assertions::assert_eq;

fn p(id: &str) -> TimelineUnit {
    TimelineUnit::Process(id.to_string())
}

fn repeat(unit: TimelineUnit, n: usize) -> Vec<TimelineUnit> {
    vec![unit; n]
}

#[test]
fn test_back_to_back_arrivals() {
    let schedule = schedule(&[ProcessInput::new("P1", 0, 5), ProcessInput::new("P2", 1, 3)]);

    let mut expected = repeat(p("P1"), 5);
    expected.extend(repeat(p("P2"), 3));
    assert_eq!(schedule.timeline, expected);

    let p1 = &schedule.results[0];
    assert_eq!((p1.completion_time, p1.waiting_time, p1.turnaround_time), (5, 0, 5));

    let p2 = &schedule.results[1];
    assert_eq!((p2.completion_time, p2.waiting_time, p2.turnaround_time), (8, 4, 7));
}

#[test]
fn test_idle_gap_before_first_arrival() {
    let schedule = schedule(&[ProcessInput::new("P1", 2, 3)]);

    let mut expected = repeat(TimelineUnit::Idle, 2);
    expected.extend(repeat(p("P1"), 3));
    assert_eq!(schedule.timeline, expected);

    let p1 = &schedule.results[0];
    assert_eq!((p1.completion_time, p1.waiting_time, p1.turnaround_time), (5, 0, 3));

    assert_eq!(
        compress(&schedule.timeline),
        vec![
            TimelineBlock::new(TimelineUnit::Idle, 2),
            TimelineBlock::new(p("P1"), 3),
        ]
    );
}

#[test]
fn test_simultaneous_arrivals_run_in_id_order() {
    let schedule = schedule(&[ProcessInput::new("P2", 0, 2), ProcessInput::new("P1", 0, 2)]);

    assert_eq!(schedule.results[0].id, "P1");
    assert_eq!(schedule.results[0].completion_time, 2);
    assert_eq!(schedule.results[1].id, "P2");
    assert_eq!(schedule.results[1].completion_time, 4);
    assert_eq!(&schedule.timeline[..2], &[p("P1"), p("P1")]);
}

#[test]
fn test_late_arrival_after_busy_period() {
    let schedule = schedule(&[
        ProcessInput::new("P1", 0, 3),
        ProcessInput::new("P2", 1, 2),
        ProcessInput::new("P3", 10, 1),
    ]);

    assert_eq!(
        compress(&schedule.timeline),
        vec![
            TimelineBlock::new(p("P1"), 3),
            TimelineBlock::new(p("P2"), 2),
            TimelineBlock::new(TimelineUnit::Idle, 5),
            TimelineBlock::new(p("P3"), 1),
        ]
    );
    assert_eq!(schedule.results[2].start_time, 10);
    assert_eq!(schedule.results[2].waiting_time, 0);
}

#[test]
fn test_maximum_bounds() {
    let schedule = schedule(&[ProcessInput::new("P1", 500, 500)]);
    assert_eq!(schedule.makespan(), 1000);
    assert_eq!(schedule.results[0].turnaround_time, 500);
}
