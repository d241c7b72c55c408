/*!
 * Simulation Session Tests
 * Form editing, renumbering and end-to-end runs
 */

use fcfs_sim::{
    expand, RawProcessRow, SimulationSession, SimulatorConfig, TimelineUnit, ValidationError,
};
use pretty_assertions::assert_eq;

fn filled_session(rows: &[(u32, u32)]) -> SimulationSession {
    let mut session = SimulationSession::default();
    for (index, (arrival, burst)) in rows.iter().enumerate() {
        if index > 0 {
            session.add_row();
        }
        session.set_arrival(index, arrival.to_string());
        session.set_burst(index, burst.to_string());
    }
    session
}

#[test]
fn test_end_to_end_run() {
    let mut session = filled_session(&[(0, 5), (1, 3)]);
    let response = session.run().unwrap();

    assert_eq!(response.makespan, 8);
    assert_eq!(response.compressed_timeline.len(), 2);
    assert_eq!(expand(&response.compressed_timeline), response.timeline);
    assert!((response.avg_waiting - 2.0).abs() < f64::EPSILON);
    assert!((response.avg_turnaround - 6.0).abs() < f64::EPSILON);
    assert!((response.cpu_utilization - 1.0).abs() < f64::EPSILON);
    assert_eq!(response.gantt.segments[1].start, 5);
}

#[test]
fn test_results_follow_row_order() {
    let mut session = filled_session(&[(6, 1), (0, 2), (0, 1)]);
    let response = session.run().unwrap();

    let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P2", "P3"]);

    // Execution order is still arrival-then-id
    assert_eq!(response.timeline[0], TimelineUnit::Process("P2".into()));
    assert_eq!(response.timeline[2], TimelineUnit::Process("P3".into()));
    assert_eq!(response.timeline[3], TimelineUnit::Idle);
}

#[test]
fn test_remove_row_then_run() {
    let mut session = filled_session(&[(0, 1), (0, 2), (0, 3)]);
    assert!(session.remove_row(0));

    let ids: Vec<&str> = session.rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P2"]);

    let response = session.run().unwrap();
    assert_eq!(response.results[0].burst_time, 2);
    assert_eq!(response.results[1].completion_time, 5);
}

#[test]
fn test_error_clears_previous_response() {
    let mut session = filled_session(&[(0, 2)]);
    assert!(session.run().is_ok());

    session.set_arrival(0, "-1");
    assert!(matches!(
        session.run(),
        Err(ValidationError::OutOfRange { .. })
    ));
    assert!(session.response().is_none());
    assert!(session.error().is_some());

    session.set_arrival(0, "0");
    assert!(session.run().is_ok());
    assert!(session.error().is_none());
}

#[test]
fn test_custom_maximum() {
    let config = SimulatorConfig::with_max_time_unit(1000).unwrap();
    let mut session =
        SimulationSession::with_rows(config, vec![RawProcessRow::filled("x", 900, 10)]);

    assert_eq!(session.run().unwrap().makespan, 910);
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut session = filled_session(&[(3, 2), (0, 4), (3, 1)]);
    let first = session.run().unwrap().clone();
    let second = session.run().unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn test_added_row_never_repeats_a_loaded_id() {
    let mut session = SimulationSession::with_rows(
        SimulatorConfig::default(),
        vec![RawProcessRow::filled("P2", 0, 2)],
    );
    let index = session.add_row();
    session.set_arrival(index, "0");
    session.set_burst(index, "3");

    let response = session.run().unwrap();
    let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["P2", "P3"]);
    assert_eq!(response.compressed_timeline.len(), 2);
    assert_eq!(response.compressed_timeline[1].duration, 3);
}
