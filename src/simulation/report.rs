/*!
 * Text Report
 * Plain-text rendering of a simulation response
 */

use super::SimulationResponse;

const HEADERS: [&str; 7] = [
    "Process",
    "Arrival",
    "Burst",
    "Start",
    "Completion",
    "Turnaround",
    "Waiting",
];

/// Results table, averages and a Gantt bar
pub fn render_report(response: &SimulationResponse, gantt_width: usize) -> String {
    let rows: Vec<[String; 7]> = response
        .results
        .iter()
        .map(|r| {
            [
                r.id.clone(),
                r.arrival_time.to_string(),
                r.burst_time.to_string(),
                r.start_time.to_string(),
                r.completion_time.to_string(),
                r.turnaround_time.to_string(),
                r.waiting_time.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        write_row(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&format!("Average waiting time:    {:.2}\n", response.avg_waiting));
    out.push_str(&format!("Average turnaround time: {:.2}\n", response.avg_turnaround));
    out.push_str(&format!(
        "Makespan: {} (idle {}, CPU utilization {:.1}%)\n",
        response.makespan,
        response.idle_time,
        response.cpu_utilization * 100.0
    ));
    out.push('\n');
    out.push_str(&response.gantt.render_text(gantt_width));
    out.push('\n');

    out
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}
