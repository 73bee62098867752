/// Output formatting: terminal table and JSON.
use crate::simulate::SimulationReport;

/// Print the study results as a formatted terminal table.
pub fn print_table(report: &SimulationReport) {
    println!("Mode     | Students | Converged | Mean steps | Mean |err| | Mean entropy");
    println!("---------|----------|-----------|------------|------------|-------------");

    for s in &report.summaries {
        let rate = if s.students > 0 {
            s.converged as f64 / s.students as f64 * 100.0
        } else {
            0.0
        };
        let mean_steps = match s.mean_convergence_step {
            Some(steps) => format!("{steps:>10.1}"),
            None => format!("{:>10}", "-"),
        };
        println!(
            "{:<8} | {:>8} | {:>8.0}% | {} | {:>10.4} | {:>12.4}",
            s.mode.label(),
            s.students,
            rate,
            mean_steps,
            s.mean_final_error,
            s.mean_final_entropy,
        );
    }

    println!(
        "\n{} students per arm ({} abilities x {} replicates), pool of {} questions, \
         budget {} questions, convergence at |error| < {}",
        report.abilities.len() * report.students_per_ability,
        report.abilities.len(),
        report.students_per_ability,
        report.pool_size,
        report.max_questions,
        report.convergence_threshold,
    );
}

/// Print the full report (per-student outcomes included) as JSON.
pub fn print_json(report: &SimulationReport) {
    println!("{}", serde_json::to_string_pretty(report).unwrap());
}
