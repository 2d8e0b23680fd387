use std::fmt::Write;

use crate::report::ObjectiveReport;

fn pct_cell(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{p:.1}%"),
        None => "—".to_string(),
    }
}

/// Plain-text card for one objective report.
pub fn render_report(report: &ObjectiveReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} ({}) ---", report.title, report.period_label);
    let _ = writeln!(
        out,
        "Progress: {} [{}]",
        pct_cell(report.progress),
        report.status.label()
    );

    for kr in &report.key_results {
        let _ = writeln!(
            out,
            "  {:<40} {:>8}  w={:<4} {}{}",
            kr.title,
            pct_cell(kr.percentage),
            kr.weight,
            kr.status.label(),
            if kr.counted || kr.no_data { "" } else { " (not counted: weight)" }
        );
    }
    if report.excluded_count > 0 {
        let _ = writeln!(out, "  ({} key result(s) outside their validity window)", report.excluded_count);
    }
    out
}

pub fn print_report(report: &ObjectiveReport) {
    print!("{}", render_report(report));
}
