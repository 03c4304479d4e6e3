//! Report rendering

use crate::report::{DayRecord, PartRecord, Report};
use chrono::TimeDelta;
use itertools::Itertools;

const HEADER: [&str; 5] = ["day", "part 1", "part 1 time", "part 2", "part 2 time"];

/// Output formatter for a finished Report
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the Report: the table and totals, or only the answers when quiet
    pub fn print_report(&self, report: &Report) {
        if self.quiet {
            self.print_quiet(report);
        } else {
            self.print_full(report);
        }
    }

    /// Print in quiet mode (just the answers)
    fn print_quiet(&self, report: &Report) {
        for part in report.entries().values().flat_map(|r| &r.parts) {
            match &part.answer {
                Ok(answer) => println!("{}", answer),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
    }

    fn print_full(&self, report: &Report) {
        print!("{}", render_table(report));
        println!();
        println!("Total time: {}", format_duration(report.total()));
        println!("{}", summary_line(report));
        if let Some(key) = report.halted_at() {
            println!("Stopped after {} (--fail-fast)", key);
        }

        for (key, part, e) in report.failures() {
            eprintln!("{} part {}: {}", key, part, e);
        }
    }
}

/// Render the Report as a table, one block of lines per day
///
/// A multi-line answer stretches its day over several lines.
pub fn render_table(report: &Report) -> String {
    let rows: Vec<[String; 5]> = report.entries().values().map(row_cells).collect();

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            let cell_width = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            *width = (*width).max(cell_width);
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADER, &widths);
    out.push_str(&widths.iter().map(|&w| "-".repeat(w)).join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// One-line count of solved and failed parts
pub fn summary_line(report: &Report) -> String {
    format!(
        "Parts: {} solved, {} failed",
        report.solved(),
        report.failures().count()
    )
}

fn row_cells(record: &DayRecord) -> [String; 5] {
    let (answer_1, time_1) = part_cells(record.part(1));
    let (answer_2, time_2) = part_cells(record.part(2));
    [record.key.to_string(), answer_1, time_1, answer_2, time_2]
}

/// Answer and time cells; "-" for a part that was not selected
fn part_cells(part: Option<&PartRecord>) -> (String, String) {
    match part {
        None => ("-".to_string(), "-".to_string()),
        Some(part) => {
            let answer = match &part.answer {
                Ok(answer) => answer.clone(),
                Err(_) => "error".to_string(),
            };
            (answer, format_duration(part.duration))
        }
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let height = cells
        .iter()
        .map(|c| c.as_ref().lines().count())
        .max()
        .unwrap_or(0)
        .max(1);

    for line in 0..height {
        let rendered = cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| {
                let text = cell.as_ref().lines().nth(line).unwrap_or("");
                format!("{:<width$}", text)
            })
            .join(" | ");
        out.push_str(rendered.trim_end());
        out.push('\n');
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
