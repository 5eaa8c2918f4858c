use crate::mach::Snapshot;
use ansi_term::Style;
use std::collections::BTreeSet;

const INSTRUCTION_COLUMN: usize = 2;

/// Render snapshots as a table with one row per snapshot: step, counter,
/// the instruction about to run, then every variable in name order.
pub fn render(snapshots: &[Snapshot], styled: bool) -> String {
    let names: BTreeSet<&str> = snapshots.iter().flat_map(|s| s.state().names()).collect();
    let mut header = vec!["STEP".to_string(), "PC".to_string(), "INSTRUCTION".to_string()];
    header.extend(names.iter().map(|name| name.to_string()));

    let mut rows: Vec<Vec<String>> = vec![];
    for (step, snapshot) in snapshots.iter().enumerate() {
        let mut row = vec![
            step.to_string(),
            snapshot.counter().to_string(),
            snapshot
                .instruction()
                .map(|i| i.to_string())
                .unwrap_or_default(),
        ];
        row.extend(names.iter().map(|name| snapshot.state().fetch(name).to_string()));
        rows.push(row);
    }

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let line = format_row(&header, &widths);
    if styled {
        out.push_str(&Style::new().bold().paint(line).to_string());
    } else {
        out.push_str(&line);
    }
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| {
            if column == INSTRUCTION_COLUMN {
                format!("{:<width$}", cell, width = *width)
            } else {
                format!("{:>width$}", cell, width = *width)
            }
        })
        .collect();
    cells.join("  ").trim_end().to_string()
}
