//! Table formatting utilities for CLI output.

use dqsus_core::TableData;

/// Widest a rendered cell is allowed to be.
const MAX_CELL_WIDTH: usize = 32;

/// Truncates a cell to a maximum width, adding "..." if needed.
///
/// Width is counted in characters, so accented values in the raw data
/// never split mid-character.
///
/// # Examples
///
/// ```rust
/// use dqsus_cli::presentation::truncate_cell;
///
/// assert_eq!(truncate_cell("dengue", 10), "dengue");
/// assert_eq!(truncate_cell("notification_number", 10), "notific...");
/// ```
#[must_use]
pub fn truncate_cell(value: &str, max_width: usize) -> String {
    if value.chars().count() <= max_width {
        return value.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut truncated: String = value.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Render a table as aligned text columns with a separator under the
/// header. Missing cells render as empty.
#[must_use]
pub fn render_table(data: &TableData) -> String {
    let headers: Vec<String> = data
        .headers()
        .iter()
        .map(|header| truncate_cell(header, MAX_CELL_WIDTH))
        .collect();

    let rows: Vec<Vec<String>> = data
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate_cell(cell.as_deref().unwrap_or(""), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[index].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
