use crate::record::{Record, COLUMN_NAMES};

/// Renders records into a padded textual table with a header row and a dashed rule.
pub fn render_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let rows: Vec<[String; 4]> = records.into_iter().map(Record::cells).collect();

    let mut widths = COLUMN_NAMES.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(pad_row(COLUMN_NAMES.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(" "),
    );
    if rows.is_empty() {
        lines.push("(no records)".to_string());
    }
    for row in &rows {
        lines.push(pad_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}
