//! Boxed ASCII table rendering

use crate::model::Table;

/// Formats a table as a boxed grid with the header set off by a rule
///
/// ```text
/// +--------+-------+
/// | Status | Count |
/// +--------+-------+
/// | Final  | 2     |
/// +--------+-------+
/// ```
pub fn format_pretty_table(table: &Table) -> String {
    let mut widths: Vec<usize> = table.header().iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        for (width, field) in widths.iter_mut().zip(row) {
            *width = (*width).max(field.chars().count());
        }
    }

    let rule = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let format_row = |row: &[String]| {
        let mut line = String::from("|");
        for (field, width) in row.iter().zip(&widths) {
            let padding = width - field.chars().count();
            line.push_str(&format!(" {}{} |", field, " ".repeat(padding)));
        }
        line.push('\n');
        line
    };

    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&format_row(table.header()));
    out.push_str(&rule);
    for row in table.rows() {
        out.push_str(&format_row(row));
    }
    out.push_str(&rule);
    out
}
