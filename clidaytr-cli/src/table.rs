//! One-shot board table drawing.
//!
//! Pure formatting: columns in, bordered text out. No board logic here.

use clidaytr_core::BoardColumns;

const HEADERS: [&str; 4] = ["TODO", "IN-PROGRESS", "BACKLOG", "DONE"];
const BRANDING: &str = "I LOVE GDSC";

/// Footer cells under TODO / BACKLOG / DONE (IN-PROGRESS never carries one).
pub struct Footers {
    todo: String,
    backlog: String,
    done: String,
}

impl Footers {
    /// Filtered view: board name under TODO, branding under BACKLOG.
    pub fn for_board(name: &str) -> Self {
        Self {
            todo: name.to_string(),
            backlog: BRANDING.to_string(),
            done: version_footer(),
        }
    }

    /// Full board: branding under TODO.
    pub fn full_board() -> Self {
        Self {
            todo: BRANDING.to_string(),
            backlog: String::new(),
            done: version_footer(),
        }
    }
}

fn version_footer() -> String {
    format!("v.{}", env!("CARGO_PKG_VERSION"))
}

pub fn print_board(cols: &BoardColumns, footers: &Footers) {
    let cells = [&cols.todo, &cols.in_progress, &cols.backlog, &cols.done];
    let feet = [
        footers.todo.as_str(),
        "",
        footers.backlog.as_str(),
        footers.done.as_str(),
    ];

    let widths: Vec<usize> = (0..4)
        .map(|i| {
            cells[i]
                .iter()
                .map(|line| line.chars().count())
                .chain([HEADERS[i].chars().count(), feet[i].chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule: String = {
        let spans: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", spans.join("+"))
    };

    println!("{rule}");
    print_row(&HEADERS.map(|h| h.to_string()), &widths);
    println!("{rule}");

    // one line per row; always at least one body row, even when empty
    let rows = cells.iter().map(|c| c.len()).max().unwrap_or(0).max(1);
    for r in 0..rows {
        let row: [String; 4] = std::array::from_fn(|i| {
            cells[i].get(r).cloned().unwrap_or_default()
        });
        print_row(&row, &widths);
    }

    println!("{rule}");
    print_row(&feet.map(|f| f.to_string()), &widths);
    println!("{rule}");
}

fn print_row(cells: &[String; 4], widths: &[usize]) {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    println!("{line}");
}
