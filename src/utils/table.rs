//! Table rendering utilities for CLI outputs.
//! Widths are measured in terminal columns with ANSI escapes removed, so
//! coloured cells and currency symbols line up.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right_align: false,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_line(&mut out, &header);

        let rule_width: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(rule_width));
        out.push('\n');

        for row in &self.rows {
            self.render_line(&mut out, row);
        }

        out
    }

    fn render_line(&self, out: &mut String, cells: &[String]) {
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = " ".repeat(col.width.saturating_sub(UnicodeWidthStr::width(strip_ansi(cell).as_str())));
            if col.right_align {
                out.push_str(&pad);
                out.push_str(cell);
            } else {
                out.push_str(cell);
                out.push_str(&pad);
            }
            out.push(' ');
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        let mut t = Table::new(vec![Column::left("A", 3), Column::right("B", 6)]);
        t.add_row(vec!["x".into(), "€1.00".into()]);
        let rendered = t.render();
        let last = rendered.lines().last().unwrap();
        assert_eq!(last, "x    €1.00 ");
    }

    #[test]
    fn ignores_ansi_codes_when_padding() {
        let mut t = Table::new(vec![Column::left("A", 4)]);
        t.add_row(vec!["\x1b[31mab\x1b[0m".into()]);
        let rendered = t.render();
        let last = strip_ansi(rendered.lines().last().unwrap());
        assert_eq!(last, "ab   ");
    }
}
