//! Output formats and terminal table rendering.

use std::fmt;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Boxed table for terminals
    #[default]
    Table,
    /// JSON array of row objects
    Json,
    /// CSV with a header row
    Csv,
    /// `mean +/- std` leaderboard in Markdown
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: table, json, csv, markdown"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Plain text table with a header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Body rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn write_rule(
        f: &mut fmt::Formatter<'_>,
        widths: &[usize],
        (left, mid, right): (char, char, char),
    ) -> fmt::Result {
        write!(f, "{left}")?;
        for (i, w) in widths.iter().enumerate() {
            write!(f, "{:─<width$}", "", width = w + 2)?;
            write!(f, "{}", if i + 1 == widths.len() { right } else { mid })?;
        }
        writeln!(f)
    }

    fn write_cells(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
        write!(f, "│")?;
        for (i, &w) in widths.iter().enumerate() {
            let cell = cells.get(i).map_or("", String::as_str);
            if i == 0 {
                write!(f, " {cell:<w$} │")?;
            } else {
                write!(f, " {cell:>w$} │")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.headers.is_empty() {
            return writeln!(f, "(empty)");
        }
        let widths = self.widths();

        Self::write_rule(f, &widths, ('┌', '┬', '┐'))?;
        Self::write_cells(f, &widths, &self.headers)?;
        Self::write_rule(f, &widths, ('├', '┼', '┤'))?;
        for row in &self.rows {
            Self::write_cells(f, &widths, row)?;
        }
        Self::write_rule(f, &widths, ('└', '┴', '┘'))
    }
}

/// Builder for [`Table`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Start an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header row.
    pub fn headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.table.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Append a body row.
    pub fn row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.table.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Finish the table.
    pub fn build(self) -> Table {
        self.table
    }
}
