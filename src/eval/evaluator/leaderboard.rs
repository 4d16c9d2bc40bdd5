//! Leaderboard rendering and ranking of submissions

use super::report::{FinalReport, ReportRow};
use crate::eval::metric::Metric;
use std::fmt;

/// Format a metric as `mean +/- std` with two decimals.
pub fn format_mean_std(mean: f64, std: f64) -> String {
    format!("{mean:.2} +/- {std:.2}")
}

/// Which board a set of rows is shown on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Board {
    /// One board per endpoint: MAE, R2, Spearman R, Kendall's Tau
    Endpoint,
    /// Overall board from the macro average: MA-RAE, R2, Spearman R, Kendall's Tau
    Overall,
}

impl Board {
    /// Metrics shown on this board, in column order.
    pub fn metrics(self) -> [Metric; 4] {
        match self {
            Board::Endpoint => [Metric::Mae, Metric::R2, Metric::SpearmanR, Metric::KendallTau],
            Board::Overall => [Metric::Rae, Metric::R2, Metric::SpearmanR, Metric::KendallTau],
        }
    }

    /// Column header for `metric` on this board.
    pub fn header(self, metric: Metric) -> &'static str {
        match (self, metric) {
            (Board::Overall, Metric::Rae) => "MA-RAE",
            _ => metric.name(),
        }
    }
}

/// One submission as it appears on the leaderboard.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Submitter or model name
    pub name: String,
    /// Evaluation report
    pub report: FinalReport,
}

impl Entry {
    /// Macro-average RAE, the overall ranking key.
    pub fn score(&self) -> f64 {
        self.report.macro_average().mean[Metric::Rae]
    }
}

/// Submissions ranked by macro-average RAE, lowest first.
///
/// Entries with a NaN score sort last.
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    /// Ranked entries
    pub entries: Vec<Entry>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a submission and re-rank
    pub fn add(&mut self, name: impl Into<String>, report: FinalReport) {
        self.entries.push(Entry {
            name: name.into(),
            report,
        });
        self.sort();
    }

    /// Sort by macro-average RAE
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            let (sa, sb) = (a.score(), b.score());
            match (sa.is_nan(), sb.is_nan()) {
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                _ => sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal),
            }
        });
    }

    /// Best-ranked submission
    pub fn best(&self) -> Option<&Entry> {
        self.entries.first()
    }

    /// Number of submissions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the leaderboard has no submissions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cells for `board`; `endpoint` selects the row (ignored for [`Board::Overall`]).
    ///
    /// Returns `(name, cells)` per entry in rank order; entries without
    /// the endpoint are skipped.
    pub fn board_rows(&self, board: Board, endpoint: &str) -> Vec<(String, Vec<String>)> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let row = match board {
                    Board::Overall => Some(entry.report.macro_average()),
                    Board::Endpoint => entry.report.row(endpoint),
                }?;
                Some((entry.name.clone(), board_cells(board, row)))
            })
            .collect()
    }

    /// Export the overall board as a markdown table
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        if self.entries.is_empty() {
            return md;
        }
        let board = Board::Overall;

        md.push_str("| Rank | User |");
        for metric in board.metrics() {
            md.push_str(&format!(" {} |", board.header(metric)));
        }
        md.push('\n');

        md.push_str("|------|------|");
        for _ in board.metrics() {
            md.push_str("------------|");
        }
        md.push('\n');

        for (rank, (name, cells)) in self.board_rows(board, "").into_iter().enumerate() {
            md.push_str(&format!("| {} | {name} |", rank + 1));
            for cell in cells {
                md.push_str(&format!(" {cell} |"));
            }
            md.push('\n');
        }

        md
    }
}

/// `mean +/- std` cells of `row` for the metrics on `board`.
pub fn board_cells(board: Board, row: &ReportRow) -> Vec<String> {
    board
        .metrics()
        .iter()
        .map(|&m| format_mean_std(row.mean[m], row.std[m]))
        .collect()
}

/// Markdown table of one report as shown on the endpoint boards.
///
/// The macro-average row uses the overall headers.
pub fn report_to_markdown(report: &FinalReport) -> String {
    let mut md = String::new();
    let endpoint = Board::Endpoint;

    md.push_str("| Endpoint |");
    for metric in endpoint.metrics() {
        md.push_str(&format!(" {} |", endpoint.header(metric)));
    }
    md.push('\n');
    md.push_str("|----------|");
    for _ in endpoint.metrics() {
        md.push_str("------------|");
    }
    md.push('\n');

    for row in report.endpoint_rows() {
        md.push_str(&format!("| {} |", row.endpoint));
        for cell in board_cells(endpoint, row) {
            md.push_str(&format!(" {cell} |"));
        }
        md.push('\n');
    }

    let overall = Board::Overall;
    let average = report.macro_average();
    md.push_str(&format!("\n**{}**: ", average.endpoint));
    let parts: Vec<String> = overall
        .metrics()
        .iter()
        .zip(board_cells(overall, average))
        .map(|(&m, cell)| format!("{} {cell}", overall.header(m)))
        .collect();
    md.push_str(&parts.join(", "));
    md.push('\n');

    md
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "Leaderboard: (empty)");
        }

        let board = Board::Overall;
        let metrics = board.metrics();
        let rows = self.board_rows(board, "");

        let name_width = rows.iter().map(|(n, _)| n.len()).max().unwrap_or(4).max(4);
        let cell_width = rows
            .iter()
            .flat_map(|(_, cells)| cells.iter().map(String::len))
            .chain(metrics.iter().map(|&m| board.header(m).len()))
            .max()
            .unwrap_or(0);

        write!(f, "┌──────┬{:─<width$}┬", "", width = name_width + 2)?;
        for (i, _) in metrics.iter().enumerate() {
            let end = if i + 1 == metrics.len() { '┐' } else { '┬' };
            write!(f, "{:─<width$}{end}", "", width = cell_width + 2)?;
        }
        writeln!(f)?;

        write!(f, "│ Rank │ {:name_width$} │", "User")?;
        for metric in metrics {
            write!(f, " {:>cell_width$} │", board.header(metric))?;
        }
        writeln!(f)?;

        write!(f, "├──────┼{:─<width$}┼", "", width = name_width + 2)?;
        for (i, _) in metrics.iter().enumerate() {
            let end = if i + 1 == metrics.len() { '┤' } else { '┼' };
            write!(f, "{:─<width$}{end}", "", width = cell_width + 2)?;
        }
        writeln!(f)?;

        for (rank, (name, cells)) in rows.iter().enumerate() {
            write!(f, "│ {:>4} │ {name:name_width$} │", rank + 1)?;
            for cell in cells {
                write!(f, " {cell:>cell_width$} │")?;
            }
            writeln!(f)?;
        }

        write!(f, "└──────┴{:─<width$}┴", "", width = name_width + 2)?;
        for (i, _) in metrics.iter().enumerate() {
            let end = if i + 1 == metrics.len() { '┘' } else { '┴' };
            write!(f, "{:─<width$}{end}", "", width = cell_width + 2)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::bootstrap::EndpointSummary;
    use crate::eval::metric::MetricSet;

    fn report(rae: f64) -> FinalReport {
        FinalReport::from_summaries(vec![EndpointSummary {
            endpoint: "KSOL".to_string(),
            mean: MetricSet::new([0.3, rae, 0.5, 0.6, 0.45]),
            std: MetricSet::new([0.01, 0.02, 0.03, 0.04, 0.05]),
        }])
    }

    #[test]
    fn test_format_mean_std() {
        assert_eq!(format_mean_std(0.123, 0.0456), "0.12 +/- 0.05");
        assert_eq!(format_mean_std(f64::NAN, 0.0), "NaN +/- 0.00");
    }

    #[test]
    fn test_overall_board_renames_rae() {
        assert_eq!(Board::Overall.header(Metric::Rae), "MA-RAE");
        assert_eq!(Board::Endpoint.header(Metric::Rae), "RAE");
        assert_eq!(Board::Endpoint.metrics()[0], Metric::Mae);
        assert!(!Board::Overall.metrics().contains(&Metric::Mae));
    }

    #[test]
    fn test_ranking_by_macro_rae() {
        let mut board = Leaderboard::new();
        board.add("team-b", report(0.8));
        board.add("team-nan", report(f64::NAN));
        board.add("team-a", report(0.4));

        let names: Vec<&str> = board.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["team-a", "team-b", "team-nan"]);
        assert_eq!(board.best().map(|e| e.name.as_str()), Some("team-a"));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_board_rows_skip_missing_endpoint() {
        let mut board = Leaderboard::new();
        board.add("team-a", report(0.4));
        assert_eq!(board.board_rows(Board::Endpoint, "LogD").len(), 0);

        let rows = board.board_rows(Board::Endpoint, "KSOL");
        assert_eq!(rows[0].1[0], "0.30 +/- 0.01");
    }

    #[test]
    fn test_markdown() {
        let mut board = Leaderboard::new();
        assert!(board.to_markdown().is_empty());
        board.add("team-a", report(0.4));

        let md = board.to_markdown();
        assert!(md.starts_with("| Rank | User | MA-RAE | R2 |"));
        assert!(md.contains("| 1 | team-a | 0.40 +/- 0.02 |"));
    }

    #[test]
    fn test_report_markdown() {
        let md = report_to_markdown(&report(0.4));
        assert!(md.contains("| KSOL | 0.30 +/- 0.01 | 0.50 +/- 0.03 |"));
        assert!(md.contains("**Macro Average**: MA-RAE 0.40 +/- 0.02"));
    }

    #[test]
    fn test_display() {
        let mut board = Leaderboard::new();
        assert_eq!(board.to_string(), "Leaderboard: (empty)\n");
        board.add("team-a", report(0.4));
        let text = board.to_string();
        assert!(text.contains("MA-RAE"));
        assert!(text.contains("team-a"));
        assert_eq!(text.lines().count(), 5);
    }
}
