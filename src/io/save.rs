//! Report serialisation

use crate::eval::{report_to_markdown, FinalReport};
use admet_eval_common::{AdmetError, OutputFormat, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write `report` as CSV: header row, one line per report row.
///
/// NaN cells are written empty.
pub fn write_report_csv<W: Write>(report: &FinalReport, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(FinalReport::columns())
        .map_err(|e| AdmetError::csv("writing report header", e))?;

    for row in report.rows() {
        let record = std::iter::once(row.endpoint.clone()).chain(row.values().map(|v| {
            if v.is_nan() {
                String::new()
            } else {
                v.to_string()
            }
        }));
        wtr.write_record(record)
            .map_err(|e| AdmetError::csv(format!("writing report row {}", row.endpoint), e))?;
    }

    wtr.flush()
        .map_err(|e| AdmetError::io("flushing report", e))?;
    Ok(())
}

/// Render `report` in the requested format.
pub fn render_report(report: &FinalReport, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Table => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&report.to_json_value())
            .map_err(|e| AdmetError::Serialization {
                message: format!("JSON serialization failed: {e}"),
            })?,
        OutputFormat::Markdown => report_to_markdown(report),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_report_csv(report, &mut buffer)?;
            String::from_utf8(buffer).map_err(|e| AdmetError::Serialization {
                message: format!("CSV output is not UTF-8: {e}"),
            })?
        }
    };
    Ok(text)
}

/// Save `report` to `path` in the requested format.
///
/// # Example
///
/// ```no_run
/// use admet_eval::eval::calculate_metrics;
/// use admet_eval::io::{read_table, save_report};
/// use admet_eval::OutputFormat;
///
/// let predictions = read_table("predictions.csv")?.with_name("Results file");
/// let ground_truth = read_table("test.csv")?.with_name("Test file");
/// let report = calculate_metrics(&predictions, &ground_truth)?;
/// save_report(&report, "report.csv", OutputFormat::Csv)?;
/// # Ok::<(), admet_eval::AdmetError>(())
/// ```
pub fn save_report(report: &FinalReport, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    let data = render_report(report, format)?;

    let mut file = File::create(path)
        .map_err(|e| AdmetError::io(format!("creating {}", path.display()), e))?;
    file.write_all(data.as_bytes())
        .map_err(|e| AdmetError::io(format!("writing {}", path.display()), e))?;

    log::debug!("wrote {format} report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{EndpointSummary, MetricSet};
    use tempfile::NamedTempFile;

    fn report() -> FinalReport {
        FinalReport::from_summaries(vec![EndpointSummary {
            endpoint: "Caco-2 Permeability Efflux".to_string(),
            mean: MetricSet::new([0.25, 0.5, 0.75, 0.8, 0.6]),
            std: MetricSet::new([0.01, 0.02, f64::NAN, 0.04, 0.05]),
        }])
    }

    #[test]
    fn test_csv_layout() {
        let text = render_report(&report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Endpoint,mean_MAE,mean_RAE,mean_R2"));
        assert_eq!(
            lines[1],
            "Caco-2 Permeability Efflux,0.25,0.5,0.75,0.8,0.6,0.01,0.02,,0.04,0.05"
        );
        assert!(lines[2].starts_with("Macro Average,0.25,"));
    }

    #[test]
    fn test_json_is_array_of_rows() {
        let text = render_report(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert!(value[0]["std_R2"].is_null());
    }

    #[test]
    fn test_markdown_uses_mean_std_cells() {
        let text = render_report(&report(), OutputFormat::Markdown).unwrap();
        assert!(text.contains("0.25 +/- 0.01"));
    }

    #[test]
    fn test_save_report_to_file() {
        let file = NamedTempFile::new().unwrap();
        save_report(&report(), file.path(), OutputFormat::Table).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("Macro Average"));
        assert!(content.contains('┌'));
    }
}
