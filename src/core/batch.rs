use crate::core::engine::AnalysisEngine;
use crate::domain::model::{BalanceLabel, NumberKind, Purpose, ResponseLevel};
use crate::domain::ports::ResponseFactorProvider;
use crate::domain::report::AnalysisReport;
use crate::utils::error::{EngineError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub kind: NumberKind,
    pub number_column: String,
    pub purpose_column: Option<String>,
    /// Used for rows whose purpose cell is empty or absent.
    pub default_purpose: Option<String>,
    /// Unknown purposes fall back to best-of-all instead of failing the row.
    pub purpose_fallback: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            kind: NumberKind::Phone,
            number_column: "number".to_string(),
            purpose_column: None,
            default_purpose: None,
            purpose_fallback: true,
        }
    }
}

/// One output line. Analysis columns are empty when the row failed.
#[derive(Debug, Serialize)]
pub struct BatchRecord {
    pub row: usize,
    pub input: String,
    pub normalized: String,
    pub stars: String,
    pub total_energy: Option<u32>,
    pub balance: Option<BalanceLabel>,
    pub response_level: Option<ResponseLevel>,
    pub purpose: Option<Purpose>,
    pub purpose_score: Option<u8>,
    pub quality_score: Option<u8>,
    pub error: String,
}

impl BatchRecord {
    fn from_report(row: usize, report: &AnalysisReport) -> Self {
        let primary = report.purpose.primary();
        Self {
            row,
            input: report.input.clone(),
            normalized: report.normalized.clone(),
            stars: report.star_sequence().join(" "),
            total_energy: Some(report.energy.total_energy),
            balance: Some(report.energy.balance_label),
            response_level: Some(report.energy.response_level),
            purpose: Some(primary.purpose),
            purpose_score: Some(primary.score),
            quality_score: Some(report.quality_score),
            error: String::new(),
        }
    }

    fn failed(row: usize, input: &str, error: String) -> Self {
        Self {
            row,
            input: input.to_string(),
            normalized: String::new(),
            stars: String::new(),
            total_energy: None,
            balance: None,
            response_level: None,
            purpose: None,
            purpose_score: None,
            quality_score: None,
            error,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Analyzes every row of a CSV stream and writes one summary line per row.
///
/// Only problems with the stream as a whole (unreadable header, missing
/// number column, write failure) abort the run.
pub fn run<R, W, F>(
    engine: &AnalysisEngine<F>,
    input: R,
    output: W,
    options: &BatchOptions,
) -> Result<BatchSummary>
where
    R: Read,
    W: Write,
    F: ResponseFactorProvider,
{
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let headers = reader.headers()?.clone();
    let number_idx = column_index(&headers, &options.number_column, "batch.number_column")?;
    let purpose_idx = options
        .purpose_column
        .as_deref()
        .map(|name| column_index(&headers, name, "batch.purpose_column"))
        .transpose()?;

    tracing::info!(
        number_column = %options.number_column,
        kind = options.kind.key(),
        "starting batch analysis"
    );

    let mut summary = BatchSummary::default();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        summary.total += 1;

        let line = match result {
            Ok(record) => {
                let number = record.get(number_idx).unwrap_or("");
                let purpose = purpose_idx
                    .and_then(|idx| record.get(idx))
                    .filter(|p| !p.is_empty())
                    .or(options.default_purpose.as_deref());

                let analysis = if options.purpose_fallback {
                    engine.analyze_or_fallback(number, options.kind, purpose)
                } else {
                    engine.analyze(number, options.kind, purpose)
                };

                match analysis {
                    Ok(report) => BatchRecord::from_report(row, &report),
                    Err(e) => {
                        tracing::warn!(row, input = number, error = %e, "row failed");
                        BatchRecord::failed(row, number, e.user_friendly_message())
                    }
                }
            }
            Err(e) => {
                tracing::warn!(row, error = %e, "unreadable row");
                BatchRecord::failed(row, "", EngineError::from(e).user_friendly_message())
            }
        };

        if line.error.is_empty() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
        writer.serialize(&line)?;
    }

    writer.flush()?;
    tracing::info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch analysis finished"
    );
    Ok(summary)
}

pub fn run_files<F: ResponseFactorProvider>(
    engine: &AnalysisEngine<F>,
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    let input = File::open(input_path.as_ref())?;
    if let Some(parent) = output_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let output = File::create(output_path.as_ref())?;
    run(engine, input, output, options)
}

fn column_index(headers: &csv::StringRecord, name: &str, field: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| EngineError::ConfigValidationError {
            field: field.to_string(),
            message: format!("column '{}' not found in input header", name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(input: &str, options: &BatchOptions) -> (BatchSummary, String) {
        let engine = AnalysisEngine::default();
        let mut out = Vec::new();
        let summary = run(&engine, input.as_bytes(), &mut out, options).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_failing_rows_do_not_abort() {
        let input = "name,number\nan,0912345678\nbinh,123\nchi,+84987654321\n";
        let (summary, out) = run_str(input, &BatchOptions::default());

        assert_eq!(
            summary,
            BatchSummary {
                total: 3,
                succeeded: 2,
                failed: 1
            }
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("row,input,normalized,stars"));
        assert!(lines[2].contains("not a valid length"));
        assert!(lines[3].contains("0987654321"));
    }

    #[test]
    fn test_purpose_column_and_fallback() {
        let input = "number,purpose\n0912345678,career\n0912345678,luck\n0912345678,\n";
        let options = BatchOptions {
            purpose_column: Some("purpose".to_string()),
            default_purpose: Some("wealth".to_string()),
            ..BatchOptions::default()
        };
        let (summary, out) = run_str(input, &options);
        assert_eq!(summary.failed, 0);

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains(",career,"));
        assert!(lines[3].contains(",wealth,"));
    }

    #[test]
    fn test_strict_purpose_fails_row() {
        let input = "number,purpose\n0912345678,luck\n";
        let options = BatchOptions {
            purpose_column: Some("purpose".to_string()),
            purpose_fallback: false,
            ..BatchOptions::default()
        };
        let (summary, out) = run_str(input, &options);
        assert_eq!(summary.failed, 1);
        assert!(out.contains("not a purpose"));
    }

    #[test]
    fn test_missing_number_column() {
        let engine = AnalysisEngine::default();
        let mut out = Vec::new();
        let err = run(&engine, "phone\n0912345678\n".as_bytes(), &mut out, &BatchOptions::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::ConfigValidationError { .. }));
    }
}
