//! Delimited-text parsing with a header row and per-cell type inference
//!
//! Matches the parser configuration the dashboard always used: header
//! row present, dynamic typing enabled. Numeric cells become numbers,
//! empty cells become null, everything else stays text.

use crate::error::DatasetError;
use crate::models::{CellValue, ParseMeta, TelemetryRow, TelemetrySample};

const DELIMITER: char = ',';

/// Parse comma-delimited text into a telemetry sample.
///
/// The first non-blank row names the columns. Every data row must have
/// exactly as many fields as the header; ragged rows fail with a parse
/// error naming the offending line. Double-quoted fields may contain
/// the delimiter, and `""` inside a quoted field is a literal quote.
pub fn parse_delimited(text: &str) -> Result<TelemetrySample, DatasetError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_idx, header_line) = lines.next().ok_or_else(|| DatasetError::Parse {
        line: 1,
        reason: "missing header row".into(),
    })?;
    let fields = split_record(header_line, header_idx + 1)?;

    let mut data = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let cells = split_record(line, line_no)?;
        if cells.len() != fields.len() {
            return Err(DatasetError::Parse {
                line: line_no,
                reason: format!("expected {} fields, found {}", fields.len(), cells.len()),
            });
        }

        let row: TelemetryRow = fields
            .iter()
            .cloned()
            .zip(cells.into_iter().map(infer_cell))
            .collect();
        data.push(row);
    }

    Ok(TelemetrySample {
        data,
        meta: ParseMeta {
            fields,
            delimiter: DELIMITER,
        },
    })
}

/// Split one record into raw fields, honoring quoting.
fn split_record(line: &str, line_no: usize) -> Result<Vec<String>, DatasetError> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            '"' => {
                return Err(DatasetError::Parse {
                    line: line_no,
                    reason: "unexpected quote inside unquoted field".into(),
                });
            }
            c if c == DELIMITER && !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(DatasetError::Parse {
            line: line_no,
            reason: "unterminated quoted field".into(),
        });
    }

    cells.push(current);
    Ok(cells)
}

/// Dynamic typing for one raw cell
fn infer_cell(raw: String) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_columns() {
        let sample = parse_delimited("engine_temp,oil_pressure\n92.5,31.2\n").unwrap();
        assert_eq!(sample.meta.fields, vec!["engine_temp", "oil_pressure"]);
        assert_eq!(sample.meta.delimiter, ',');
        assert_eq!(sample.len(), 1);
    }

    #[test]
    fn test_dynamic_typing() {
        let sample = parse_delimited("a,b,c\n1.5,Engine,\n").unwrap();
        let row = &sample.data[0];
        assert_eq!(row["a"], CellValue::Number(1.5));
        assert_eq!(row["b"], CellValue::Text("Engine".into()));
        assert_eq!(row["c"], CellValue::Null);
    }

    #[test]
    fn test_negative_and_integer_numbers() {
        let sample = parse_delimited("x,y\n-3,42\n").unwrap();
        assert_eq!(sample.data[0]["x"], CellValue::Number(-3.0));
        assert_eq!(sample.data[0]["y"], CellValue::Number(42.0));
    }

    #[test]
    fn test_quoted_field_with_delimiter() {
        let sample = parse_delimited("date,notes\n2024-06-01,\"Oil changed, filter replaced\"\n")
            .unwrap();
        assert_eq!(
            sample.data[0]["notes"],
            CellValue::Text("Oil changed, filter replaced".into())
        );
        // Dates are not numbers
        assert_eq!(sample.data[0]["date"], CellValue::Text("2024-06-01".into()));
    }

    #[test]
    fn test_escaped_quote() {
        let sample = parse_delimited("a\n\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(sample.data[0]["a"], CellValue::Text("say \"hi\"".into()));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let err = parse_delimited("a,b,c\n1,2\n").unwrap_err();
        match err {
            DatasetError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 3 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unterminated_quote_is_parse_error() {
        let err = parse_delimited("a\n\"open\n").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let err = parse_delimited("").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let sample = parse_delimited("a,b\n\n1,2\n\n").unwrap();
        assert_eq!(sample.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let sample = parse_delimited("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(sample.data[0]["b"], CellValue::Number(2.0));
    }

    #[test]
    fn test_non_finite_literals_stay_text() {
        let sample = parse_delimited("a,b\nNaN,inf\n").unwrap();
        assert_eq!(sample.data[0]["a"], CellValue::Text("NaN".into()));
        assert_eq!(sample.data[0]["b"], CellValue::Text("inf".into()));
    }
}
