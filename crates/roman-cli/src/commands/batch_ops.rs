//! JSONL batch conversion.
//!
//! Each input line is `{"mode": "...", "input": <any JSON>}`. The input value
//! is handed to the core's JSON entry points untouched, so a number sent to
//! `romanToInt` (or a string sent to `intToRoman`) is a type error.

use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

use roman_core::{integer_to_roman_value, roman_to_integer_value};
use roman_session::{ConversionMode, FormError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, debug_span};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct BatchRequest {
    mode: String,
    #[serde(default)]
    input: Value,
}

/// One output line.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchRecord {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub ok: usize,
    pub failed: usize,
}

fn convert_value(mode: &str, input: &Value) -> Result<Value, FormError> {
    match mode.parse::<ConversionMode>()? {
        ConversionMode::IntToRoman => Ok(Value::String(integer_to_roman_value(input)?)),
        ConversionMode::RomanToInt => Ok(Value::from(roman_to_integer_value(input)?)),
    }
}

impl BatchRecord {
    fn failed(line: usize, error: String) -> Self {
        Self {
            line,
            mode: None,
            input: Value::Null,
            output: None,
            error: Some(error),
        }
    }
}

fn process_line(line_no: usize, line: &str) -> BatchRecord {
    let request: BatchRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => return BatchRecord::failed(line_no, format!("invalid request: {e}")),
    };

    let (output, error) = match convert_value(&request.mode, &request.input) {
        Ok(v) => (Some(v), None),
        Err(e) => (None, Some(e.to_string())),
    };
    BatchRecord {
        line: line_no,
        mode: Some(request.mode),
        input: request.input,
        output,
        error,
    }
}

/// Read one line into `buf` without its terminator, buffering at most
/// `max + 1` bytes. The rest of an over-long line is skipped.
///
/// Returns `None` at end of input, otherwise whether the line exceeded `max`.
fn read_line_bounded<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max: usize,
) -> io::Result<Option<bool>> {
    buf.clear();
    let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
    if reader.by_ref().take(limit).read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        return Ok(Some(false));
    }
    if buf.len() <= max {
        // Last line, no terminator.
        return Ok(Some(false));
    }

    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            break;
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                break;
            }
            None => {
                let n = available.len();
                reader.consume(n);
            }
        }
    }
    Ok(Some(true))
}

/// Convert every request read from `reader`, writing one JSON record per
/// request to `writer`. Blank lines and `#` comments are skipped but still
/// counted for line numbers. A bad line yields an error record and the batch
/// moves on; only I/O failures abort it.
pub fn run_batch<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    max_line_bytes: usize,
) -> Result<BatchSummary, BatchError> {
    let _span = debug_span!("run_batch", max_line_bytes).entered();
    let mut summary = BatchSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    while let Some(too_long) = read_line_bounded(&mut reader, &mut buf, max_line_bytes)? {
        line_no += 1;

        let record = if too_long {
            BatchRecord::failed(line_no, format!("line exceeds {max_line_bytes} bytes"))
        } else {
            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    process_line(line_no, trimmed)
                }
                Err(_) => {
                    debug!(line_no, "invalid UTF-8");
                    BatchRecord::failed(line_no, "invalid UTF-8".to_string())
                }
            }
        };

        if record.error.is_some() {
            summary.failed += 1;
        } else {
            summary.ok += 1;
        }
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    debug!(ok = summary.ok, failed = summary.failed, "batch done");
    Ok(summary)
}

pub fn batch_cmd(input_file: &str, output_file: &str) -> ExitCode {
    let input = die!(
        fs::File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    let output = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    let max_line_bytes = roman_session::settings::settings().batch.max_line_bytes;

    let summary = die!(
        run_batch(BufReader::new(input), BufWriter::new(output), max_line_bytes),
        "Batch failed: {}"
    );
    println!(
        "{} ok, {} failed -> {}",
        summary.ok, summary.failed, output_file
    );
    ExitCode::SUCCESS
}
