//! One-shot mode: compute a single result and exit.
//!
//! Results go to `out`; the bill prompt and rejection messages go to
//! `err`, so `--json` output stays machine-readable.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::cli::{prompt_value, StartValues};
use crate::messages;
use crate::models::{RawInput, TipResult};

/// Exit code for a successful calculation
pub const EXIT_OK: u8 = 0;

/// Exit code for rejected input
pub const EXIT_INPUT_ERROR: u8 = 2;

/// Run one calculation and return the process exit code.
///
/// Prompts on `input`/`err` for the bill total when none was given.
pub fn run_once<R: BufRead, O: Write, E: Write>(
    mut start: StartValues,
    json: bool,
    input: &mut R,
    out: &mut O,
    err: &mut E,
) -> io::Result<u8> {
    if start.bill.is_empty() {
        start.bill = prompt_value(input, err, "Bill total", "")?;
    }

    let validated = match RawInput::new(&start.bill, &start.split).validate() {
        Ok(validated) => validated,
        Err(e) => {
            warn!(field = %e.field(), error = %e, "one-shot calculation rejected");
            writeln!(err, "{}", messages::rejected(e))?;
            return Ok(EXIT_INPUT_ERROR);
        }
    };

    let result = TipResult::compute(&validated, start.percent);
    if json {
        let body = serde_json::to_string_pretty(&result).map_err(io::Error::other)?;
        writeln!(out, "{}", body)?;
    } else {
        writeln!(out, "{}", messages::tip_percent_label(start.percent))?;
        writeln!(out, "{}", messages::result_message(&result))?;
    }

    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(bill: &str, split: &str, percent: u8) -> StartValues {
        StartValues {
            percent,
            split: split.to_string(),
            bill: bill.to_string(),
        }
    }

    struct Run {
        code: u8,
        stdout: String,
        stderr: String,
    }

    fn run(start: StartValues, json: bool, stdin: &str) -> Run {
        let mut input = io::Cursor::new(stdin.to_string());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_once(start, json, &mut input, &mut out, &mut err).unwrap();
        Run {
            code,
            stdout: String::from_utf8(out).unwrap(),
            stderr: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn test_once_json_success() {
        let run = run(start("100", "4", 20), true, "");
        assert_eq!(run.code, EXIT_OK);
        assert!(run.stderr.is_empty());

        let json: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
        assert_eq!(json["party_size"], 4);
        assert_eq!(json["tip_percent"], 20);
        let tip = json["tip_amount"].as_f64().unwrap();
        assert!((tip - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_once_json_prompt_goes_to_stderr() {
        let run = run(start("", "1", 15), true, "50.00\n");
        assert_eq!(run.code, EXIT_OK);
        assert_eq!(run.stderr, "Bill total: ");

        // stdout is nothing but the JSON document
        let json: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
        let total = json["total_amount"].as_f64().unwrap();
        assert!((total - 57.5).abs() < 1e-9);
    }

    #[test]
    fn test_once_text_success() {
        let run = run(start("50", "1", 15), false, "");
        assert_eq!(run.code, EXIT_OK);
        assert_eq!(run.stdout, "Tip: 15%\nTip: $7.50\nTotal: $57.50\n");
    }

    #[test]
    fn test_once_zero_split_is_rejected() {
        let run = run(start("50", "0", 15), true, "");
        assert_eq!(run.code, EXIT_INPUT_ERROR);
        assert!(run.stdout.is_empty());
        assert!(run.stderr.contains(messages::INVALID_SPLIT));
    }

    #[test]
    fn test_once_non_numeric_bill_is_rejected() {
        let run = run(start("abc", "1", 15), false, "");
        assert_eq!(run.code, EXIT_INPUT_ERROR);
        assert!(run.stdout.is_empty());
        assert!(run.stderr.contains(messages::TRY_AGAIN));
    }

    #[test]
    fn test_once_huge_bill_is_rejected() {
        let run = run(start("1e308", "1", 15), true, "");
        assert_eq!(run.code, EXIT_INPUT_ERROR);
        assert!(run.stderr.contains(messages::INVALID_BILL));
    }
}
