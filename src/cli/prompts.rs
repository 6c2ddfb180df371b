//! User prompt functions for one-shot CLI input.

use std::io::{self, BufRead, Write};

/// Prompt for a value, keeping `default` when the answer is empty
pub fn prompt_value<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> io::Result<String> {
    if default.is_empty() {
        write!(output, "{}: ", label)?;
    } else {
        write!(output, "{} [{}]: ", label, default)?;
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let line = line.trim();
    if line.is_empty() {
        return Ok(default.to_string());
    }
    Ok(line.to_string())
}
