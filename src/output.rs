use std::io::{self, Write};

/// Writes `message` to stdout and mirrors it to `writer` when one is given.
///
/// The report is informational, so a closed stdout is only logged. Errors
/// from `writer` are returned and left to the caller.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        tracing::warn!("Failed to write to stdout: {e}");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}
