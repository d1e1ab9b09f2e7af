//! Clipboard support
//!
//! Copies the classification result JSON. The system clipboard (arboard)
//! is tried first; when no clipboard service is reachable (SSH sessions,
//! bare containers) an OSC 52 escape sequence is emitted so capable
//! terminals can capture the text instead.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::TriageError;

/// Copy text to the clipboard, falling back to OSC 52.
pub fn copy(text: &str) -> Result<(), TriageError> {
    match system_copy(text) {
        Ok(()) => Ok(()),
        Err(err) => {
            log::debug!("system clipboard unavailable ({err}), trying OSC 52");
            osc52_copy(text)
        }
    }
}

fn system_copy(text: &str) -> Result<(), TriageError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| TriageError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| TriageError::Clipboard(e.to_string()))
}

/// Emit an OSC 52 sequence on stdout. The terminal owns the actual copy;
/// we can only hand it the payload.
fn osc52_copy(text: &str) -> Result<(), TriageError> {
    let encoded = STANDARD.encode(text);
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{encoded}\x07")?;
    stdout.flush()?;
    Ok(())
}
