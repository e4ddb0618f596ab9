//! Copying posts out of the feed via the system clipboard (`arboard`)
//!
//! A clipboard handle is opened per copy. Headless sessions have no display
//! server, so this fails there and the caller shows a toast instead.

use anyhow::{bail, Context, Result};
use arboard::Clipboard;

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Nothing to copy");
    }

    Clipboard::new()
        .context("Clipboard unavailable")?
        .set_text(text.to_owned())
        .context("Failed to write to clipboard")
}
