//! Clipboard access seam
//!
//! The session controller only needs to write text. The system
//! implementation goes through cli-clipboard; headless hosts and tests use
//! the in-memory one.

use std::sync::{Arc, Mutex};

use cli_clipboard::{ClipboardContext, ClipboardProvider};

use crate::shared::error::{AppError, AppResult};

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> AppResult<()>;
}

/// System clipboard, one context per write. cli-clipboard contexts are not
/// Sync, so holding one across calls is not an option.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        let mut ctx = ClipboardContext::new()
            .map_err(|e| AppError::Clipboard(format!("Failed to open clipboard: {}", e)))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| AppError::Clipboard(format!("Failed to write clipboard: {}", e)))?;
        Ok(())
    }
}

/// In-memory clipboard for headless hosts and tests.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        match self.contents.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        let mut guard = match self.contents.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_stores_last_write() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();

        assert_eq!(clipboard.contents(), Some("second".to_string()));
    }
}
