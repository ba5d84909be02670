//! Clipboard sink: copies item text to the host clipboard

use crate::error::ClipResult;
use crate::item::Item;
use tracing::{debug, warn};

/// Seam between the sink and the platform clipboard
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> ClipResult<()>;
}

/// OS clipboard through `arboard`. A fresh handle is opened per copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ClipResult<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

/// In-process clipboard, for tests and headless sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of times the backend was written to
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> ClipResult<()> {
        self.contents = Some(text.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// What a copy request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { chars: usize },
    NothingToCopy,
}

impl CopyOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::Copied { .. } => "Text copied to clipboard!",
            CopyOutcome::NothingToCopy => "Nothing to copy.",
        }
    }
}

#[derive(Debug, Default)]
pub struct ClipboardSink<B: ClipboardBackend = SystemClipboard> {
    backend: B,
}

impl ClipboardSink<SystemClipboard> {
    pub fn system() -> Self {
        Self::new(SystemClipboard)
    }
}

impl<B: ClipboardBackend> ClipboardSink<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy `text`; empty text never reaches the backend
    pub fn copy(&mut self, text: &str) -> ClipResult<CopyOutcome> {
        if text.is_empty() {
            debug!("Copy requested with empty text");
            return Ok(CopyOutcome::NothingToCopy);
        }

        self.backend.set_text(text).inspect_err(|e| {
            warn!("Clipboard write failed: {}", e);
        })?;

        let chars = text.chars().count();
        debug!(chars, "Copied text to clipboard");
        Ok(CopyOutcome::Copied { chars })
    }

    /// Copy every context of `item` as `label: value` lines
    pub fn copy_all(&mut self, item: &Item) -> ClipResult<CopyOutcome> {
        self.copy(&item.copy_all_text())
    }

    /// Copy the value of a single context
    pub fn copy_context(&mut self, item: &Item, index: usize) -> ClipResult<CopyOutcome> {
        match item.context(index) {
            Some(context) => self.copy(&context.value),
            None => Ok(CopyOutcome::NothingToCopy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipError;
    use crate::item::Context;

    struct BrokenClipboard;

    impl ClipboardBackend for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> ClipResult<()> {
            Err(ClipError::Clipboard("no display".into()))
        }
    }

    #[test]
    fn test_copy_empty_leaves_clipboard_untouched() {
        let mut sink = ClipboardSink::new(MemoryClipboard::new());
        sink.copy("before").unwrap();

        assert_eq!(sink.copy("").unwrap(), CopyOutcome::NothingToCopy);
        assert_eq!(sink.backend().contents(), Some("before"));
        assert_eq!(sink.backend().writes(), 1);
    }

    #[test]
    fn test_copy_reports_chars() {
        let mut sink = ClipboardSink::new(MemoryClipboard::new());
        assert_eq!(
            sink.copy("héllo").unwrap(),
            CopyOutcome::Copied { chars: 5 }
        );
        assert_eq!(sink.backend().contents(), Some("héllo"));
    }

    #[test]
    fn test_copy_all_and_context() {
        let item = Item::new(
            "Login",
            vec![Context::new("user", "ada"), Context::new("pass", "pw")],
        )
        .unwrap();
        let mut sink = ClipboardSink::new(MemoryClipboard::new());

        sink.copy_all(&item).unwrap();
        assert_eq!(sink.backend().contents(), Some("user: ada\npass: pw"));

        sink.copy_context(&item, 1).unwrap();
        assert_eq!(sink.backend().contents(), Some("pw"));

        assert_eq!(
            sink.copy_context(&item, 9).unwrap(),
            CopyOutcome::NothingToCopy
        );
    }

    #[test]
    fn test_backend_failure_is_reported() {
        let mut sink = ClipboardSink::new(BrokenClipboard);
        let err = sink.copy("text").unwrap_err();
        assert!(matches!(err, ClipError::Clipboard(_)));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            CopyOutcome::Copied { chars: 1 }.message(),
            "Text copied to clipboard!"
        );
        assert_eq!(CopyOutcome::NothingToCopy.message(), "Nothing to copy.");
    }
}
