use crate::error::{ClipError, ClipResult};
use serde::{Deserialize, Serialize};

/// Title given to legacy entries that never had one
pub const UNTITLED: &str = "Untitled";

/// Label of the implicit context that legacy `content` fields become
pub const CONTENT_LABEL: &str = "Content";

/// One labeled value attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub label: String,
    pub value: String,
}

impl Context {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Both label and value carry text
    pub fn is_complete(&self) -> bool {
        !self.label.is_empty() && !self.value.is_empty()
    }

    /// `label: value`, the copy-all line format
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }

    fn trimmed(self) -> Self {
        Self {
            label: self.label.trim().to_string(),
            value: self.value.trim().to_string(),
        }
    }
}

/// A stored clipboard entry.
///
/// Items are immutable once built; the only way to obtain one is through
/// [`Item::new`] or the legacy constructors, which guarantee a non-empty
/// title and at least one complete context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    contexts: Vec<Context>,
}

impl Item {
    /// Build an item from user input.
    ///
    /// Title, labels and values are trimmed; pairs missing a label or a value
    /// are dropped.
    pub fn new(title: &str, contexts: impl IntoIterator<Item = Context>) -> ClipResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ClipError::EmptyTitle);
        }

        let contexts: Vec<Context> = contexts
            .into_iter()
            .map(Context::trimmed)
            .filter(Context::is_complete)
            .collect();

        if contexts.is_empty() {
            return Err(ClipError::NoValidContexts);
        }

        Ok(Self {
            title: title.to_string(),
            contexts,
        })
    }

    /// `{title, content}` entries: one implicit `Content` context
    pub fn from_legacy_content(title: Option<&str>, content: &str) -> ClipResult<Self> {
        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => UNTITLED,
        };
        Self::from_stored(title, vec![Context::new(CONTENT_LABEL, content)])
    }

    /// Bare string entries
    pub fn from_legacy_string(content: &str) -> ClipResult<Self> {
        Self::from_legacy_content(None, content)
    }

    /// Rebuild an item read from disk. Values are kept verbatim; only
    /// incomplete pairs are dropped.
    pub(crate) fn from_stored(title: &str, contexts: Vec<Context>) -> ClipResult<Self> {
        if title.trim().is_empty() {
            return Err(ClipError::EmptyTitle);
        }
        let contexts: Vec<Context> = contexts.into_iter().filter(Context::is_complete).collect();
        if contexts.is_empty() {
            return Err(ClipError::NoValidContexts);
        }
        Ok(Self {
            title: title.to_string(),
            contexts,
        })
    }

    pub(crate) fn retitled(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn context(&self, index: usize) -> Option<&Context> {
        self.contexts.get(index)
    }

    /// Contexts rendered as `label: value` lines in stored order
    pub fn copy_all_text(&self) -> String {
        self.contexts
            .iter()
            .map(Context::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_filters() {
        let item = Item::new(
            "  Server  ",
            vec![
                Context::new(" host ", " example.org "),
                Context::new("port", ""),
                Context::new("", "orphan"),
                Context::new("user", "admin"),
            ],
        )
        .unwrap();

        assert_eq!(item.title(), "Server");
        assert_eq!(
            item.contexts(),
            &[
                Context::new("host", "example.org"),
                Context::new("user", "admin")
            ]
        );
    }

    #[test]
    fn test_new_rejects_blank_title() {
        let err = Item::new("   ", vec![Context::new("a", "b")]).unwrap_err();
        assert!(matches!(err, ClipError::EmptyTitle));
    }

    #[test]
    fn test_new_rejects_no_complete_contexts() {
        let err = Item::new("t", vec![Context::new("a", " "), Context::new("", "b")]).unwrap_err();
        assert!(matches!(err, ClipError::NoValidContexts));

        let err = Item::new("t", Vec::new()).unwrap_err();
        assert!(matches!(err, ClipError::NoValidContexts));
    }

    #[test]
    fn test_copy_all_text() {
        let item = Item::new(
            "Login",
            vec![Context::new("user", "ada"), Context::new("pass", "hunter2")],
        )
        .unwrap();
        assert_eq!(item.copy_all_text(), "user: ada\npass: hunter2");
    }

    #[test]
    fn test_legacy_string_normalizes() {
        let item = Item::from_legacy_string("just a string").unwrap();
        assert_eq!(item.title(), UNTITLED);
        assert_eq!(item.copy_all_text(), "Content: just a string");
    }

    #[test]
    fn test_legacy_content_keeps_title_and_value() {
        let item = Item::from_legacy_content(Some("Note"), "  padded  ").unwrap();
        assert_eq!(item.title(), "Note");
        assert_eq!(item.contexts()[0], Context::new(CONTENT_LABEL, "  padded  "));

        let untitled = Item::from_legacy_content(Some(""), "x").unwrap();
        assert_eq!(untitled.title(), UNTITLED);
    }

    #[test]
    fn test_legacy_empty_content_is_rejected() {
        assert!(matches!(
            Item::from_legacy_string(""),
            Err(ClipError::NoValidContexts)
        ));
    }
}
