//! JSON persistence for the item list
//!
//! The data file is a top-level JSON array. Three element shapes have been
//! written over the program's lifetime and all of them are still accepted:
//!
//! ```text
//! "plain string"                                          // v0
//! {"title": "...", "content": "..."}                      // v1
//! {"title": "...", "contexts": [...], "type": "multi_context"}
//! ```
//!
//! Every element is classified into exactly one [`StoredItem`] variant and
//! normalized into an [`Item`]. Writers always emit the `multi_context` shape.
//! Elements that cannot be read are kept verbatim and written back after the
//! items, so opening and saving a file never loses entries.

use crate::error::{ClipError, ClipResult};
use crate::item::{Context, Item, UNTITLED};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `type` tag written on every element
pub const MULTI_CONTEXT: &str = "multi_context";

/// Indentation used by files written before the indent became configurable
pub const DEFAULT_INDENT: usize = 4;

/// One array element as found on disk
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredItem {
    MultiContext {
        #[serde(default)]
        title: Option<String>,
        contexts: Vec<Value>,
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
    LegacyContent {
        #[serde(default)]
        title: Option<String>,
        content: String,
    },
    LegacyString(String),
}

#[derive(Serialize)]
struct StoredItemRef<'a> {
    title: &'a str,
    contexts: &'a [Context],
    #[serde(rename = "type")]
    kind: &'static str,
}

/// One array element as written back
#[derive(Serialize)]
#[serde(untagged)]
enum OutgoingElement<'a> {
    Item(StoredItemRef<'a>),
    Preserved(&'a Value),
}

/// Scalar label or value as text; numbers and booleans keep their JSON spelling
fn field_text(field: &Value) -> Option<String> {
    match field {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// A `{label, value}` pair, or `None` when either side is missing or not a scalar
fn read_context(raw: &Value) -> Option<Context> {
    let label = raw.get("label").and_then(field_text)?;
    let value = raw.get("value").and_then(field_text)?;
    Some(Context::new(label, value))
}

impl StoredItem {
    fn into_item(self) -> ClipResult<Item> {
        match self {
            StoredItem::MultiContext {
                title,
                contexts,
                kind,
            } => {
                if let Some(kind) = kind.as_deref().filter(|k| *k != MULTI_CONTEXT) {
                    debug!("Unknown item type tag '{}', reading as multi_context", kind);
                }
                let title = title.filter(|t| !t.trim().is_empty());
                let total = contexts.len();
                let contexts: Vec<Context> = contexts.iter().filter_map(read_context).collect();
                if contexts.len() < total {
                    warn!(
                        "Dropped {} unreadable context pair(s) of '{}'",
                        total - contexts.len(),
                        title.as_deref().unwrap_or(UNTITLED)
                    );
                }
                Item::from_stored(title.as_deref().unwrap_or(UNTITLED), contexts)
            }
            StoredItem::LegacyContent { title, content } => {
                Item::from_legacy_content(title.as_deref(), &content)
            }
            StoredItem::LegacyString(content) => Item::from_legacy_string(&content),
        }
    }
}

/// Result of decoding a data file
#[derive(Debug, Default)]
pub struct DecodedItems {
    pub items: Vec<Item>,
    /// Elements that matched no known shape or had no usable context
    pub rejected: usize,
    /// The rejected elements themselves, in file order
    pub preserved: Vec<Value>,
    /// Items whose title had to be suffixed to stay unique
    pub renamed: usize,
}

/// Decode the raw bytes of a data file.
///
/// Malformed JSON and non-array documents are reported as
/// [`ClipError::PersistenceCorrupted`]; individual bad elements are set aside
/// in [`DecodedItems::preserved`].
pub fn decode_items(bytes: &[u8], path: &Path) -> ClipResult<DecodedItems> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| ClipError::persistence_corrupted(path, e.to_string()))?;

    let Value::Array(elements) = document else {
        return Err(ClipError::persistence_corrupted(
            path,
            "top-level value is not a list",
        ));
    };

    let mut decoded = DecodedItems::default();
    let mut seen: HashSet<String> = HashSet::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        let item = StoredItem::deserialize(&element)
            .map_err(ClipError::from)
            .and_then(StoredItem::into_item);

        let item = match item {
            Ok(item) => item,
            Err(e) => {
                warn!(
                    "Keeping unreadable element {} of {} as-is: {}",
                    index,
                    path.display(),
                    e
                );
                decoded.rejected += 1;
                decoded.preserved.push(element);
                continue;
            }
        };

        let item = if seen.contains(item.title()) {
            let title = unique_title(item.title(), &seen);
            warn!(
                "Duplicate title '{}' in {}, renamed to '{}'",
                item.title(),
                path.display(),
                title
            );
            decoded.renamed += 1;
            item.retitled(title)
        } else {
            item
        };

        seen.insert(item.title().to_string());
        decoded.items.push(item);
    }

    Ok(decoded)
}

fn unique_title(base: &str, seen: &HashSet<String>) -> String {
    (2..)
        .map(|n| format!("{base} ({n})"))
        .find(|candidate| !seen.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Encode items in the current shape, followed by the `preserved` elements
/// unchanged, pretty-printed with `indent` spaces
pub fn encode_items(items: &[Item], preserved: &[Value], indent: usize) -> ClipResult<Vec<u8>> {
    let stored: Vec<OutgoingElement<'_>> = items
        .iter()
        .map(|item| {
            OutgoingElement::Item(StoredItemRef {
                title: item.title(),
                contexts: item.contexts(),
                kind: MULTI_CONTEXT,
            })
        })
        .chain(preserved.iter().map(OutgoingElement::Preserved))
        .collect();

    let indent = vec![b' '; indent];
    let mut buf = Vec::with_capacity(items.len() * 128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    stored.serialize(&mut serializer)?;
    Ok(buf)
}

/// Reads and writes the item list at a fixed path
#[derive(Debug, Clone)]
pub struct JsonPersistence {
    file_path: PathBuf,
    indent: usize,
}

impl JsonPersistence {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self::with_indent(file_path, DEFAULT_INDENT)
    }

    pub fn with_indent(file_path: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            file_path: file_path.into(),
            indent,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// `Ok(None)` when the file does not exist yet
    pub fn load(&self) -> ClipResult<Option<DecodedItems>> {
        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClipError::persistence_read(&self.file_path, e)),
        };
        decode_items(&bytes, &self.file_path).map(Some)
    }

    /// Overwrite the file with the full list plus the preserved elements
    pub fn save(&self, items: &[Item], preserved: &[Value]) -> ClipResult<()> {
        let data = encode_items(items, preserved, self.indent)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| ClipError::persistence_write(&self.file_path, e))?;
            }
        }

        fs::write(&self.file_path, data)
            .map_err(|e| ClipError::persistence_write(&self.file_path, e))
    }

    /// `<data file>.bak`
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Copy the current file next to itself before it gets overwritten
    pub fn backup(&self) -> ClipResult<PathBuf> {
        let backup = self.backup_path();
        fs::copy(&self.file_path, &backup)
            .map_err(|e| ClipError::persistence_write(&backup, e))?;
        Ok(backup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> ClipResult<DecodedItems> {
        decode_items(text.as_bytes(), Path::new("test.json"))
    }

    #[test]
    fn test_decode_all_three_shapes() {
        let decoded = decode(
            r#"[
                "plain string",
                {"title": "Old", "content": "old body"},
                {"title": "New", "contexts": [{"label": "a", "value": "1"}], "type": "multi_context"}
            ]"#,
        )
        .unwrap();

        assert_eq!(decoded.rejected, 0);
        let titles: Vec<&str> = decoded.items.iter().map(Item::title).collect();
        assert_eq!(titles, ["Untitled", "Old", "New"]);
        assert_eq!(decoded.items[0].copy_all_text(), "Content: plain string");
        assert_eq!(decoded.items[1].copy_all_text(), "Content: old body");
        assert_eq!(decoded.items[2].copy_all_text(), "a: 1");
    }

    #[test]
    fn test_decode_contexts_without_type_tag() {
        let decoded = decode(r#"[{"title": "T", "contexts": [{"label": "k", "value": "v"}]}]"#)
            .unwrap();
        assert_eq!(decoded.items.len(), 1);
        assert_eq!(decoded.items[0].title(), "T");
    }

    #[test]
    fn test_decode_drops_incomplete_contexts() {
        let decoded = decode(
            r#"[{"title": "T", "contexts": [{"label": "k"}, {"label": "x", "value": "y"}], "type": "multi_context"}]"#,
        )
        .unwrap();
        assert_eq!(decoded.items[0].contexts(), &[Context::new("x", "y")]);
    }

    #[test]
    fn test_decode_rejects_unknown_elements() {
        let decoded = decode(
            r#"[42, null, {"title": "no body"}, {"title": "empty", "contexts": []}, "", "ok"]"#,
        )
        .unwrap();
        assert_eq!(decoded.rejected, 5);
        assert_eq!(decoded.items.len(), 1);
        assert_eq!(decoded.items[0].copy_all_text(), "Content: ok");
        assert_eq!(
            decoded.preserved,
            vec![
                serde_json::json!(42),
                Value::Null,
                serde_json::json!({"title": "no body"}),
                serde_json::json!({"title": "empty", "contexts": []}),
                serde_json::json!(""),
            ]
        );
    }

    #[test]
    fn test_decode_keeps_readable_pairs_next_to_bad_ones() {
        let decoded = decode(
            r#"[{"title": "DB", "contexts": [
                {"label": "port", "value": 5432},
                {"label": "host", "value": "db"},
                {"label": "tags", "value": ["a", "b"]},
                "not a pair"
            ], "type": "multi_context"}]"#,
        )
        .unwrap();

        assert_eq!(decoded.rejected, 0);
        assert_eq!(
            decoded.items[0].contexts(),
            &[Context::new("port", "5432"), Context::new("host", "db")]
        );
    }

    #[test]
    fn test_encode_writes_preserved_elements_back() {
        let items = vec![Item::new("T", vec![Context::new("k", "v")]).unwrap()];
        let preserved = vec![serde_json::json!({"title": 7, "content": null})];
        let bytes = encode_items(&items, &preserved, DEFAULT_INDENT).unwrap();

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"title": "T", "contexts": [{"label": "k", "value": "v"}], "type": "multi_context"},
                {"title": 7, "content": null}
            ])
        );
    }

    #[test]
    fn test_backup_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = JsonPersistence::new(dir.path().join("clipboard_data.json"));
        fs::write(persistence.path(), "[\"broken").unwrap();

        let backup = persistence.backup().unwrap();
        assert_eq!(backup, dir.path().join("clipboard_data.json.bak"));
        assert_eq!(fs::read_to_string(backup).unwrap(), "[\"broken");
    }

    #[test]
    fn test_decode_disambiguates_duplicate_titles() {
        let decoded = decode(r#"["one", "two", "three", {"title": "Untitled (2)", "content": "x"}]"#)
            .unwrap();
        let titles: Vec<&str> = decoded.items.iter().map(Item::title).collect();
        assert_eq!(
            titles,
            ["Untitled", "Untitled (2)", "Untitled (3)", "Untitled (2) (2)"]
        );
        assert_eq!(decoded.renamed, 3);
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode(r#"[{"title": "trunc"#).unwrap_err();
        assert!(matches!(err, ClipError::PersistenceCorrupted { .. }));
    }

    #[test]
    fn test_decode_non_list() {
        let err = decode(r#"{"title": "x", "content": "y"}"#).unwrap_err();
        assert!(matches!(err, ClipError::PersistenceCorrupted { .. }));
    }

    #[test]
    fn test_encode_uses_current_shape() {
        let items = vec![Item::from_legacy_content(Some("Old"), "body").unwrap()];
        let bytes = encode_items(&items, &[], DEFAULT_INDENT).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\n    {\n        \"title\": \"Old\""));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "title": "Old",
                "contexts": [{"label": "Content", "value": "body"}],
                "type": "multi_context"
            }])
        );
    }

    #[test]
    fn test_encode_keeps_unicode_readable() {
        let items = vec![Item::new("Grüße", vec![Context::new("emoji", "📋")]).unwrap()];
        let text = String::from_utf8(encode_items(&items, &[], 2).unwrap()).unwrap();
        assert!(text.contains("Grüße"));
        assert!(text.contains("📋"));
    }
}
