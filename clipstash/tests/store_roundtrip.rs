use clipstash::{ClipboardSink, Context, ItemStore, LoadReport, MemoryClipboard, StoreConfig};
use std::fs;

fn ctx(label: &str, value: &str) -> Context {
    Context::new(label, value)
}

#[test]
fn save_then_load_reproduces_the_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipboard_data.json");

    let (mut store, report) = ItemStore::open(&path);
    assert_eq!(report, LoadReport::Missing);
    store
        .add_item("Database", vec![ctx("host", "db.internal"), ctx("port", "5432")])
        .unwrap();
    store.add_item("Greeting", vec![ctx("en", "hello")]).unwrap();
    store
        .add_item("Unicode", vec![ctx("jp", "こんにちは"), ctx("quote", "say \"hi\"\n")])
        .unwrap();
    store.save().unwrap();

    let (reloaded, report) = ItemStore::open(&path);
    assert_eq!(
        report,
        LoadReport::Loaded {
            items: 3,
            rejected: 0,
            renamed: 0
        }
    );
    assert_eq!(reloaded.list_items(), store.list_items());
}

#[test]
fn legacy_string_file_copies_as_content_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipboard_data.json");
    fs::write(&path, r#"["just a string"]"#).unwrap();

    let (store, _) = ItemStore::open(&path);
    assert_eq!(store.len(), 1);

    let mut sink = ClipboardSink::new(MemoryClipboard::new());
    sink.copy_all(&store.list_items()[0]).unwrap();
    assert_eq!(sink.backend().contents(), Some("Content: just a string"));
}

#[test]
fn legacy_file_is_rewritten_in_current_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipboard_data.json");
    fs::write(
        &path,
        r#"["bare", {"title": "Old note", "content": "remember the milk"}]"#,
    )
    .unwrap();

    let (store, _) = ItemStore::open(&path);
    store.save().unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([
            {
                "title": "Untitled",
                "contexts": [{"label": "Content", "value": "bare"}],
                "type": "multi_context"
            },
            {
                "title": "Old note",
                "contexts": [{"label": "Content", "value": "remember the milk"}],
                "type": "multi_context"
            }
        ])
    );
}

#[test]
fn truncated_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipboard_data.json");
    fs::write(&path, r#"[{"title": "cut off", "contexts": [{"lab"#).unwrap();

    let (store, report) = ItemStore::open(&path);
    assert!(report.is_recovered());
    assert!(store.list_items().is_empty());
}

#[test]
fn non_list_document_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipboard_data.json");
    fs::write(&path, r#"{"items": []}"#).unwrap();

    let (store, report) = ItemStore::open(&path);
    assert!(report.is_recovered());
    assert!(store.is_empty());
}

#[test]
fn config_controls_location_and_indent() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_file: dir.path().join("nested").join("items.json"),
        indent: 2,
    };

    let (mut store, _) = ItemStore::with_config(&config);
    store.add_item("t", vec![ctx("k", "v")]).unwrap();

    let text = fs::read_to_string(&config.data_file).unwrap();
    assert!(text.starts_with("[\n  {\n    \"title\": \"t\""));
}

#[test]
fn deleting_and_reloading_stays_consistent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipboard_data.json");

    let (mut store, _) = ItemStore::open(&path);
    store.add_item("a", vec![ctx("x", "1")]).unwrap();
    let b = store.add_item("b", vec![ctx("y", "2")]).unwrap().clone();
    store.add_item("c", vec![ctx("z", "3")]).unwrap();
    store.delete_item(&b).unwrap();

    let (reloaded, _) = ItemStore::open(&path);
    let titles: Vec<&str> = reloaded.list_items().iter().map(|i| i.title()).collect();
    assert_eq!(titles, ["a", "c"]);
}

#[test]
fn open_and_save_keeps_entries_with_bad_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipboard_data.json");
    fs::write(
        &path,
        r#"[{"title":"DB","contexts":[{"label":"port","value":5432},{"label":"host","value":"db"}],"type":"multi_context"}]"#,
    )
    .unwrap();

    let (store, report) = ItemStore::open(&path);
    assert_eq!(
        report,
        LoadReport::Loaded {
            items: 1,
            rejected: 0,
            renamed: 0
        }
    );
    store.save().unwrap();

    let (reloaded, _) = ItemStore::open(&path);
    let item = reloaded.get("DB").unwrap();
    assert_eq!(item.contexts(), &[ctx("port", "5432"), ctx("host", "db")]);
}

#[test]
fn unreadable_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();

    // The data path names a directory, so the read itself fails
    let (store, report) = ItemStore::open(dir.path());
    assert!(report.is_recovered());
    assert!(store.is_empty());
    match report {
        LoadReport::Recovered { reason, backup } => {
            assert!(reason.contains("Failed to read"), "{reason}");
            assert!(backup.is_none());
        }
        other => panic!("unexpected report: {other:?}"),
    }
}
