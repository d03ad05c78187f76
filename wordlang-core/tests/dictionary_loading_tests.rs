//! Loading frequency tables from disk and detecting with them

use std::fs;
use tempfile::TempDir;
use wordlang_core::dictionary::load_dir;
use wordlang_core::{DictionaryError, LanguageDetector};

fn write_dictionaries(dir: &TempDir) {
    fs::write(
        dir.path().join("english.txt"),
        "# most common English words\nthe 500\nand 400\nhello 100\nworld 50\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("french.txt"),
        "le 500\nla 450\nbonjour 80\nmonde 40\n",
    )
    .unwrap();
}

#[test]
fn test_load_and_detect() {
    let dir = TempDir::new().unwrap();
    write_dictionaries(&dir);

    let dict = load_dir(dir.path()).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get("english").unwrap().get("hello"), Some(100));

    let detector = LanguageDetector::new(dict);
    assert_eq!(detector.detect("Hello, world!").as_deref(), Some("english"));
    assert_eq!(detector.detect("Bonjour le monde").as_deref(), Some("french"));
}

#[test]
fn test_uppercase_entries_are_folded() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("german.txt"), "Hallo 60\nWelt 20\n").unwrap();

    let detector = LanguageDetector::new(load_dir(dir.path()).unwrap());
    assert_eq!(
        detector.score("hallo welt").get("german"),
        Some((10 + 60) + (10 + 20))
    );
}

#[test]
fn test_malformed_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.txt"), "hello many\n").unwrap();

    match load_dir(dir.path()) {
        Err(DictionaryError::Parse { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("invalid frequency 'many'"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
