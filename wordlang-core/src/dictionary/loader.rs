//! Frequency table loader
//!
//! Reads a directory holding one `<language>.txt` file per language. Each
//! file lists `word frequency` pairs separated by whitespace, normally one
//! pair per line. Blank lines and `#` comments are ignored.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use super::{FrequencyTable, LanguageDictionary};
use crate::error::{DictionaryError, Result};

/// Extension recognized as a frequency table
pub const TABLE_EXTENSION: &str = "txt";

/// Load every `*.txt` table in `dir`, keyed by file stem
pub fn load_dir(dir: impl AsRef<Path>) -> Result<LanguageDictionary> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| DictionaryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut dictionary = LanguageDictionary::new();
    for entry in entries {
        let entry = entry.map_err(|source| DictionaryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let Some(language) = language_name(&path) else {
            log::debug!("Skipping {}: not a .{TABLE_EXTENSION} file", path.display());
            continue;
        };

        let table = load_file(&path)?;
        log::debug!("Loaded {} words for '{}'", table.len(), language);
        dictionary.insert(language, table);
    }

    if dictionary.is_empty() {
        return Err(DictionaryError::Empty {
            path: dir.to_path_buf(),
        });
    }

    log::info!(
        "Loaded {} languages ({} words) from {}",
        dictionary.len(),
        dictionary.total_words(),
        dir.display()
    );
    Ok(dictionary)
}

/// Load a single table file
pub fn load_file(path: impl AsRef<Path>) -> Result<FrequencyTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(file, path.to_path_buf())
}

/// Parse `word frequency` records from a reader. `origin` is only used in
/// error messages.
pub fn parse_table<R: Read>(reader: R, origin: PathBuf) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Io {
            path: origin.clone(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |reason: String| DictionaryError::Parse {
            path: origin.clone(),
            line: idx + 1,
            reason,
        };

        let mut fields = line.split_whitespace();
        while let Some(word) = fields.next() {
            let raw = fields
                .next()
                .ok_or_else(|| parse_error(format!("missing frequency for '{word}'")))?;
            let frequency = raw
                .parse::<u64>()
                .map_err(|_| parse_error(format!("invalid frequency '{raw}' for '{word}'")))?;
            table.insert(word.to_ascii_lowercase(), frequency);
        }
    }

    Ok(table)
}

/// Language identifier for a table path, or `None` if the path is not a
/// table file
fn language_name(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    if path.extension()?.to_str()? != TABLE_EXTENSION {
        return None;
    }
    path.file_stem()?.to_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<FrequencyTable> {
        parse_table(content.as_bytes(), PathBuf::from("test.txt"))
    }

    #[test]
    fn test_parse_lines() {
        let table = parse("hello 100\nworld 50\n").unwrap();
        assert_eq!(table.get("hello"), Some(100));
        assert_eq!(table.get("world"), Some(50));
    }

    #[test]
    fn test_words_are_lowercased_and_last_wins() {
        let table = parse("Hello 1\nHELLO 2\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("hello"), Some(2));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let table = parse("# header\n\n  the 500  \n").unwrap();
        assert_eq!(table.get("the"), Some(500));
    }

    #[test]
    fn test_several_pairs_per_line() {
        let table = parse("le 10 la 9\n").unwrap();
        assert_eq!(table.get("le"), Some(10));
        assert_eq!(table.get("la"), Some(9));
    }

    #[test]
    fn test_missing_frequency() {
        let err = parse("hello 1\nworld\n").unwrap_err();
        match err {
            DictionaryError::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("missing frequency"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_frequency_rejected() {
        let err = parse("hello -3\n").unwrap_err();
        assert!(matches!(err, DictionaryError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_load_dir_uses_file_stems() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("english.txt"), "hello 100\n").unwrap();
        fs::write(dir.path().join("french.txt"), "bonjour 80\n").unwrap();
        fs::write(dir.path().join("README.md"), "not a table").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let dict = load_dir(dir.path()).unwrap();
        let langs: Vec<_> = dict.languages().collect();
        assert_eq!(langs, vec!["english", "french"]);
    }

    #[test]
    fn test_load_dir_empty() {
        let dir = TempDir::new().unwrap();
        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { .. }));
    }

    #[test]
    fn test_load_dir_missing() {
        let err = load_dir("/nonexistent/dictionaries").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn test_load_dir_reports_bad_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.txt"), "ok 1\nbad x\n").unwrap();
        let err = load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("broken.txt"));
        assert!(err.to_string().contains("line 2"));
    }
}
