use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::memory::MapSource;

#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("env_file.unreadable: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads `KEY=VALUE` pairs from a local env file.
///
/// See [`parse`] for the line format.
pub fn load(path: impl AsRef<Path>) -> Result<MapSource, EnvFileError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| EnvFileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse(&contents))
}

/// Parses env file contents.
///
/// Each line is trimmed. Blank lines and lines starting with `#` are
/// ignored, the first `=` splits key from value and both sides are trimmed.
/// Values are taken literally: no quoting, `$` expansion or inline
/// comments. Lines without `=` or with an empty key are skipped. When a key
/// repeats, the first non-empty value is kept.
pub fn parse(contents: &str) -> MapSource {
    let mut values: HashMap<String, String> = HashMap::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line
            .split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(key, _)| !key.is_empty())
        else {
            // Line content is not logged, it may hold a secret
            warn!(line = index + 1, "Skipping malformed env file line");
            continue;
        };

        if values.get(key).is_none_or(|existing| existing.is_empty()) {
            values.insert(key.to_string(), value.to_string());
        }
    }

    MapSource::new(values)
}

/// Like [`load`], but a missing or unreadable file only produces a warning
/// and an empty source.
pub fn load_or_default(path: impl AsRef<Path>) -> MapSource {
    match load(path) {
        Ok(values) => values,
        Err(e) => {
            warn!("{e}, continuing with the process environment only");
            MapSource::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layered::LayeredSource;
    use business::domain::client_config::source::ConfigSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn value(source: &MapSource, key: &str) -> Option<String> {
        source.get(key).unwrap()
    }

    #[test]
    fn should_parse_pairs_and_skip_comments() {
        let file = env_file("FOO=bar\n# comment\n\nBAZ=qux=extra\n");

        let source = load(file.path()).unwrap();

        assert_eq!(value(&source, "FOO").as_deref(), Some("bar"));
        assert_eq!(value(&source, "BAZ").as_deref(), Some("qux=extra"));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn should_not_override_existing_environment() {
        let file = env_file("FOO=bar\n# comment\n\nBAZ=qux=extra\n");
        let process: MapSource = [("FOO", "already-set")].into_iter().collect();

        let source = LayeredSource::new(process, load(file.path()).unwrap());

        assert_eq!(source.get("FOO").unwrap().as_deref(), Some("already-set"));
        assert_eq!(source.get("BAZ").unwrap().as_deref(), Some("qux=extra"));
    }

    #[test]
    fn should_keep_values_literally() {
        let source = parse("A=pa$word\nB=two words\nC=abc # tail\nD = spaced\n");

        assert_eq!(value(&source, "A").as_deref(), Some("pa$word"));
        assert_eq!(value(&source, "B").as_deref(), Some("two words"));
        assert_eq!(value(&source, "C").as_deref(), Some("abc # tail"));
        assert_eq!(value(&source, "D").as_deref(), Some("spaced"));
    }

    #[test]
    fn should_keep_quotes_as_written() {
        let source = parse("QUOTED=\"value\"\n");

        assert_eq!(value(&source, "QUOTED").as_deref(), Some("\"value\""));
    }

    #[test]
    fn should_trim_surrounding_whitespace() {
        let source = parse("   FIREBASE_PROJECT_ID =  demo  \r\n\t# indented comment\n");

        assert_eq!(value(&source, "FIREBASE_PROJECT_ID").as_deref(), Some("demo"));
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn should_keep_first_non_empty_value_for_repeated_key() {
        let source = parse("EMPTY=\nEMPTY=filled\nFOO=first\nFOO=second\n");

        assert_eq!(value(&source, "EMPTY").as_deref(), Some("filled"));
        assert_eq!(value(&source, "FOO").as_deref(), Some("first"));
    }

    #[test]
    fn should_skip_lines_without_key_or_separator() {
        let source = parse("FOO=bar\nnot a pair\n=orphan\nBAZ=qux\n");

        assert_eq!(value(&source, "FOO").as_deref(), Some("bar"));
        assert_eq!(value(&source, "BAZ").as_deref(), Some("qux"));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn should_fail_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();

        let result = load(dir.path().join(".env"));

        assert!(matches!(result, Err(EnvFileError::Unreadable { .. })));
    }

    #[test]
    fn should_fall_back_to_empty_source_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();

        let source = load_or_default(dir.path().join(".env"));

        assert!(source.is_empty());
    }
}
