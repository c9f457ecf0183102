use crate::errors::AggregatorError;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Renders a path with `/` separators and no leading `./`, the form patterns
/// are matched against.
pub fn normalize_path(path: &Path) -> String {
    let path = path.strip_prefix(".").unwrap_or(path);
    path.to_string_lossy().replace('\\', "/")
}

/// Final component of `path`, or the empty string for roots.
pub fn bare_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// One relative path per line, trimmed, blank lines dropped.
pub fn parse_file_list<R: BufRead>(reader: R) -> Result<Vec<String>, io::Error> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            entries.push(trimmed.to_owned());
        }
    }
    Ok(entries)
}

pub fn read_file_list_from_path(path: &Path) -> Result<Vec<String>, AggregatorError> {
    let file = fs::File::open(path)
        .map_err(|e| AggregatorError::FileList(path.display().to_string(), e.to_string()))?;
    parse_file_list(BufReader::new(file))
        .map_err(|e| AggregatorError::FileList(path.display().to_string(), e.to_string()))
}

pub fn read_file_list_from_stdin() -> Result<Vec<String>, AggregatorError> {
    let stdin = io::stdin();
    parse_file_list(stdin.lock())
        .map_err(|e| AggregatorError::FileList("<stdin>".to_owned(), e.to_string()))
}

/// Strict UTF-8 read; decode failures surface as `InvalidData`.
pub fn read_file_content(path: &Path) -> Result<String, io::Error> {
    fs::read_to_string(path)
}
