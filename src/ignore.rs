use crate::patterns::{strip_trailing_separator, PatternSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Implicit pattern that hides dot-prefixed entries.
pub const HIDDEN_PATTERN: &str = ".*";

/// Builds the exclusion list in order: explicit patterns, ignore-file
/// patterns, then the hidden-entry pattern.
pub fn build_ignore_list<S: AsRef<str>>(
    root: &Path,
    explicit: &[S],
    use_ignore_file: bool,
    include_hidden: bool,
) -> PatternSet {
    let mut ignore = PatternSet::exclude(explicit);
    debug!("Normalized ignore patterns: {:?}", ignore.sources());

    if use_ignore_file {
        let from_file = load_ignore_file(root);
        debug!("Loaded {} patterns: {:?}", IGNORE_FILE_NAME, from_file);
        ignore.extend(from_file);
    }

    if !include_hidden {
        ignore.extend([HIDDEN_PATTERN.to_owned()]);
    }

    info!("Final ignore patterns: {:?}", ignore.sources());
    ignore
}

/// Reads `<root>/.gitignore`. A missing or unreadable file contributes nothing.
pub fn load_ignore_file(root: &Path) -> Vec<String> {
    let path = root.join(IGNORE_FILE_NAME);
    match fs::read_to_string(&path) {
        Ok(content) => parse_ignore_lines(&content),
        Err(e) => {
            debug!("No usable ignore file at {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// One pattern per line; blank lines and `#` comments are skipped and a
/// trailing `/` is removed.
pub fn parse_ignore_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| strip_trailing_separator(line).to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}
