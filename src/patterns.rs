use glob::Pattern;
use tracing::{debug, warn};

/// Separators accepted between patterns inside a single user-supplied token.
const TOKEN_SEPARATORS: &[char] = &['|', ','];

/// A flat set of shell-style globs, matched with OR semantics.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    sources: Vec<String>,
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Builds an include set. Tokens are split on `|` and `,`.
    pub fn include<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_patterns(expand_tokens(tokens))
    }

    /// Builds an exclude set. Like [`PatternSet::include`], but each pattern
    /// also loses one trailing path separator so `node_modules/` behaves like
    /// `node_modules`.
    pub fn exclude<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_patterns(
            expand_tokens(tokens)
                .into_iter()
                .map(|p| strip_trailing_separator(&p).to_owned())
                .filter(|p| !p.is_empty()),
        )
    }

    fn from_patterns<I: IntoIterator<Item = String>>(patterns: I) -> Self {
        let mut set = PatternSet::default();
        set.extend(patterns);
        set
    }

    /// Appends already-normalized patterns, keeping their order.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, patterns: I) {
        for source in patterns {
            let compiled = match Pattern::new(&source) {
                Ok(pattern) => pattern,
                Err(e) => {
                    warn!("Invalid glob pattern '{}' ({}), matching it literally", source, e);
                    match Pattern::new(&Pattern::escape(&source)) {
                        Ok(pattern) => pattern,
                        Err(e) => {
                            warn!("Dropping unusable pattern '{}': {}", source, e);
                            continue;
                        }
                    }
                }
            };
            debug!("Compiled pattern: {}", source);
            self.patterns.push(compiled);
            self.sources.push(source);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// The pattern strings in insertion order, after normalization.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// True when any pattern matches `candidate`. `*` also crosses `/`, the
    /// same way `fnmatch` treats path strings.
    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(candidate))
    }
}

/// Flattens user tokens such as `"*.py|*.txt"` or `"a,b"` into single globs.
pub fn expand_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .flat_map(|token| {
            token
                .as_ref()
                .split(TOKEN_SEPARATORS)
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn strip_trailing_separator(pattern: &str) -> &str {
    pattern
        .strip_suffix('/')
        .or_else(|| pattern.strip_suffix('\\'))
        .unwrap_or(pattern)
}
