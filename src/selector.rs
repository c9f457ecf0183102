use crate::errors::AggregatorError;
use crate::ignore::build_ignore_list;
use crate::patterns::PatternSet;
use crate::utils::{bare_name, normalize_path, read_file_list_from_path, read_file_list_from_stdin};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Where an explicit candidate list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileListSource {
    Stdin,
    Path(PathBuf),
}

#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub root: PathBuf,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub use_ignore_file: bool,
    pub include_hidden: bool,
    pub file_list: Option<FileListSource>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            root: PathBuf::from("."),
            include: Vec::new(),
            exclude: Vec::new(),
            use_ignore_file: false,
            include_hidden: false,
            file_list: None,
        }
    }
}

/// Compiled selection rules for one invocation.
pub struct Selector {
    root: PathBuf,
    include: PatternSet,
    ignore: PatternSet,
    file_list: Option<FileListSource>,
}

impl Selector {
    pub fn new(config: &SelectorConfig) -> Self {
        let include = PatternSet::include(&config.include);
        debug!("Include patterns: {:?}", include.sources());
        let ignore = build_ignore_list(
            &config.root,
            &config.exclude,
            config.use_ignore_file,
            config.include_hidden,
        );

        Selector {
            root: config.root.clone(),
            include,
            ignore,
            file_list: config.file_list.clone(),
        }
    }

    /// Runs the configured mode. Only a missing search root is an error in
    /// walk mode; everything else is logged and skipped.
    pub fn select(&self) -> Result<Vec<PathBuf>, AggregatorError> {
        match &self.file_list {
            Some(source) => Ok(self.select_from_source(source)),
            None => self.walk(),
        }
    }

    fn walk(&self) -> Result<Vec<PathBuf>, AggregatorError> {
        if !self.root.is_dir() {
            return Err(AggregatorError::RootNotFound(
                self.root.display().to_string(),
            ));
        }

        let mut matched = Vec::new();
        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !is_file_entry(&entry) {
                continue;
            }

            let relative = normalize_path(
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .unwrap_or_else(|_| entry.path()),
            );
            let name = entry.file_name().to_string_lossy();

            if !self.include.is_empty() && !self.include.matches(&name) {
                debug!("Excluded by include pattern: {}", relative);
                continue;
            }
            if self.is_excluded(&relative, &name) {
                debug!("Excluded by ignore pattern: {}", relative);
                continue;
            }

            info!("Included: {}", relative);
            matched.push(entry.into_path());
        }

        Ok(matched)
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let pruned = self.ignore.matches(&entry.file_name().to_string_lossy());
        if pruned {
            debug!("Excluding directory: {}", entry.path().display());
        }
        pruned
    }

    fn is_excluded(&self, relative: &str, name: &str) -> bool {
        self.ignore.matches(relative) || self.ignore.matches(name)
    }

    fn select_from_source(&self, source: &FileListSource) -> Vec<PathBuf> {
        let entries = match source {
            FileListSource::Stdin => read_file_list_from_stdin(),
            FileListSource::Path(path) => read_file_list_from_path(path),
        };
        match entries {
            Ok(entries) => self.filter_listed(entries),
            Err(e) => {
                error!("{}", e);
                Vec::new()
            }
        }
    }

    /// Applies the walk-mode rules to an explicit list of root-relative
    /// paths. Directory components are checked the way pruning would check
    /// them. Existence is not checked here.
    pub fn filter_listed<I, S>(&self, entries: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matched = Vec::new();
        for entry in entries {
            let listed = Path::new(entry.as_ref());
            let relative = normalize_path(listed);

            if let Some(dir) = self.pruned_component(listed) {
                debug!("Excluding {} via directory {}", relative, dir);
                continue;
            }
            if !self.include.is_empty() && !self.include.matches(&relative) {
                debug!("Excluded by include pattern: {}", relative);
                continue;
            }
            if self.is_excluded(&relative, &bare_name(listed)) {
                debug!("Excluded by ignore pattern: {}", relative);
                continue;
            }

            info!("Included: {}", relative);
            matched.push(self.root.join(listed));
        }
        matched
    }

    fn pruned_component(&self, listed: &Path) -> Option<String> {
        listed
            .parent()?
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .find(|name| self.ignore.matches(name))
    }
}

fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Selects candidate files for `config`, in traversal order.
pub fn select(config: &SelectorConfig) -> Result<Vec<PathBuf>, AggregatorError> {
    Selector::new(config).select()
}
