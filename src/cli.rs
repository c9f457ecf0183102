use crate::aggregate::Destination;
use crate::selector::{FileListSource, SelectorConfig};
use clap::Parser;
use std::path::PathBuf;

/// Value of `--fromfile` meaning "read the list from stdin".
pub const STDIN_SENTINEL: &str = "-";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Gathers code files into a single delimited document for LLM prompts",
    long_about = None
)]
pub struct CliArgs {
    #[arg(default_value = ".", help = "Directory to search")]
    pub directory: PathBuf,
    #[arg(
        short = 'P',
        long = "pattern",
        help = "File patterns to include (e.g. '*.py|*.txt' or '*.py,*.txt')"
    )]
    pub patterns: Vec<String>,
    #[arg(
        short = 'I',
        long = "ignore",
        help = "File/directory patterns to exclude (e.g. 'node_modules/|__pycache__/')"
    )]
    pub ignore_patterns: Vec<String>,
    #[arg(long, help = "Also exclude the patterns listed in <directory>/.gitignore")]
    pub gitignore: bool,
    #[arg(short = 'a', long, help = "Include hidden files and directories")]
    pub all: bool,
    #[arg(short = 'o', long, help = "Write the document to this file instead of stdout")]
    pub output: Option<PathBuf>,
    #[arg(long, conflicts_with = "output", help = "Copy the document to the clipboard")]
    pub clipboard: bool,
    #[arg(
        short = 'f',
        long,
        num_args = 0..=1,
        default_missing_value = STDIN_SENTINEL,
        help = "Read relative paths from this file, or from stdin when no value is given"
    )]
    pub fromfile: Option<String>,
    #[arg(short = 'i', long, visible_alias = "verbose", help = "Show info-level logs")]
    pub info: bool,
    #[arg(long, help = "Print per-file token counts to stderr")]
    pub stats: bool,
    #[arg(long, env = "CODE_AGGREGATOR_MODEL", default_value = "gpt-4o")]
    pub model: String,
}

impl CliArgs {
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            root: self.directory.clone(),
            include: self.patterns.clone(),
            exclude: self.ignore_patterns.clone(),
            use_ignore_file: self.gitignore,
            include_hidden: self.all,
            file_list: self.fromfile.as_deref().map(|source| match source {
                STDIN_SENTINEL => FileListSource::Stdin,
                path => FileListSource::Path(PathBuf::from(path)),
            }),
        }
    }

    pub fn destination(&self) -> Destination {
        match (&self.output, self.clipboard) {
            (Some(path), _) => Destination::File(path.clone()),
            (None, true) => Destination::Clipboard,
            (None, false) => Destination::Stdout,
        }
    }
}
