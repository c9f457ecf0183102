use crate::errors::AggregatorError;
use crate::utils::read_file_content;
use arboard::Clipboard;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Opens and closes the whole document.
pub const DOCUMENT_SEPARATOR: &str = "=================";

/// Surrounds the path line of each file header.
pub const HEADER_BORDER: &str = "##################################";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
    Clipboard,
}

/// One file's contribution: the bordered header and the body that follows it.
#[derive(Debug, Clone)]
pub struct Section {
    pub path: PathBuf,
    pub header: String,
    pub body: String,
}

impl Section {
    fn new(path: &Path, content: String) -> Self {
        Section {
            path: path.to_path_buf(),
            header: format!("{HEADER_BORDER}\n{}\n{HEADER_BORDER}", path.display()),
            body: format!("{content}\n"),
        }
    }

    /// Header and body as they appear in the document.
    pub fn text(&self) -> String {
        format!("{}\n{}", self.header, self.body)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AggregateDocument {
    sections: Vec<Section>,
}

impl AggregateDocument {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.sections.len() * 2 + 2);
        parts.push(DOCUMENT_SEPARATOR);
        for section in &self.sections {
            parts.push(section.header.as_str());
            parts.push(section.body.as_str());
        }
        parts.push(DOCUMENT_SEPARATOR);
        parts.join("\n")
    }
}

/// Reads every path into a section. Missing files are skipped with a warning;
/// unreadable ones get an inline error note instead of their content.
pub fn build_document<P: AsRef<Path>>(paths: &[P]) -> AggregateDocument {
    let mut sections = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            warn!("File does not exist: {}", path.display());
            continue;
        }
        info!("Included: {}", path.display());

        let content = match read_file_content(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read file {}: {}", path.display(), e);
                format!("Error reading {}: {}", path.display(), e)
            }
        };
        sections.push(Section::new(path, content));
    }
    AggregateDocument { sections }
}

/// Writes the rendered document. Files are overwritten; stdout gets a
/// trailing newline.
pub fn write_document(document: &str, destination: &Destination) -> Result<(), AggregatorError> {
    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", document)
                .and_then(|_| handle.flush())
                .map_err(|e| AggregatorError::Write("<stdout>".to_owned(), e.to_string()))
        }
        Destination::File(path) => {
            fs::write(path, document)
                .map_err(|e| AggregatorError::Write(path.display().to_string(), e.to_string()))?;
            info!("Wrote output to {}", path.display());
            Ok(())
        }
        Destination::Clipboard => {
            debug!("Initializing clipboard");
            let mut clipboard =
                Clipboard::new().map_err(|e| AggregatorError::Clipboard(e.to_string()))?;
            clipboard
                .set_text(document.to_owned())
                .map_err(|e| AggregatorError::Clipboard(e.to_string()))?;
            info!("Document copied to clipboard.");
            Ok(())
        }
    }
}

pub trait Aggregator {
    fn aggregate(&self, paths: &[PathBuf]) -> Result<AggregateDocument, AggregatorError>;
}

pub struct BasicAggregator {
    destination: Destination,
}

impl BasicAggregator {
    pub fn new(destination: Destination) -> Self {
        BasicAggregator { destination }
    }
}

impl Aggregator for BasicAggregator {
    /// Builds the whole document in memory before attempting the write.
    fn aggregate(&self, paths: &[PathBuf]) -> Result<AggregateDocument, AggregatorError> {
        debug!("Aggregating {} candidate files", paths.len());
        let document = build_document(paths);
        let rendered = document.render();
        debug!("Document length: {}", rendered.len());

        write_document(&rendered, &self.destination)?;
        Ok(document)
    }
}

pub fn aggregate(
    paths: &[PathBuf],
    destination: Destination,
) -> Result<AggregateDocument, AggregatorError> {
    BasicAggregator::new(destination).aggregate(paths)
}
