use code_aggregator::aggregate::{
    aggregate, build_document, write_document, Destination, DOCUMENT_SEPARATOR, HEADER_BORDER,
};
use code_aggregator::errors::AggregatorError;
use code_aggregator::selector::{select, SelectorConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use tracing_test::traced_test;

#[test]
fn test_document_format() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("file1.py");
    let second = dir.path().join("file2.js");
    fs::write(&first, "print(\"Hello\")").unwrap();
    fs::write(&second, "console.log(1);\n").unwrap();

    let document = build_document(&[first.clone(), second.clone()]);

    let expected = format!(
        "=================\n\
         {border}\n{first}\n{border}\n\
         print(\"Hello\")\n\
         \n\
         {border}\n{second}\n{border}\n\
         console.log(1);\n\
         \n\
         \n\
         =================",
        border = HEADER_BORDER,
        first = first.display(),
        second = second.display(),
    );
    assert_eq!(document.render(), expected);
    assert_eq!(document.sections().len(), 2);
}

#[test]
fn test_empty_selection_renders_separators_only() {
    let paths: Vec<PathBuf> = Vec::new();
    let document = build_document(&paths);
    assert_eq!(
        document.render(),
        format!("{DOCUMENT_SEPARATOR}\n{DOCUMENT_SEPARATOR}")
    );
}

#[test]
#[traced_test]
fn test_missing_file_is_skipped_with_warning() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("present.txt");
    let missing = dir.path().join("missing.txt");
    fs::write(&present, "here").unwrap();

    let with_missing = build_document(&[missing.clone(), present.clone()]);
    let without_missing = build_document(&[present.clone()]);

    assert_eq!(with_missing.render(), without_missing.render());
    assert!(!with_missing.render().contains("missing.txt"));
    assert!(logs_contain("File does not exist"));
}

#[test]
fn test_undecodable_file_gets_inline_error_note() {
    let dir = tempdir().unwrap();
    let binary = dir.path().join("blob.bin");
    let text = dir.path().join("after.txt");
    fs::write(&binary, b"\xff\xfe\x00\xc3").unwrap();
    fs::write(&text, "still here").unwrap();
    let reason = fs::read_to_string(&binary).unwrap_err();

    let document = build_document(&[binary.clone(), text.clone()]);

    let expected = format!(
        "=================\n\
         {border}\n{binary}\n{border}\n\
         Error reading {binary}: {reason}\n\
         \n\
         {border}\n{text}\n{border}\n\
         still here\n\
         \n\
         =================",
        border = HEADER_BORDER,
        binary = binary.display(),
        text = text.display(),
        reason = reason,
    );
    assert_eq!(document.sections().len(), 2);
    assert_eq!(document.render(), expected);
}

#[test]
fn test_write_to_file_overwrites() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.rs");
    let output = dir.path().join("out.txt");
    fs::write(&source, "fn main() {}").unwrap();
    fs::write(&output, "stale content that must disappear").unwrap();

    let document = aggregate(&[source], Destination::File(output.clone())).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, document.render());
    assert!(!written.contains("stale"));
}

#[test]
fn test_write_failure_is_returned() {
    let dir = tempdir().unwrap();
    let destination = Destination::File(dir.path().join("no/such/dir/out.txt"));

    let result = write_document("content", &destination);
    assert!(matches!(result, Err(AggregatorError::Write(_, _))));
}

#[test]
fn test_select_then_aggregate_end_to_end() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::create_dir_all(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("src/file1.py"), "print(1)").unwrap();
    fs::write(dir.path().join("node_modules/file4.py"), "print(4)").unwrap();
    fs::write(dir.path().join(".gitignore"), "node_modules/\n").unwrap();
    let output = dir.path().join("prompt.txt");

    let config = SelectorConfig {
        root: dir.path().to_path_buf(),
        use_ignore_file: true,
        ..SelectorConfig::default()
    };
    let files = select(&config).unwrap();
    aggregate(&files, Destination::File(output.clone())).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with(DOCUMENT_SEPARATOR));
    assert!(written.ends_with(DOCUMENT_SEPARATOR));
    assert!(written.contains("print(1)"));
    assert!(!written.contains("print(4)"));
    assert!(!written.contains(".gitignore"));
}
