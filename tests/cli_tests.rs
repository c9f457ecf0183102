use clap::{CommandFactory, Parser};
use code_aggregator::aggregate::Destination;
use code_aggregator::cli::CliArgs;
use code_aggregator::selector::FileListSource;
use std::path::PathBuf;

#[test]
fn test_fromfile_without_value_reads_stdin() {
    let args = CliArgs::parse_from(["code-aggregator", "src", "--fromfile"]);
    assert_eq!(args.selector_config().file_list, Some(FileListSource::Stdin));
}

#[test]
fn test_fromfile_with_path() {
    let args = CliArgs::parse_from(["code-aggregator", "-f", "paths.txt"]);
    assert_eq!(
        args.selector_config().file_list,
        Some(FileListSource::Path(PathBuf::from("paths.txt")))
    );
}

#[test]
fn test_repeated_and_combined_patterns() {
    let args = CliArgs::parse_from([
        "code-aggregator",
        "-P",
        "*.py|*.txt",
        "-P",
        "*.[dwc]pp",
        "-I",
        "node_modules/,dist",
    ]);
    let config = args.selector_config();
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.include, vec!["*.py|*.txt", "*.[dwc]pp"]);
    assert_eq!(config.exclude, vec!["node_modules/,dist"]);
    assert!(!config.include_hidden);
}

#[test]
fn test_destination_selection() {
    let args = CliArgs::parse_from(["code-aggregator", "-o", "out.txt"]);
    assert_eq!(args.destination(), Destination::File(PathBuf::from("out.txt")));

    let args = CliArgs::parse_from(["code-aggregator", "--clipboard"]);
    assert_eq!(args.destination(), Destination::Clipboard);

    let args = CliArgs::parse_from(["code-aggregator"]);
    assert_eq!(args.destination(), Destination::Stdout);
}

#[test]
fn test_output_conflicts_with_clipboard() {
    let result = CliArgs::try_parse_from(["code-aggregator", "-o", "x", "--clipboard"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_definition_is_consistent() {
    CliArgs::command().debug_assert();
}
