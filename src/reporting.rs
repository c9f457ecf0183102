use crate::aggregate::AggregateDocument;
use crate::errors::AggregatorError;
use crate::trie::{PathNode, PathTrie};
use std::path::{Path, PathBuf};
use tiktoken_rs::get_bpe_from_model;
use tracing::{debug, trace};

/// Token count of every emitted section, in document order.
pub fn count_section_tokens(
    document: &AggregateDocument,
    model: &str,
) -> Result<Vec<(PathBuf, usize)>, AggregatorError> {
    let tokenizer =
        get_bpe_from_model(model).map_err(|e| AggregatorError::Tokenizer(e.to_string()))?;

    Ok(document
        .sections()
        .iter()
        .map(|section| {
            let token_count = tokenizer.encode_ordinary(&section.text()).len();
            trace!("File {} has {} tokens", section.path.display(), token_count);
            (section.path.clone(), token_count)
        })
        .collect())
}

/// Renders the counts as a tree under `root`, with an overall total first.
pub fn render_stats(root: &Path, token_counts: &[(PathBuf, usize)]) -> Vec<String> {
    debug!("Rendering statistics for {} files", token_counts.len());
    let mut trie = PathTrie::new();
    let mut total_tokens = 0;

    for (path, token_count) in token_counts {
        let relative = path.strip_prefix(root).unwrap_or(path);
        trie.insert(relative, *token_count);
        total_tokens += token_count;
    }

    let mut lines = vec![format!(
        "Overall ({} tokens, {} files)",
        total_tokens,
        trie.root().file_count()
    )];
    render_tree(trie.root(), "", &mut lines);
    lines
}

fn render_tree(node: &PathNode, prefix: &str, lines: &mut Vec<String>) {
    let child_count = node.children().count();

    for (i, (name, child)) in node.children().enumerate() {
        let is_last_child = i + 1 == child_count;
        let connector = if is_last_child { "┗━━" } else { "┣━━" };

        match child.tokens() {
            Some(tokens) if child.is_leaf() => {
                lines.push(format!("{prefix}{connector} {name} ({tokens} tokens)"));
            }
            _ => {
                lines.push(format!(
                    "{prefix}{connector} {name}/ ({} tokens, {} files)",
                    child.total_tokens(),
                    child.file_count()
                ));
                let new_prefix = format!("{}{}    ", prefix, if is_last_child { " " } else { "┃" });
                render_tree(child, &new_prefix, lines);
            }
        }
    }
}
