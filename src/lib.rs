pub mod aggregate;
pub mod cli;
pub mod errors;
pub mod ignore;
pub mod logger;
pub mod patterns;
pub mod reporting;
pub mod selector;
pub mod trie;
pub mod utils;

pub use aggregate::{aggregate, build_document, AggregateDocument, Destination};
pub use errors::AggregatorError;
pub use patterns::PatternSet;
pub use selector::{select, FileListSource, SelectorConfig};
