pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::DatamuseClient;
pub use config::ClientConfig;
pub use core::{
    filter::{filter_outcome, FilteredOutcome, SyllableFilter},
    profanity::{is_blocked, EncodedBlockList},
    query::{build_queries, build_query},
    search::WordSearch,
    syllables::passes,
};
pub use domain::model::{
    parse_syllable_count, RelationKind, SearchOutcome, SearchRequest, SyllableComparison,
    WordRecord,
};
pub use domain::ports::{BlockList, WordSource};
pub use utils::error::{Result, SearchError};
