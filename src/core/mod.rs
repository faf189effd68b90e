pub mod filter;
pub mod profanity;
pub mod query;
pub mod search;
pub mod syllables;

pub use crate::domain::model::{
    RelationKind, SearchOutcome, SearchRequest, SyllableComparison, WordRecord,
};
pub use crate::domain::ports::{BlockList, WordSource};
pub use crate::utils::error::Result;
