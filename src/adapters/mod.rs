// Adapters layer: concrete implementations of the domain ports.

pub mod datamuse;

pub use datamuse::DatamuseClient;
