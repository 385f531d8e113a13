//! khata-ingest: statement ingestion (PDF text, CSV rows) and provider grammars.

pub mod error;
pub mod extract;
pub mod grammars;
pub mod normalize;
pub mod types;

pub use error::ParseError;
pub use normalize::{ParseOptions, StatementNormalizer};
pub use types::{Provider, RawCandidate};
