//! khata-core: Core types and pure logic for the khata statement engine

pub mod categorize;
pub mod dates;
pub mod taxonomy;
pub mod transaction;

pub use categorize::Categorizer;
pub use dates::{ResolvedDate, resolve_date};
pub use taxonomy::{CATEGORY_RULES, CategoryRule, FALLBACK_CATEGORY};
pub use transaction::{CategorySummary, ParseResult, RawType, Transaction};
