//! Simulated analyst backend.
//!
//! Stands in for a natural-language analytics service: given a topic
//! string it returns a canned SQL statement, a small result table and an
//! explanation. Selection is a case-insensitive substring match against an
//! ordered responder table; it never fails, unknown topics get a generic
//! low-confidence fallback.

pub mod insights;
pub mod responder;
pub mod types;

pub use insights::enhance;
pub use responder::resolve;
pub use types::{AnalysisMetadata, AnalysisResult, Row, Rows};
