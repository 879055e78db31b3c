pub mod casing;
pub mod phrases;
pub mod stats;

pub use casing::CaseRule;
pub use phrases::{segment_phrases, PhraseMatch, PlagiarismReport};
pub use stats::{analyze, TextStatistics};
