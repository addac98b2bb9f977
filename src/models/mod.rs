//! Data model types.

mod instinct;

pub use instinct::{DEFAULT_CATEGORY, DEFAULT_CONFIDENCE, Instinct, InstinctId};
