mod code;
mod harmonize;

pub use code::{normalize_code, normalize_code_in_place};
pub use harmonize::{CodeMap, HarmonizeOutcome};
