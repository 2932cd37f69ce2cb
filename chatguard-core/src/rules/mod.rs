//! Concrete `ContentRule` implementations.
//!
//! Each file holds one family of checks. The validator assembles them in a
//! fixed order: repetition, then diacritics, then the character-class check.
//!
//! License: MIT OR APACHE 2.0

pub mod charset;
pub mod diacritics;
pub mod repetition;

pub use charset::CharsetRule;
pub use diacritics::DiacriticRule;
pub use repetition::{CharRepeatRule, WordRepeatRule};
