//! Command implementations for the chatguard CLI.

pub mod input;
pub mod sanitize;
pub mod validate;
