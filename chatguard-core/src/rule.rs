//! Defines the `ContentRule` trait.
//!
//! A content rule inspects URL-shielded message text and reports whether it
//! is violated. The validator owns an ordered list of rules and stops at the
//! first violation, so each rule only has to answer a yes/no question about
//! the text in front of it.
//!
//! License: MIT OR APACHE 2.0

use std::fmt::Debug;

use crate::errors::RejectReason;

/// A single check applied to URL-shielded text.
pub trait ContentRule: Send + Sync + Debug {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// The rejection reported when [`violates`](ContentRule::violates) is true.
    fn reason(&self) -> RejectReason;

    /// Returns `true` if `text` breaks this rule.
    ///
    /// `text` is the output of [`url_shield::extract`](crate::url_shield::extract),
    /// so URLs appear only as `[URL_i]` placeholders.
    fn violates(&self, text: &str) -> bool;
}
