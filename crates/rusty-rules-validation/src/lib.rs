//! Rusty-Rules-Validation Core
//!
//! Pure predicate functions behind the `rusty-rules` default rule set.
//! Every function takes the candidate value as `&str` (plus the raw rule
//! parameter where the rule has one) and answers with a plain `bool`.
//! Nothing here panics on bad input: an unparseable number, an invalid
//! regex or a malformed date is simply a failed check.

pub mod collection;
pub mod date;
pub mod format;
pub mod network;
pub mod numeric;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use date::*;
pub use format::*;
pub use network::*;
pub use numeric::*;
pub use string::*;
