//! Request payloads accepted by the HTTP surface.
//!
//! Each form mirrors one operation's rule set: serde handles shape and type,
//! `validator` handles simple field rules, and the `TryFrom` conversions into
//! domain types parse the canonical `YYYY-MM-DD` / `HH:MM` representations.

pub mod appointment;
pub mod consultant;
