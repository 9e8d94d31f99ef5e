//! Disqualified officer domain concerns.

pub mod disqualifications;
