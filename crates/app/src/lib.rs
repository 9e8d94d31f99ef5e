//! Disqualified officers record store: domain, persistence and change
//! notification modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod notifier;

#[cfg(test)]
mod test;
