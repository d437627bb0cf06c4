//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Reaper: removes expired cache entries once per TTL interval

mod reaper;

pub use reaper::spawn_reaper;
