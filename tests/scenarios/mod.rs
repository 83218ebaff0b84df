//! Scenario tests
//!
//! - Commands: the strict `roll` command and its errors
//! - Scanning: passive rolling in channels and private messages
//! - Concurrency: many handlers sharing one bot

pub mod concurrency;
pub mod scanning;
