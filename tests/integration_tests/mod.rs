// Integration tests are Unix-only: they start the binary with Unix temp and
// home directory conventions
#![cfg(unix)]

pub mod config;
pub mod resolve;
