//! CLI command implementations.

pub mod check;
pub mod fmt;
pub mod init;
pub mod merge;
