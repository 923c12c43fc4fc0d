//! Command implementations for the CLI binary.

pub mod publish;
