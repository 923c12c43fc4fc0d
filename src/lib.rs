#![warn(missing_docs)]
//! Poet Notifier registers published articles with a Po.et/Frost-style
//! content-timestamping API and tracks the returned work identifiers.

pub mod cmd;
pub mod config;
pub mod http_client;
pub mod models;
pub mod notification;
pub mod publisher;
pub mod test_helpers;
