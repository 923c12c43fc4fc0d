//! This module contains the data models for the poet-notifier crate.

pub mod publication;
pub mod work;

pub use publication::{PostRecord, PostStatus, PublishRequest};
pub use work::{PublishResult, WorkId};
