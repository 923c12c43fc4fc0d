//! Registers a single article from the command line.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use thiserror::Error;

use crate::{
    config::AppConfig,
    http_client::create_http_client,
    models::PostRecord,
    notification::PublishNotifier,
    publisher::{InMemoryWorkIdStore, PublishOutcome, PublishService, PublisherError},
};

/// Errors for the publish command.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the article file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Loading the configuration failed.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    /// The article file was not a valid article snapshot.
    #[error("Article file error: {0}")]
    Json(#[from] serde_json::Error),
    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    /// The publish cycle failed to record its outcome.
    #[error("Publisher error: {0}")]
    Publisher(#[from] PublisherError),
}

/// Arguments for registering a single article.
#[derive(Parser, Debug)]
pub struct PublishArgs {
    /// Path to a JSON file holding the article snapshot to register.
    #[arg(short, long)]
    article: PathBuf,
    /// Path to the configuration file. Defaults to `poet.yaml` in the
    /// working directory.
    #[arg(short, long)]
    config: Option<String>,
}

/// Runs one publish cycle for the article in the given file.
pub async fn execute(args: PublishArgs) -> Result<(), Error> {
    let config = AppConfig::new(args.config.as_deref())?;

    let raw = std::fs::read_to_string(&args.article)?;
    let post: PostRecord = serde_json::from_str(&raw)?;

    let client = create_http_client(config.request_timeout())?;
    let notifier = PublishNotifier::new(client);
    let store = Arc::new(InMemoryWorkIdStore::new());
    let service = PublishService::new(notifier, store, config.publish_settings());

    match service.handle_publish(&post).await? {
        PublishOutcome::Registered(work_id) => println!("registered: {work_id}"),
        PublishOutcome::NotRegistered => {
            println!("registration failed; no identifier stored")
        }
        PublishOutcome::Skipped => {
            println!("skipped: posting disabled, token missing, or article not published")
        }
    }

    Ok(())
}
