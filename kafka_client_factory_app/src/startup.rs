use crate::app_config::AppConfig;
use anyhow::Context;
use kafka_client_factory::{ClientBuilder, TopicCatalog};
use std::sync::Arc;
use tracing::info;

pub async fn run(config: AppConfig) -> Result<(), anyhow::Error> {
    let internal_topics = config.internal_topics();
    let catalog = Arc::new(
        TopicCatalog::new(ClientBuilder::new(config.kafka)).with_internal_topics(internal_topics),
    );

    let result = catalog
        .discover_topics_async()
        .await
        .context("While discovering topics")?;

    info!(
        "Found {} topic(s) in {:.3}s",
        result.topics.len(),
        result.duration_secs()
    );
    for topic in &result.topics {
        println!("{topic}");
    }

    Ok(())
}
