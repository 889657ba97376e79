mod discovery_result;
mod internal_topics;

pub use discovery_result::DiscoveryResult;
pub use internal_topics::InternalTopics;

use crate::client_builder::{ClientBuilder, ClientHandle};
use crate::client_library::{ClientLibrary, RdKafkaLibrary};
use crate::error::ClientError;
use rdkafka::config::RDKafkaLogLevel;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const METADATA_TIMEOUT: Duration = Duration::from_millis(1000);

/// Lists the topics of the cluster as seen by a producer and a low-level consumer.
///
/// The two clients can report slightly different topic sets depending on broker
/// and librdkafka versions, so both are queried and the results merged.
pub struct TopicCatalog<L = RdKafkaLibrary> {
    builder: ClientBuilder<L>,
    internal_topics: InternalTopics,
}

impl<L: ClientLibrary> TopicCatalog<L> {
    pub fn new(builder: ClientBuilder<L>) -> Self {
        Self {
            builder,
            internal_topics: InternalTopics::default(),
        }
    }

    pub fn with_internal_topics(mut self, internal_topics: InternalTopics) -> Self {
        self.internal_topics = internal_topics;
        self
    }

    pub fn builder(&self) -> &ClientBuilder<L> {
        &self.builder
    }

    pub fn discover_topics(&self) -> Result<DiscoveryResult, ClientError> {
        let started_at = Instant::now();

        let sources: [ClientHandle<L>; 2] = [
            ClientHandle::Producer(self.builder.build_producer(None)?),
            ClientHandle::LowLevelConsumer(self.builder.build_low_level_consumer(None)?),
        ];

        let mut topics = BTreeSet::new();
        for client in &sources {
            let role = client.role();
            if let Err(e) = client.set_log_level(RDKafkaLogLevel::Info) {
                warn!("Could not set log level of kafka {role} client: {e}");
            }

            let descriptors = client
                .fetch_topic_metadata(None, METADATA_TIMEOUT)
                .map_err(|source| ClientError::MetadataFetch { role, source })?;
            debug!("Kafka {role} client reported {} topic(s)", descriptors.len());

            topics.extend(
                descriptors
                    .into_iter()
                    .map(|descriptor| descriptor.name)
                    .filter(|name| self.internal_topics.keeps(name)),
            );
        }

        let result = DiscoveryResult {
            topics: topics.into_iter().collect(),
            duration: started_at.elapsed(),
        };
        info!(
            "Discovered {} topic(s) in {:?}",
            result.topics.len(),
            result.duration
        );

        Ok(result)
    }
}

impl<L> TopicCatalog<L>
where
    L: ClientLibrary + Send + Sync + 'static,
{
    /// Runs [`TopicCatalog::discover_topics`] on the blocking thread pool.
    pub async fn discover_topics_async(self: Arc<Self>) -> Result<DiscoveryResult, ClientError> {
        let handle = tokio::task::spawn_blocking(move || self.discover_topics());

        handle.await?
    }
}
