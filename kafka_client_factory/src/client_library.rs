mod rdkafka_library;
mod topic_descriptor;

pub use rdkafka_library::{HighLevelConsumer, RdKafkaLibrary};
pub use topic_descriptor::TopicDescriptor;

use rdkafka::config::RDKafkaLogLevel;
use rdkafka::error::KafkaResult;
use rdkafka::ClientConfig;
use std::time::Duration;

/// Operations every constructed client exposes.
pub trait MetadataClient {
    /// Best effort, callers log a failure and carry on.
    fn set_log_level(&self, level: RDKafkaLogLevel) -> KafkaResult<()>;

    /// `topic == None` requests metadata for all topics.
    fn fetch_topic_metadata(
        &self,
        topic: Option<&str>,
        timeout: Duration,
    ) -> KafkaResult<Vec<TopicDescriptor>>;
}

/// Post-construction broker injection. The high-level consumer does not have it,
/// it receives brokers only through its configuration.
pub trait AddBrokers {
    /// Returns how many brokers were accepted.
    fn add_brokers(&self, brokers: &str) -> KafkaResult<usize>;
}

/// Constructors for the three client variants of the underlying library.
pub trait ClientLibrary {
    type LowLevelConsumer: MetadataClient + AddBrokers;
    type HighLevelConsumer: MetadataClient;
    type Producer: MetadataClient + AddBrokers;

    fn create_low_level_consumer(
        &self,
        config: Option<&ClientConfig>,
    ) -> KafkaResult<Self::LowLevelConsumer>;

    fn create_high_level_consumer(
        &self,
        config: &ClientConfig,
    ) -> KafkaResult<Self::HighLevelConsumer>;

    fn create_producer(&self, config: Option<&ClientConfig>) -> KafkaResult<Self::Producer>;
}
