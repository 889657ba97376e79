use crate::client_library::{AddBrokers, ClientLibrary, MetadataClient, TopicDescriptor};
use rdkafka::bindings::{rd_kafka_brokers_add, rd_kafka_set_log_level};
use rdkafka::client::Client;
use rdkafka::config::RDKafkaLogLevel;
use rdkafka::consumer::{BaseConsumer, Consumer};
use rdkafka::error::{KafkaError, KafkaResult};
use rdkafka::producer::{FutureProducer, Producer};
use rdkafka::util::Timeout;
use rdkafka::{ClientConfig, ClientContext};
use std::ffi::CString;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// librdkafka through the `rdkafka` crate.
#[derive(Debug, Default, Copy, Clone)]
pub struct RdKafkaLibrary;

impl ClientLibrary for RdKafkaLibrary {
    type LowLevelConsumer = BaseConsumer;
    type HighLevelConsumer = HighLevelConsumer;
    type Producer = FutureProducer;

    fn create_low_level_consumer(
        &self,
        config: Option<&ClientConfig>,
    ) -> KafkaResult<Self::LowLevelConsumer> {
        create_with_optional_config(config)
    }

    fn create_high_level_consumer(
        &self,
        config: &ClientConfig,
    ) -> KafkaResult<Self::HighLevelConsumer> {
        let consumer: BaseConsumer = config.create()?;

        Ok(HighLevelConsumer { consumer })
    }

    fn create_producer(&self, config: Option<&ClientConfig>) -> KafkaResult<Self::Producer> {
        create_with_optional_config(config)
    }
}

fn create_with_optional_config<T>(config: Option<&ClientConfig>) -> KafkaResult<T>
where
    T: rdkafka::config::FromClientConfig,
{
    match config {
        Some(config) => config.create(),
        None => ClientConfig::new().create(),
    }
}

impl MetadataClient for BaseConsumer {
    fn set_log_level(&self, level: RDKafkaLogLevel) -> KafkaResult<()> {
        set_native_log_level(self.client(), level)
    }

    fn fetch_topic_metadata(
        &self,
        topic: Option<&str>,
        timeout: Duration,
    ) -> KafkaResult<Vec<TopicDescriptor>> {
        fetch_topic_descriptors(self.client(), topic, timeout)
    }
}

/// Group consumer that only takes brokers from its configuration.
///
/// Wraps a [`BaseConsumer`], so building it needs no async runtime. Has no [`AddBrokers`].
pub struct HighLevelConsumer {
    consumer: BaseConsumer,
}

impl DerefMut for HighLevelConsumer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.consumer
    }
}

impl Deref for HighLevelConsumer {
    type Target = BaseConsumer;

    fn deref(&self) -> &Self::Target {
        &self.consumer
    }
}

impl MetadataClient for HighLevelConsumer {
    fn set_log_level(&self, level: RDKafkaLogLevel) -> KafkaResult<()> {
        set_native_log_level(self.consumer.client(), level)
    }

    fn fetch_topic_metadata(
        &self,
        topic: Option<&str>,
        timeout: Duration,
    ) -> KafkaResult<Vec<TopicDescriptor>> {
        fetch_topic_descriptors(self.consumer.client(), topic, timeout)
    }
}

impl MetadataClient for FutureProducer {
    fn set_log_level(&self, level: RDKafkaLogLevel) -> KafkaResult<()> {
        set_native_log_level(self.client(), level)
    }

    fn fetch_topic_metadata(
        &self,
        topic: Option<&str>,
        timeout: Duration,
    ) -> KafkaResult<Vec<TopicDescriptor>> {
        fetch_topic_descriptors(self.client(), topic, timeout)
    }
}

impl AddBrokers for BaseConsumer {
    fn add_brokers(&self, brokers: &str) -> KafkaResult<usize> {
        add_native_brokers(self.client(), brokers)
    }
}

impl AddBrokers for FutureProducer {
    fn add_brokers(&self, brokers: &str) -> KafkaResult<usize> {
        add_native_brokers(self.client(), brokers)
    }
}

fn set_native_log_level<C: ClientContext>(
    client: &Client<C>,
    level: RDKafkaLogLevel,
) -> KafkaResult<()> {
    // SAFETY: the native handle lives as long as `client`.
    unsafe { rd_kafka_set_log_level(client.native_ptr(), level as i32) };
    Ok(())
}

fn add_native_brokers<C: ClientContext>(client: &Client<C>, brokers: &str) -> KafkaResult<usize> {
    let brokers = CString::new(brokers).map_err(|e| {
        KafkaError::ClientCreation(format!("Broker list contains a nul byte: {e}"))
    })?;

    // SAFETY: the native handle lives as long as `client`, librdkafka copies the list.
    let added = unsafe { rd_kafka_brokers_add(client.native_ptr(), brokers.as_ptr()) };

    Ok(added.max(0) as usize)
}

fn fetch_topic_descriptors<C: ClientContext>(
    client: &Client<C>,
    topic: Option<&str>,
    timeout: Duration,
) -> KafkaResult<Vec<TopicDescriptor>> {
    let metadata = client.fetch_metadata(topic, Timeout::After(timeout))?;

    let topics = metadata
        .topics()
        .iter()
        .map(|topic| TopicDescriptor::new(topic.name(), topic.partitions().len()))
        .collect::<Vec<_>>();

    Ok(topics)
}
