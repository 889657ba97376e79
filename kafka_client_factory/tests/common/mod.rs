#![allow(dead_code)]

use kafka_client_factory::client_library::{
    AddBrokers, ClientLibrary, MetadataClient, TopicDescriptor,
};
use kafka_client_factory::{ClientRole, KafkaSettings, SectionSettings};
use rdkafka::config::RDKafkaLogLevel;
use rdkafka::error::{KafkaError, KafkaResult, RDKafkaErrorCode};
use rdkafka::ClientConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug)]
pub struct Construction {
    pub role: ClientRole,
    pub config: Option<ClientConfig>,
}

#[derive(Debug)]
pub struct MetadataRequest {
    pub role: ClientRole,
    pub topic: Option<String>,
    pub timeout: Duration,
}

#[derive(Default)]
pub struct FakeState {
    pub constructions: Vec<Construction>,
    pub added_brokers: Vec<(ClientRole, String)>,
    pub log_levels: Vec<(ClientRole, i32)>,
    pub metadata_requests: Vec<MetadataRequest>,
    pub topics: HashMap<ClientRole, Vec<String>>,
    pub metadata_errors: HashMap<ClientRole, RDKafkaErrorCode>,
    pub failing_construction: Option<ClientRole>,
    pub failing_log_level: bool,
}

#[derive(Clone, Default)]
pub struct FakeLibrary {
    state: Arc<Mutex<FakeState>>,
}

impl FakeLibrary {
    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn with_topics(self, role: ClientRole, topics: &[&str]) -> Self {
        self.state()
            .topics
            .insert(role, topics.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_metadata_error(self, role: ClientRole, code: RDKafkaErrorCode) -> Self {
        self.state().metadata_errors.insert(role, code);
        self
    }

    fn create(&self, role: ClientRole, config: Option<&ClientConfig>) -> KafkaResult<FakeClient> {
        let mut state = self.state();
        if state.failing_construction == Some(role) {
            return Err(KafkaError::ClientCreation("rejected by fake".to_owned()));
        }
        state.constructions.push(Construction {
            role,
            config: config.cloned(),
        });

        Ok(FakeClient {
            role,
            state: self.state.clone(),
        })
    }
}

impl ClientLibrary for FakeLibrary {
    type LowLevelConsumer = FakeClient;
    type HighLevelConsumer = FakeHighLevelConsumer;
    type Producer = FakeClient;

    fn create_low_level_consumer(
        &self,
        config: Option<&ClientConfig>,
    ) -> KafkaResult<Self::LowLevelConsumer> {
        self.create(ClientRole::LowLevelConsumer, config)
    }

    fn create_high_level_consumer(
        &self,
        config: &ClientConfig,
    ) -> KafkaResult<Self::HighLevelConsumer> {
        self.create(ClientRole::HighLevelConsumer, Some(config))
            .map(FakeHighLevelConsumer)
    }

    fn create_producer(&self, config: Option<&ClientConfig>) -> KafkaResult<Self::Producer> {
        self.create(ClientRole::Producer, config)
    }
}

pub struct FakeClient {
    pub role: ClientRole,
    state: Arc<Mutex<FakeState>>,
}

impl MetadataClient for FakeClient {
    fn set_log_level(&self, level: RDKafkaLogLevel) -> KafkaResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_log_level {
            return Err(KafkaError::ClientCreation("log level rejected".to_owned()));
        }
        state.log_levels.push((self.role, level as i32));
        Ok(())
    }

    fn fetch_topic_metadata(
        &self,
        topic: Option<&str>,
        timeout: Duration,
    ) -> KafkaResult<Vec<TopicDescriptor>> {
        let mut state = self.state.lock().unwrap();
        state.metadata_requests.push(MetadataRequest {
            role: self.role,
            topic: topic.map(str::to_owned),
            timeout,
        });

        if let Some(code) = state.metadata_errors.get(&self.role) {
            return Err(KafkaError::MetadataFetch(*code));
        }

        let topics = state
            .topics
            .get(&self.role)
            .map(|topics| {
                topics
                    .iter()
                    .map(|name| TopicDescriptor::new(name.as_str(), 1))
                    .collect()
            })
            .unwrap_or_default();

        Ok(topics)
    }
}

impl AddBrokers for FakeClient {
    fn add_brokers(&self, brokers: &str) -> KafkaResult<usize> {
        self.state
            .lock()
            .unwrap()
            .added_brokers
            .push((self.role, brokers.to_owned()));

        Ok(brokers.split(',').filter(|b| !b.is_empty()).count())
    }
}

pub struct FakeHighLevelConsumer(pub FakeClient);

impl MetadataClient for FakeHighLevelConsumer {
    fn set_log_level(&self, level: RDKafkaLogLevel) -> KafkaResult<()> {
        self.0.set_log_level(level)
    }

    fn fetch_topic_metadata(
        &self,
        topic: Option<&str>,
        timeout: Duration,
    ) -> KafkaResult<Vec<TopicDescriptor>> {
        self.0.fetch_topic_metadata(topic, timeout)
    }
}

pub fn settings(consumer: &[&str], producer: &[&str]) -> KafkaSettings {
    KafkaSettings {
        consumer: Some(SectionSettings::with_brokers(consumer.iter().copied())),
        producer: Some(SectionSettings::with_brokers(producer.iter().copied())),
    }
}
