use crate::client_library::{ClientLibrary, MetadataClient, TopicDescriptor};
use crate::client_role::ClientRole;
use rdkafka::config::RDKafkaLogLevel;
use rdkafka::error::KafkaResult;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

pub enum ClientHandle<L: ClientLibrary> {
    LowLevelConsumer(L::LowLevelConsumer),
    HighLevelConsumer(L::HighLevelConsumer),
    Producer(L::Producer),
}

impl<L: ClientLibrary> Debug for ClientHandle<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ClientHandle").field(&self.role()).finish()
    }
}

impl<L: ClientLibrary> ClientHandle<L> {
    pub fn role(&self) -> ClientRole {
        match self {
            ClientHandle::LowLevelConsumer(_) => ClientRole::LowLevelConsumer,
            ClientHandle::HighLevelConsumer(_) => ClientRole::HighLevelConsumer,
            ClientHandle::Producer(_) => ClientRole::Producer,
        }
    }

    pub fn as_metadata_client(&self) -> &dyn MetadataClient {
        match self {
            ClientHandle::LowLevelConsumer(client) => client,
            ClientHandle::HighLevelConsumer(client) => client,
            ClientHandle::Producer(client) => client,
        }
    }

    pub fn set_log_level(&self, level: RDKafkaLogLevel) -> KafkaResult<()> {
        self.as_metadata_client().set_log_level(level)
    }

    pub fn fetch_topic_metadata(
        &self,
        topic: Option<&str>,
        timeout: Duration,
    ) -> KafkaResult<Vec<TopicDescriptor>> {
        self.as_metadata_client().fetch_topic_metadata(topic, timeout)
    }

    pub fn into_low_level_consumer(self) -> Option<L::LowLevelConsumer> {
        match self {
            ClientHandle::LowLevelConsumer(client) => Some(client),
            _ => None,
        }
    }

    pub fn into_high_level_consumer(self) -> Option<L::HighLevelConsumer> {
        match self {
            ClientHandle::HighLevelConsumer(client) => Some(client),
            _ => None,
        }
    }

    pub fn into_producer(self) -> Option<L::Producer> {
        match self {
            ClientHandle::Producer(client) => Some(client),
            _ => None,
        }
    }
}
