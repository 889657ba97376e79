mod client_handle;

pub use client_handle::ClientHandle;

use crate::client_library::{AddBrokers, ClientLibrary, RdKafkaLibrary};
use crate::client_role::ClientRole;
use crate::error::ClientError;
use crate::settings::{KafkaSettings, SettingsSection};
use rdkafka::ClientConfig;
use tracing::{debug, warn};

pub const BROKERS_CONFIG_KEY: &str = "bootstrap.servers";
/// librdkafka alias of [`BROKERS_CONFIG_KEY`], overwritten too so a caller's value cannot win.
pub const BROKERS_CONFIG_ALIAS_KEY: &str = "metadata.broker.list";

/// Builds kafka clients with brokers taken from [`KafkaSettings`].
///
/// Brokers reach the high-level consumer through its configuration only.
/// The low-level consumer and the producer are created from the caller's
/// configuration as is and get their brokers added after construction.
pub struct ClientBuilder<L = RdKafkaLibrary> {
    settings: KafkaSettings,
    library: L,
}

impl ClientBuilder<RdKafkaLibrary> {
    pub fn new(settings: KafkaSettings) -> Self {
        Self::with_library(settings, RdKafkaLibrary)
    }
}

impl<L: ClientLibrary> ClientBuilder<L> {
    pub fn with_library(settings: KafkaSettings, library: L) -> Self {
        for section in settings.missing_sections() {
            warn!("Kafka settings section `{section}` has no brokers, clients for it cannot be built");
        }

        Self { settings, library }
    }

    pub fn settings(&self) -> &KafkaSettings {
        &self.settings
    }

    pub fn build(
        &self,
        role: ClientRole,
        config: Option<ClientConfig>,
    ) -> Result<ClientHandle<L>, ClientError> {
        let handle = match role {
            ClientRole::LowLevelConsumer => {
                ClientHandle::LowLevelConsumer(self.build_low_level_consumer(config)?)
            }
            ClientRole::HighLevelConsumer => {
                ClientHandle::HighLevelConsumer(self.build_high_level_consumer(config)?)
            }
            ClientRole::Producer => ClientHandle::Producer(self.build_producer(config)?),
        };

        Ok(handle)
    }

    /// Same as [`ClientBuilder::build`] for a role given by name, e.g. `"low"`, `"high"` or `"producer"`.
    pub fn build_named(
        &self,
        kind: &str,
        config: Option<ClientConfig>,
    ) -> Result<ClientHandle<L>, ClientError> {
        let role = kind.parse::<ClientRole>()?;
        self.build(role, config)
    }

    pub fn build_low_level_consumer(
        &self,
        config: Option<ClientConfig>,
    ) -> Result<L::LowLevelConsumer, ClientError> {
        let role = ClientRole::LowLevelConsumer;
        let brokers = self.settings.brokers_string(role.section())?;

        let consumer = self
            .library
            .create_low_level_consumer(config.as_ref())
            .map_err(|source| ClientError::ClientConstruction { role, source })?;
        add_brokers(&consumer, role, &brokers)?;

        Ok(consumer)
    }

    pub fn build_high_level_consumer(
        &self,
        config: Option<ClientConfig>,
    ) -> Result<L::HighLevelConsumer, ClientError> {
        let role = ClientRole::HighLevelConsumer;
        let brokers = self.settings.brokers_string(SettingsSection::Consumer)?;

        let mut config = config.unwrap_or_else(ClientConfig::new);
        config
            .set(BROKERS_CONFIG_KEY, &brokers)
            .set(BROKERS_CONFIG_ALIAS_KEY, &brokers);
        debug!("Creating kafka {role} client with brokers `{brokers}` in its config");

        self.library
            .create_high_level_consumer(&config)
            .map_err(|source| ClientError::ClientConstruction { role, source })
    }

    pub fn build_producer(
        &self,
        config: Option<ClientConfig>,
    ) -> Result<L::Producer, ClientError> {
        let role = ClientRole::Producer;
        let brokers = self.settings.brokers_string(role.section())?;

        let producer = self
            .library
            .create_producer(config.as_ref())
            .map_err(|source| ClientError::ClientConstruction { role, source })?;
        add_brokers(&producer, role, &brokers)?;

        Ok(producer)
    }
}

fn add_brokers<T: AddBrokers>(client: &T, role: ClientRole, brokers: &str) -> Result<(), ClientError> {
    let added = client
        .add_brokers(brokers)
        .map_err(|source| ClientError::ClientConstruction { role, source })?;

    debug!("Added {added} broker(s) `{brokers}` to kafka {role} client");
    Ok(())
}
