use anyhow::Context;
use config::Config;
use kafka_client_factory::{InternalTopics, KafkaSettings};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub kafka: KafkaSettings,
    #[serde(default = "include_internal_topics_default")]
    pub include_internal_topics: bool,
}

fn include_internal_topics_default() -> bool {
    true
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name("appsettings"))
            .add_source(
                config::Environment::with_prefix("App")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("kafka.consumer.brokers")
                    .with_list_parse_key("kafka.producer.brokers"),
            )
            .build()
            .context("While building config")?;

        Self::deserialize_config(config)
    }

    pub fn deserialize_config(config: Config) -> Result<Self, anyhow::Error> {
        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }

    pub fn internal_topics(&self) -> InternalTopics {
        if self.include_internal_topics {
            InternalTopics::Include
        } else {
            InternalTopics::Exclude
        }
    }
}
