use crate::error::ClientError;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SettingsSection {
    Consumer,
    Producer,
}

impl Display for SettingsSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsSection::Consumer => write!(f, "consumer"),
            SettingsSection::Producer => write!(f, "producer"),
        }
    }
}

/// Connection settings owned by the host application, one section per client side.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct KafkaSettings {
    pub consumer: Option<SectionSettings>,
    pub producer: Option<SectionSettings>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SectionSettings {
    pub brokers: Option<Vec<String>>,
}

impl SectionSettings {
    pub fn with_brokers<I, S>(brokers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            brokers: Some(brokers.into_iter().map(Into::into).collect()),
        }
    }
}

impl KafkaSettings {
    pub fn section(&self, section: SettingsSection) -> Option<&SectionSettings> {
        match section {
            SettingsSection::Consumer => self.consumer.as_ref(),
            SettingsSection::Producer => self.producer.as_ref(),
        }
    }

    pub fn brokers(&self, section: SettingsSection) -> Result<&[String], ClientError> {
        let settings = self
            .section(section)
            .ok_or(ClientError::ConfigurationMissing {
                section,
                key: "section",
            })?;

        settings
            .brokers
            .as_deref()
            .ok_or(ClientError::ConfigurationMissing {
                section,
                key: "brokers",
            })
    }

    /// Comma-joined broker list, the form librdkafka accepts.
    pub fn brokers_string(&self, section: SettingsSection) -> Result<String, ClientError> {
        Ok(self.brokers(section)?.join(","))
    }

    pub fn missing_sections(&self) -> Vec<SettingsSection> {
        [SettingsSection::Consumer, SettingsSection::Producer]
            .into_iter()
            .filter(|section| self.brokers(*section).is_err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_brokers_with_commas() {
        let settings = KafkaSettings {
            consumer: Some(SectionSettings::with_brokers(["a:9092", "b:9092"])),
            producer: Some(SectionSettings::with_brokers(Vec::<String>::new())),
        };

        assert_eq!(
            settings.brokers_string(SettingsSection::Consumer).unwrap(),
            "a:9092,b:9092"
        );
        assert_eq!(settings.brokers_string(SettingsSection::Producer).unwrap(), "");
        assert!(settings.missing_sections().is_empty());
    }

    #[test]
    fn missing_section_and_missing_brokers_are_errors() {
        let settings = KafkaSettings {
            consumer: Some(SectionSettings { brokers: None }),
            producer: None,
        };

        assert!(matches!(
            settings.brokers(SettingsSection::Producer),
            Err(ClientError::ConfigurationMissing {
                section: SettingsSection::Producer,
                key: "section"
            })
        ));
        assert!(matches!(
            settings.brokers(SettingsSection::Consumer),
            Err(ClientError::ConfigurationMissing {
                section: SettingsSection::Consumer,
                key: "brokers"
            })
        ));
        assert_eq!(
            settings.missing_sections(),
            vec![SettingsSection::Consumer, SettingsSection::Producer]
        );
    }
}
