use crate::client_role::ClientRole;
use crate::settings::SettingsSection;
use rdkafka::error::KafkaError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid client kind `{0}`, expected one of: low, high, producer")]
    ClientKind(String),

    #[error("Missing kafka settings {key} for `{section}`")]
    ConfigurationMissing {
        section: SettingsSection,
        key: &'static str,
    },

    #[error("While creating kafka {role} client")]
    ClientConstruction {
        role: ClientRole,
        #[source]
        source: KafkaError,
    },

    #[error("While fetching metadata with kafka {role} client")]
    MetadataFetch {
        role: ClientRole,
        #[source]
        source: KafkaError,
    },

    #[error("While joining blocking handle")]
    Task(#[from] tokio::task::JoinError),
}

impl ClientError {
    /// Errors an operator fixes by changing settings or code.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ClientError::ClientKind(_)
                | ClientError::ConfigurationMissing { .. }
                | ClientError::ClientConstruction { .. }
        )
    }

    /// Errors that may go away on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::MetadataFetch { .. })
    }
}
