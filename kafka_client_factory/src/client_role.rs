use crate::error::ClientError;
use crate::settings::SettingsSection;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClientRole {
    LowLevelConsumer,
    HighLevelConsumer,
    Producer,
}

impl ClientRole {
    pub const ALL: [ClientRole; 3] = [
        ClientRole::LowLevelConsumer,
        ClientRole::HighLevelConsumer,
        ClientRole::Producer,
    ];

    /// Settings section the role takes its brokers from.
    pub fn section(&self) -> SettingsSection {
        match self {
            ClientRole::LowLevelConsumer | ClientRole::HighLevelConsumer => {
                SettingsSection::Consumer
            }
            ClientRole::Producer => SettingsSection::Producer,
        }
    }
}

impl Display for ClientRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientRole::LowLevelConsumer => write!(f, "low-level consumer"),
            ClientRole::HighLevelConsumer => write!(f, "high-level consumer"),
            ClientRole::Producer => write!(f, "producer"),
        }
    }
}

impl FromStr for ClientRole {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" | "low-level-consumer" => Ok(ClientRole::LowLevelConsumer),
            "high" | "high-level-consumer" => Ok(ClientRole::HighLevelConsumer),
            "producer" => Ok(ClientRole::Producer),
            other => Err(ClientError::ClientKind(other.to_owned())),
        }
    }
}
