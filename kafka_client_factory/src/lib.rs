pub mod client_builder;
pub mod client_library;
pub mod client_role;
pub mod error;
pub mod settings;
pub mod topic_catalog;

pub use client_builder::{ClientBuilder, ClientHandle};
pub use client_library::{ClientLibrary, RdKafkaLibrary};
pub use client_role::ClientRole;
pub use error::ClientError;
pub use settings::{KafkaSettings, SectionSettings, SettingsSection};
pub use topic_catalog::{DiscoveryResult, InternalTopics, TopicCatalog, METADATA_TIMEOUT};
