const INTERNAL_TOPIC_PREFIX: &str = "__";

/// Whether broker-internal topics such as `__consumer_offsets` are reported.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum InternalTopics {
    #[default]
    Include,
    Exclude,
}

impl InternalTopics {
    pub fn keeps(&self, topic: &str) -> bool {
        match self {
            InternalTopics::Include => true,
            InternalTopics::Exclude => !topic.starts_with(INTERNAL_TOPIC_PREFIX),
        }
    }
}
