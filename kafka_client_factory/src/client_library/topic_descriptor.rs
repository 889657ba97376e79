#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDescriptor {
    pub name: String,
    pub partitions_count: usize,
}

impl TopicDescriptor {
    pub fn new(name: impl Into<String>, partitions_count: usize) -> Self {
        Self {
            name: name.into(),
            partitions_count,
        }
    }
}
