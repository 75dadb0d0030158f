use super::MessageStore;

/// A single registered translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub locale: String,
    pub key: String,
    pub message: String,
}

/// Append-only list of records, searched in insertion order.
///
/// Duplicates are kept; the first record registered for a pair wins.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in registration order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MessageStore for MemoryStore {
    fn register(&mut self, locale: &str, key: &str, message: &str) {
        self.records.push(Record {
            locale: locale.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        });
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.locale == locale && r.key == key)
            .map(|r| r.message.as_str())
    }
}
