/// Fixed-capacity circular log of narration lines for the UI.
///
/// Once full, each new entry overwrites the oldest one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    entries: Vec<String>,
    capacity: usize,
    /// Slot the next entry is written to once the buffer is full.
    cursor: usize,
}

impl EventLog {
    /// Creates an empty log. A zero capacity is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    pub fn push(&mut self, event: impl Into<String>) {
        let event = event.into();
        if self.entries.len() < self.capacity {
            self.entries.push(event);
        } else {
            self.entries[self.cursor] = event;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let split = if self.entries.len() < self.capacity {
            0
        } else {
            self.cursor
        };
        let (newer, older) = self.entries.split_at(split);
        older.iter().chain(newer.iter()).map(String::as_str)
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = (self.cursor + self.capacity - 1) % self.capacity;
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(crate::config::GameConfig::DEFAULT_EVENT_LOG_CAPACITY)
    }
}
