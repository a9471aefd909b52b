use crate::{error::StorageError, model::WeatherRecord, storage::KeyValueStore};

/// Storage key holding the JSON-encoded history.
pub const RECENT_KEY: &str = "recent";

/// Maximum number of distinct cities kept.
pub const RECENT_CAPACITY: usize = 6;

/// Most-recent-first list of past lookups, unique by city name.
#[derive(Debug)]
pub struct RecentCache<S> {
    store: S,
    entries: Vec<WeatherRecord>,
}

impl<S: KeyValueStore> RecentCache<S> {
    /// Read the persisted history. Never fails: a missing, unreadable or
    /// malformed value yields an empty history.
    pub fn load(store: S) -> Self {
        let entries = read_entries(&store);
        Self { store, entries }
    }

    pub fn entries(&self) -> &[WeatherRecord] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WeatherRecord> {
        self.entries.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Move `entry` to the front, dropping any older entry with the same
    /// `city_name` (exact, case-sensitive), and keep at most
    /// [`RECENT_CAPACITY`] entries.
    ///
    /// The persisted value is re-read first so that another writer sharing
    /// the medium is not overwritten with a stale copy. A value that cannot
    /// be read or parsed counts as empty and is overwritten. When this
    /// returns `Ok`, the medium already holds the returned list.
    pub fn record(&mut self, entry: WeatherRecord) -> Result<Vec<WeatherRecord>, StorageError> {
        let mut entries = read_entries(&self.store);
        entries.retain(|e| e.city_name != entry.city_name);
        entries.insert(0, entry);
        entries.truncate(RECENT_CAPACITY);

        self.persist(&entries)?;
        self.entries = entries.clone();

        Ok(entries)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.persist(&[])?;
        self.entries.clear();
        Ok(())
    }

    fn persist(&mut self, entries: &[WeatherRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(RECENT_KEY, &json)?;
        Ok(())
    }
}

fn read_entries<S: KeyValueStore>(store: &S) -> Vec<WeatherRecord> {
    let raw = match store.get(RECENT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read recent searches, starting empty");
            return Vec::new();
        }
    };

    // `null` is what the browser widget stores after a reset.
    match serde_json::from_str::<Option<Vec<WeatherRecord>>>(&raw) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(error = %err, "recent searches are corrupt, starting empty");
            Vec::new()
        }
    }
}
