use chrono::{DateTime, SubsecRound, Utc};

use crate::error::QuizError;
use crate::model::HistoryEntry;
use crate::storage::Storage;

/// Storage key holding the serialized history log.
pub const HISTORY_KEY: &str = "quizHistory";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Nothing was persisted yet.
    Empty,
    Loaded(usize),
    /// Persisted data could not be read and was discarded.
    Reset(String),
}

/// Result of [`HistoryStore::append`].
///
/// The entry is always kept in memory; `persist_error` is set when writing
/// the log to storage failed.
#[derive(Debug)]
pub struct Recorded {
    pub entry: HistoryEntry,
    pub persist_error: Option<QuizError>,
}

impl Recorded {
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Append-only log of completed attempts, persisted as JSON.
pub struct HistoryStore<S: Storage> {
    storage: S,
    entries: Vec<HistoryEntry>,
    load_status: LoadStatus,
}

impl<S: Storage> HistoryStore<S> {
    pub fn open(storage: S) -> Self {
        let (entries, load_status) = match storage.get(HISTORY_KEY) {
            Ok(None) => (Vec::new(), LoadStatus::Empty),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => {
                    let n = entries.len();
                    (entries, LoadStatus::Loaded(n))
                }
                Err(e) => {
                    log::error!("Error parsing history from storage: {}", e);
                    (Vec::new(), LoadStatus::Reset(e.to_string()))
                }
            },
            Err(e) => {
                log::error!("Error reading history from storage: {}", e);
                (Vec::new(), LoadStatus::Reset(e.to_string()))
            }
        };

        Self {
            storage,
            entries,
            load_status,
        }
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn append(&mut self, quiz_title: &str, score: u32, max_score: u32) -> Recorded {
        self.append_at(quiz_title, score, max_score, Utc::now())
    }

    pub fn append_at(
        &mut self,
        quiz_title: &str,
        score: u32,
        max_score: u32,
        date: DateTime<Utc>,
    ) -> Recorded {
        let entry = HistoryEntry {
            quiz_title: quiz_title.to_string(),
            score,
            max_score,
            // Stored with millisecond precision.
            date: date.trunc_subsecs(3),
        };
        self.entries.push(entry.clone());

        let persist_error = self.save().err();
        if let Some(ref e) = persist_error {
            log::error!("Error saving history to storage: {}", e);
        } else {
            log::info!("History entry added: {:?} {}/{}", entry.quiz_title, score, max_score);
        }

        Recorded {
            entry,
            persist_error,
        }
    }

    fn save(&mut self) -> crate::error::Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.storage.set(HISTORY_KEY, &json)
    }

    /// Entries newest first. Entries with equal timestamps are listed in
    /// reverse order of appending.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let mut sorted: Vec<HistoryEntry> = self.entries.iter().rev().cloned().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::storage::MemoryStorage;
    use chrono::{Duration, TimeZone};

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(QuizError::Storage("quota exceeded".to_string()))
        }
    }

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(QuizError::Storage("unreadable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_open_without_data_is_empty() {
        let store = HistoryStore::open(MemoryStorage::new());
        assert!(store.is_empty());
        assert_eq!(store.load_status(), &LoadStatus::Empty);
    }

    #[test]
    fn test_malformed_data_resets_history() {
        let store = HistoryStore::open(MemoryStorage::with_value(HISTORY_KEY, "{oops"));
        assert!(store.is_empty());
        assert!(matches!(store.load_status(), LoadStatus::Reset(_)));
    }

    #[test]
    fn test_unreadable_storage_resets_history() {
        let store = HistoryStore::open(BrokenStorage);
        assert!(store.is_empty());
        assert!(matches!(store.load_status(), LoadStatus::Reset(_)));
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        store.append_at("B", 1, 1, base + Duration::hours(2));
        store.append_at("A", 1, 1, base);
        store.append_at("C", 1, 1, base + Duration::hours(5));

        let titles: Vec<String> = store.list().into_iter().map(|e| e.quiz_title).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_list_does_not_reorder_storage() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        store.append_at("old", 1, 1, base);
        store.append_at("older", 1, 1, base - Duration::days(1));
        let _ = store.list();

        let raw = store.storage().get(HISTORY_KEY).unwrap().unwrap();
        let stored: Vec<HistoryEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored[0].quiz_title, "old");
        assert_eq!(stored[1].quiz_title, "older");
    }

    #[test]
    fn test_equal_timestamps_list_latest_append_first() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        store.append_at("Geo", 2, 2, at);
        store.append_at("Math", 1, 3, at);

        let titles: Vec<String> = store.list().into_iter().map(|e| e.quiz_title).collect();
        assert_eq!(titles, vec!["Math", "Geo"]);
    }

    #[test]
    fn test_write_failure_keeps_entry_in_memory() {
        let mut store = HistoryStore::open(ReadOnlyStorage);
        let recorded = store.append("Geo", 2, 2);
        assert!(!recorded.is_persisted());
        assert!(matches!(recorded.persist_error, Some(QuizError::Storage(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].quiz_title, "Geo");
    }

    #[test]
    fn test_timestamps_truncated_to_millis() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
            + Duration::nanoseconds(123_456_789);
        let recorded = store.append_at("Geo", 1, 1, at);
        assert_eq!(recorded.entry.date.timestamp_subsec_nanos(), 123_000_000);
    }
}
