//! In-memory food log
//!
//! `FoodLog` owns the ordered entry list behind an async `RwLock`. It is
//! constructed once per process and shared via `Arc` - handlers never touch
//! ambient global state. Insertion order is log order is deletion-index order.

use tokio::sync::RwLock;

use super::error::{FoodLogError, FoodLogResult};
use super::types::{FoodEntry, Nutrition};

/// Ordered, append-only-with-deletion collection of logged entries
pub struct FoodLog {
    entries: RwLock<Vec<FoodEntry>>,
}

impl FoodLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Create a log pre-populated with entries (seeding, tests)
    pub fn with_entries(entries: Vec<FoodEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Append an entry to the end of the log
    ///
    /// Callers append only after the entry's nutrition is fully resolved;
    /// the log never holds half-written entries.
    pub async fn append(&self, entry: FoodEntry) {
        let mut entries = self.entries.write().await;
        entries.push(entry);
    }

    /// Remove and return the entry at `index` (0-based, log order)
    ///
    /// Fails without mutating the log when the index is out of range.
    pub async fn delete_at(&self, index: usize) -> FoodLogResult<FoodEntry> {
        let mut entries = self.entries.write().await;
        if index >= entries.len() {
            return Err(FoodLogError::IndexOutOfRange {
                index,
                len: entries.len(),
            });
        }
        Ok(entries.remove(index))
    }

    /// Sum nutrition over all entries currently present
    pub async fn totals(&self) -> Nutrition {
        let entries = self.entries.read().await;
        let mut totals = Nutrition::zero();
        for entry in entries.iter() {
            totals.add(&entry.nutrition);
        }
        totals
    }

    /// Entries whose date string matches exactly, in log order
    pub async fn entries_on_date(&self, date: &str) -> Vec<FoodEntry> {
        let entries = self.entries.read().await;
        entries.iter().filter(|e| e.date == date).cloned().collect()
    }

    /// Snapshot of all entries in log order
    pub async fn entries(&self) -> Vec<FoodEntry> {
        self.entries.read().await.clone()
    }

    /// Empty the log unconditionally
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Current entry count
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when the log holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for FoodLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, calories: f64) -> FoodEntry {
        FoodEntry::new(
            name,
            100.0,
            0.0,
            format!("100g {name}"),
            Nutrition {
                calories,
                protein: 1.0,
                carbs: 2.0,
                fat: 3.0,
                fiber: 4.0,
            },
        )
    }

    #[tokio::test]
    async fn test_append_and_len() {
        let log = FoodLog::new();
        assert!(log.is_empty().await);

        log.append(entry("banana", 89.0)).await;
        log.append(entry("apple", 52.0)).await;

        assert_eq!(log.len().await, 2);
        assert_eq!(log.entries().await[0].food_name, "banana");
    }

    #[tokio::test]
    async fn test_totals_sum_all_entries() {
        let log = FoodLog::new();
        log.append(entry("a", 100.0)).await;
        log.append(entry("b", 250.0)).await;

        let totals = log.totals().await;
        assert_eq!(totals.calories, 350.0);
        assert_eq!(totals.protein, 2.0);
        assert_eq!(totals.fiber, 8.0);
    }

    #[tokio::test]
    async fn test_totals_empty_log_is_zero() {
        let log = FoodLog::new();
        assert_eq!(log.totals().await, Nutrition::zero());
    }

    #[tokio::test]
    async fn test_append_then_delete_restores_totals() {
        let log = FoodLog::new();
        log.append(entry("a", 100.0)).await;

        let before = log.totals().await;
        log.append(entry("b", 300.0)).await;
        log.delete_at(log.len().await - 1).await.unwrap();

        assert_eq!(log.totals().await, before);
    }

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let log = FoodLog::new();
        log.append(entry("a", 1.0)).await;
        log.append(entry("b", 2.0)).await;
        log.append(entry("c", 3.0)).await;

        let removed = log.delete_at(1).await.unwrap();
        assert_eq!(removed.food_name, "b");

        let names: Vec<String> = log
            .entries()
            .await
            .into_iter()
            .map(|e| e.food_name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_does_not_mutate() {
        let log = FoodLog::new();
        log.append(entry("a", 1.0)).await;

        let err = log.delete_at(1).await.unwrap_err();
        assert!(matches!(
            err,
            FoodLogError::IndexOutOfRange { index: 1, len: 1 }
        ));
        assert_eq!(log.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_on_empty_log_fails() {
        let log = FoodLog::new();
        assert!(log.delete_at(0).await.is_err());
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn test_entries_on_date_round_trip() {
        let log = FoodLog::new();
        let e = entry("salmon", 208.0);
        let date = e.date.clone();
        log.append(e.clone()).await;

        let found = log.entries_on_date(&date).await;
        assert_eq!(found, vec![e]);
        assert!(log.entries_on_date("1999-01-01").await.is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let log = FoodLog::new();
        log.append(entry("a", 1.0)).await;
        log.clear().await;
        assert!(log.is_empty().await);
        assert_eq!(log.totals().await, Nutrition::zero());
    }
}
