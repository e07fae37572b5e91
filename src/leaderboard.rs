use crate::error::Result;
use crate::models::LeaderboardEntry;
use crate::storage::Storage;

pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Ranked best-known quiz scores. A user's points never decrease; a lower
/// new score leaves the stored entry alone.
pub struct LeaderboardStore<S: Storage> {
    storage: S,
    entries: Vec<LeaderboardEntry>,
}

impl<S: Storage> LeaderboardStore<S> {
    /// Missing or malformed storage yields an empty board.
    pub fn load(storage: S) -> Self {
        let entries = match storage.read(LEADERBOARD_KEY) {
            Ok(Some(content)) => serde_json::from_str(&content).unwrap_or_else(|e| {
                eprintln!("Warning: ignoring malformed leaderboard data: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Warning: could not read leaderboard: {e}");
                Vec::new()
            }
        };
        Self { storage, entries }
    }

    /// Insert the user or raise their points to `max(existing, score)`.
    pub fn record_score(&mut self, user_id: &str, display_name: &str, score: u32) -> Result<()> {
        match self.entries.iter_mut().find(|e| e.user_id == user_id) {
            Some(entry) => entry.points = entry.points.max(score),
            None => self.entries.push(LeaderboardEntry {
                user_id: user_id.to_string(),
                name: display_name.to_string(),
                points: score,
            }),
        }
        self.persist()
    }

    /// Points descending; insertion order breaks ties (stable sort).
    pub fn top_n(&self, n: usize) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        self.storage.write(LEADERBOARD_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn board() -> LeaderboardStore<MemoryStorage> {
        LeaderboardStore::load(MemoryStorage::new())
    }

    #[test]
    fn test_points_never_decrease() {
        let mut b = board();
        b.record_score("u1", "Alice", 5).unwrap();
        b.record_score("u1", "Alice", 3).unwrap();
        assert_eq!(b.top_n(10)[0].points, 5);
        b.record_score("u1", "Alice", 7).unwrap();
        assert_eq!(b.top_n(10)[0].points, 7);
    }

    #[test]
    fn test_top_n_sorts_descending_and_truncates() {
        let mut b = board();
        b.record_score("u1", "Alice", 2).unwrap();
        b.record_score("u2", "Bob", 9).unwrap();
        b.record_score("u3", "Cara", 5).unwrap();
        let top = b.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Bob");
        assert_eq!(top[1].name, "Cara");
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut b = board();
        b.record_score("u1", "Alice", 3).unwrap();
        b.record_score("u2", "Bob", 3).unwrap();
        b.record_score("u3", "Cara", 3).unwrap();
        let names: Vec<&str> = b.top_n(10).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
    }

    #[test]
    fn test_scores_survive_reload() {
        let mut storage = MemoryStorage::new();
        {
            let mut b = LeaderboardStore::load(std::mem::take(&mut storage));
            b.record_score("u1", "Alice", 4).unwrap();
            storage = b.storage;
        }
        let b = LeaderboardStore::load(storage);
        assert_eq!(b.top_n(1)[0].points, 4);
        assert_eq!(b.top_n(1)[0].user_id, "u1");
    }

    #[test]
    fn test_malformed_storage_yields_empty_board() {
        let mut storage = MemoryStorage::new();
        storage.write(LEADERBOARD_KEY, "not json at all").unwrap();
        let b = LeaderboardStore::load(storage);
        assert!(b.is_empty());
    }
}
