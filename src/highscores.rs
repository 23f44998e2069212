//! High score leaderboard
//!
//! Persisted to LocalStorage, tracks the top 10 runs.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Obstacles cleared in the run
    pub score: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_dash_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a stored leaderboard, falling back to empty on corrupt data
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, timestamp };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let scores = Self::from_json(&json);
                log::info!("Loaded {} high scores", scores.entries.len());
                return scores;
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(scores: &[u32]) -> HighScores {
        let mut hs = HighScores::new();
        for (i, &s) in scores.iter().enumerate() {
            hs.add_score(s, i as f64 * 1000.0);
        }
        hs
    }

    #[test]
    fn zero_score_never_qualifies() {
        let hs = HighScores::new();
        assert!(!hs.qualifies(0));
        assert_eq!(hs.potential_rank(0), None);
    }

    #[test]
    fn any_positive_score_qualifies_on_a_short_board() {
        let hs = board_with(&[10, 5]);
        assert!(hs.qualifies(1));
        assert_eq!(hs.potential_rank(1), Some(3));
    }

    #[test]
    fn entries_stay_sorted_descending() {
        let hs = board_with(&[5, 20, 1, 12]);
        let scores: Vec<u32> = hs.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![20, 12, 5, 1]);
    }

    #[test]
    fn add_score_reports_rank() {
        let mut hs = board_with(&[30, 20, 10]);
        assert_eq!(hs.add_score(25, 0.0), Some(2));
        assert_eq!(hs.add_score(5, 0.0), Some(5));
        assert_eq!(hs.top_score(), Some(30));
    }

    #[test]
    fn full_board_drops_the_lowest() {
        let mut hs = board_with(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(!hs.qualifies(1));
        assert_eq!(hs.add_score(1, 0.0), None);

        assert_eq!(hs.add_score(11, 0.0), Some(1));
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(hs.entries.last().map(|e| e.score), Some(2));
    }

    #[test]
    fn ties_rank_below_existing_entries() {
        let mut hs = board_with(&[10, 10]);
        assert_eq!(hs.add_score(10, 0.0), Some(3));
    }

    #[test]
    fn corrupt_json_loads_as_empty() {
        let hs = HighScores::from_json("not json at all");
        assert!(hs.is_empty());

        let hs = HighScores::from_json("{\"entries\":[{\"wrong\":true}]}");
        assert!(hs.is_empty());
    }

    #[test]
    fn roundtrips_through_json() {
        let hs = board_with(&[7, 3]);
        let json = serde_json::to_string(&hs).unwrap();
        let back = HighScores::from_json(&json);
        assert_eq!(back.entries.len(), 2);
        assert_eq!(back.top_score(), Some(7));
    }
}
