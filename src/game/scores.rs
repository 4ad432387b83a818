use std::collections::HashMap;

use super::config::Difficulty;

/// Best score reached on each difficulty during this process's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScores {
    scores: HashMap<Difficulty, u32>,
}

impl BestScores {
    pub fn new() -> Self {
        Self {
            scores: Difficulty::ALL.iter().map(|&d| (d, 0)).collect(),
        }
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(&difficulty).copied().unwrap_or(0)
    }

    /// Record a finished round's score; returns true if it set a new best
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let best = self.scores.entry(difficulty).or_insert(0);
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }
}

impl Default for BestScores {
    fn default() -> Self {
        Self::new()
    }
}
