//! Configuration for a game of Farkle.

/// The score a player must reach to win.
pub const DEFAULT_TARGET_SCORE: u32 = 10_000;

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Score needed to win. A single turn that goes past it ends at once.
    pub target_score: u32,
    /// RNG seed for reproducible dice, or `None` for OS entropy.
    pub seed: Option<u64>,
    /// Stop after this many rounds even if nobody reached the target.
    pub max_rounds: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            seed: None,
            max_rounds: None,
        }
    }
}

impl GameConfig {
    /// Set the target score.
    pub fn with_target(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of rounds (at least one).
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds.max(1));
        self
    }
}
