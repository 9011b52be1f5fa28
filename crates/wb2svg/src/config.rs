use serde::{Deserialize, Serialize};
use wb_morph::DEFAULT_THINNING_ROUNDS;

/// Output buffer size used when the caller does not pick one.
pub const DEFAULT_SVG_CAPACITY: usize = 8 * 1024 * 1024;

/// Round bound for [`ThinningMode::UntilStable`] when none is given.
pub const DEFAULT_MAX_THINNING_ROUNDS: usize = 64;

/// How long the skeletonizer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ThinningMode {
    /// Exactly `rounds` rounds, no convergence check.
    Fixed {
        #[serde(default = "default_rounds")]
        rounds: usize,
    },
    /// Until a round removes nothing, at most `max_rounds` rounds.
    UntilStable {
        #[serde(default = "default_max_rounds")]
        max_rounds: usize,
    },
}

fn default_rounds() -> usize {
    DEFAULT_THINNING_ROUNDS
}

fn default_max_rounds() -> usize {
    DEFAULT_MAX_THINNING_ROUNDS
}

impl Default for ThinningMode {
    fn default() -> Self {
        Self::Fixed {
            rounds: DEFAULT_THINNING_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub thinning: ThinningMode,
    /// Bytes reserved for the SVG document, including the trailing NUL.
    pub capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            thinning: ThinningMode::default(),
            capacity: DEFAULT_SVG_CAPACITY,
        }
    }
}
