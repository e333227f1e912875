use crate::validation::verdict::MatchMode;
use serde::{Deserialize, Serialize};

const fn max_message_length() -> usize {
    1024
}
const fn parallel_threshold() -> usize {
    64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "max_message_length")]
    pub max_message_length: usize,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub strict_arguments: bool,
    /// Bundles with at least this many spends are parsed on the rayon pool,
    /// and assertion lists at least this long are matched on it.
    #[serde(default = "parallel_threshold")]
    pub parallel_threshold: usize,
}
impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_message_length: max_message_length(),
            match_mode: MatchMode::default(),
            strict_arguments: false,
            parallel_threshold: parallel_threshold(),
        }
    }
}
impl ValidationConfig {
    /// Admission settings: reject odd argument shapes and stop at the first
    /// unmet assertion.
    #[must_use]
    pub fn mempool() -> Self {
        Self {
            match_mode: MatchMode::FailFast,
            strict_arguments: true,
            ..Default::default()
        }
    }
    #[must_use]
    pub fn block() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}
