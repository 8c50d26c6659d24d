//! Gym environment in Python.
use serde::{Deserialize, Serialize};

/// Configuration of [`GymEnv`](crate::GymEnv).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GymEnvConfig {
    pub(crate) render_mode: Option<String>,
    pub(crate) seed: Option<i64>,
}

impl GymEnvConfig {
    /// Set the render mode forwarded to `gymnasium.make` (e.g. `"human"`,
    /// `"rgb_array"`).
    pub fn render_mode(mut self, mode: Option<String>) -> Self {
        self.render_mode = mode;
        self
    }

    /// Set the seed value of the random number generator.
    ///
    /// This value will be used at the first call of the reset method.
    pub fn seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }
}
