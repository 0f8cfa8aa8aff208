//! GRASP configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a GRASP run.
///
/// # Examples
///
/// ```
/// use u_subset_sum::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.seed, Some(42));
/// assert!(!config.parallel);
///
/// let config = GraspConfig::from_toml_str("max_iterations = 200\nparallel = true").unwrap();
/// assert_eq!(config.max_iterations, 200);
/// assert!(config.parallel);
/// assert_eq!(config.seed, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GraspConfig {
    /// Iteration budget. The run stops earlier on an exact match.
    pub max_iterations: usize,
    /// Random seed for reproducible runs. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Run iterations on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            seed: None,
            parallel: false,
        }
    }
}

impl GraspConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`SubsetSumError::Config`](crate::error::SubsetSumError::Config) on malformed TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel iterations.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubsetSumError;

    #[test]
    fn test_config_default() {
        let config = GraspConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_builder() {
        let config = GraspConfig::default()
            .with_max_iterations(10)
            .with_seed(7)
            .with_parallel(true);
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.seed, Some(7));
        assert!(config.parallel);
    }

    #[test]
    fn test_config_from_toml() {
        let config = GraspConfig::from_toml_str("seed = 99").unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.max_iterations, 1000);

        let empty = GraspConfig::from_toml_str("").unwrap();
        assert_eq!(empty, GraspConfig::default());
    }

    #[test]
    fn test_config_from_toml_invalid() {
        let err = GraspConfig::from_toml_str("max_iterations = \"many\"").unwrap_err();
        assert!(matches!(err, SubsetSumError::Config(_)));
    }
}
