//! Build configuration for the scenario DAG.

use serde::{Deserialize, Serialize};

/// No board survives more than 9 placements.
pub const MAX_DEPTH: usize = 9;

/// Configuration for building a [`GameTree`](super::GameTree).
///
/// # Examples
///
/// ```
/// use tictree::tree::BuildConfig;
///
/// let config = BuildConfig::new(4).unwrap();
/// assert_eq!(config.depth, 4);
/// assert!(BuildConfig::new(12).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Levels to expand; the deepest nodes sit at this depth
    pub depth: usize,
}

impl BuildConfig {
    /// Create a configuration that expands `depth` levels.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDepth`] if `depth` exceeds [`MAX_DEPTH`].
    pub fn new(depth: usize) -> crate::Result<Self> {
        let config = Self { depth };
        config.validate()?;
        Ok(config)
    }

    /// Full game: every level down to [`MAX_DEPTH`]
    pub fn full() -> Self {
        Self { depth: MAX_DEPTH }
    }

    /// Set the depth, keeping validation for the caller.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Check bounds on a configuration that may come from a file.
    pub fn validate(&self) -> crate::Result<()> {
        if self.depth > MAX_DEPTH {
            return Err(crate::Error::InvalidDepth {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_depth_beyond_board() {
        let err = BuildConfig::new(10).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidDepth {
                depth: 10,
                max: MAX_DEPTH
            }
        ));
    }

    #[test]
    fn accepts_zero_and_full_depth() {
        assert!(BuildConfig::new(0).is_ok());
        assert_eq!(BuildConfig::new(MAX_DEPTH).unwrap(), BuildConfig::full());
    }

    #[test]
    fn deserialized_config_is_validated_on_demand() {
        let config: BuildConfig = serde_json::from_str(r#"{"depth": 11}"#).unwrap();
        assert!(config.validate().is_err());
        assert!(config.with_depth(3).validate().is_ok());
    }
}
