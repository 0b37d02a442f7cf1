//! Tunables for project creation.
//!
//! # Invariants
//! - `max_subcategories` is at least 1.

use crate::model::subcategory::DEFAULT_MAX_SUBCATEGORIES;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Days between "today" and the default deadline of new items.
pub const DEFAULT_DEADLINE_OFFSET_DAYS: u32 = 10;

/// Errors for invalid tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Subcategory limit must allow at least one entry.
    ZeroSubcategoryLimit,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSubcategoryLimit => write!(f, "max_subcategories must be >= 1"),
        }
    }
}

impl Error for ConfigError {}

/// Creation defaults applied by `ProjectService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Offset added to today's date for new project/subcategory deadlines.
    pub deadline_offset_days: u32,
    /// Subcategories kept from the comma-separated input.
    pub max_subcategories: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            deadline_offset_days: DEFAULT_DEADLINE_OFFSET_DAYS,
            max_subcategories: DEFAULT_MAX_SUBCATEGORIES,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_subcategories == 0 {
            return Err(ConfigError::ZeroSubcategoryLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TrackerConfig};

    #[test]
    fn default_matches_form_behavior() {
        let config = TrackerConfig::default();
        assert_eq!(config.deadline_offset_days, 10);
        assert_eq!(config.max_subcategories, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_subcategory_limit_is_rejected() {
        let config = TrackerConfig {
            max_subcategories: 0,
            ..TrackerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSubcategoryLimit));
    }
}
