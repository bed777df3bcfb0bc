//! Game configuration
//!
//! Palette, code width and search limits. Everything here is validated once,
//! before any play begins; a bad configuration is the only fatal error.

use crate::core::Palette;
use crate::solver::SearchBudget;
use std::time::Duration;
use thiserror::Error;

/// Widest supported code
///
/// Keeps the `guess<row><col>` history keys unambiguous: the column is
/// always the single last digit.
pub const MAX_COLUMNS: usize = 10;

/// Default search budget, in consistency checks
pub const DEFAULT_MAX_STEPS: u64 = 10_000_000;

/// Configuration errors, raised before play starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the palette needs at least one color")]
    EmptyPalette,
    #[error("{requested} colors requested, at most {max} supported")]
    TooManyColors { requested: usize, max: usize },
    #[error("color symbol {0:?} appears twice")]
    DuplicateColor(char),
    #[error("color symbol {0:?} is not printable")]
    InvalidSymbol(char),
    #[error("{requested} columns requested, at most {max} supported")]
    TooManyColumns { requested: usize, max: usize },
    #[error("the search step budget must be positive")]
    ZeroStepBudget,
}

/// Everything needed to set up a game and its solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub nr_columns: usize,
    /// Size of a lettered palette; ignored when `symbols` is set
    pub nr_colors: usize,
    /// Custom palette symbols, in enumeration order
    pub symbols: Option<String>,
    pub max_steps: u64,
    pub timeout: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            nr_columns: 4,
            nr_colors: 6,
            symbols: None,
            max_steps: DEFAULT_MAX_STEPS,
            timeout: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(nr_columns: usize, nr_colors: usize) -> Self {
        Self {
            nr_columns,
            nr_colors,
            ..Self::default()
        }
    }

    /// Check every limit without building anything
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette()?;
        if self.nr_columns > MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns {
                requested: self.nr_columns,
                max: MAX_COLUMNS,
            });
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        Ok(())
    }

    /// Build the configured palette
    ///
    /// # Errors
    /// Returns `ConfigError` if the palette is empty, too large or repeats a
    /// symbol.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        match &self.symbols {
            Some(symbols) => Palette::new(symbols.chars()),
            None => Palette::lettered(self.nr_colors),
        }
    }

    #[must_use]
    pub const fn budget(&self) -> SearchBudget {
        SearchBudget {
            max_steps: self.max_steps,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_mastermind() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.nr_columns, 4);
        assert_eq!(config.palette().unwrap().to_string(), "ABCDEF");
    }

    #[test]
    fn custom_symbols_override_color_count() {
        let config = GameConfig {
            symbols: Some("RGBYOW".to_string()),
            nr_colors: 2,
            ..GameConfig::default()
        };
        assert_eq!(config.palette().unwrap().len(), 6);
    }

    #[test]
    fn zero_colors_fail_fast() {
        assert_eq!(
            GameConfig::new(4, 0).validate(),
            Err(ConfigError::EmptyPalette)
        );
    }

    #[test]
    fn too_many_columns() {
        assert_eq!(
            GameConfig::new(11, 6).validate(),
            Err(ConfigError::TooManyColumns {
                requested: 11,
                max: MAX_COLUMNS
            })
        );
    }

    #[test]
    fn zero_columns_is_allowed() {
        assert_eq!(GameConfig::new(0, 6).validate(), Ok(()));
    }

    #[test]
    fn zero_step_budget() {
        let config = GameConfig {
            max_steps: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStepBudget));
    }

    #[test]
    fn budget_carries_limits() {
        let config = GameConfig {
            max_steps: 42,
            timeout: Some(Duration::from_millis(5)),
            ..GameConfig::default()
        };
        let budget = config.budget();
        assert_eq!(budget.max_steps, 42);
        assert_eq!(budget.timeout, Some(Duration::from_millis(5)));
    }
}
