use crate::error::{ChessError, Result};
use crate::ordering::MAX_KILLER_MOVE_PLY;

pub const DEFAULT_MAX_DEPTH: u32 = 4;
pub const MIN_SEARCH_DEPTH: u32 = 1;
// Deeper searches would run past the killer table
pub const MAX_SEARCH_DEPTH: u32 = MAX_KILLER_MOVE_PLY as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u32,
    pub use_move_ordering: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            use_move_ordering: true,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search depth, clamped to `MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH`.
    pub fn set_max_depth(&mut self, depth: u32) {
        self.max_depth = depth.clamp(MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH);
    }

    pub fn set_move_ordering(&mut self, enabled: bool) {
        self.use_move_ordering = enabled;
    }

    /// Depth the search actually runs at.
    pub fn depth(&self) -> u32 {
        self.max_depth.clamp(MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH)
    }

    /// Parses a depth given on the command line, rejecting values outside the
    /// supported range.
    pub fn parse_depth(value: &str) -> Result<u32> {
        match value.parse::<u32>() {
            Ok(depth) if (MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&depth) => Ok(depth),
            _ => Err(ChessError::InvalidOption(format!(
                "depth '{}' is not between {} and {}",
                value, MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH
            ))),
        }
    }

    /// Applies a `setoption` pair.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                self.set_max_depth(Self::parse_depth(value)?);
                Ok(())
            }
            "moveordering" => match value.to_ascii_lowercase().as_str() {
                "true" => {
                    self.set_move_ordering(true);
                    Ok(())
                }
                "false" => {
                    self.set_move_ordering(false);
                    Ok(())
                }
                _ => Err(ChessError::InvalidOption(format!(
                    "MoveOrdering expects true or false, got '{}'",
                    value
                ))),
            },
            _ => Err(ChessError::InvalidOption(format!("unknown option '{}'", name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.depth(), 4);
        assert!(config.use_move_ordering);
    }

    #[test]
    fn test_set_option() {
        let mut config = SearchConfig::new();
        config.set_option("Depth", "6").unwrap();
        assert_eq!(config.max_depth, 6);
        config.set_option("MoveOrdering", "false").unwrap();
        assert!(!config.use_move_ordering);

        assert!(config.set_option("Depth", "deep").is_err());
        assert!(config.set_option("MoveOrdering", "maybe").is_err());
        assert_eq!(
            config.set_option("Hash", "64"),
            Err(ChessError::InvalidOption("unknown option 'Hash'".to_string()))
        );
        assert_eq!(config.max_depth, 6);
    }

    #[test]
    fn test_depth_stays_in_range() {
        let mut config = SearchConfig::new();
        assert!(config.set_option("Depth", "0").is_err());
        assert!(config.set_option("Depth", "33").is_err());
        config.set_option("Depth", "32").unwrap();
        assert_eq!(config.max_depth, 32);

        config.set_max_depth(0);
        assert_eq!(config.max_depth, MIN_SEARCH_DEPTH);
        config.set_max_depth(1000);
        assert_eq!(config.max_depth, MAX_SEARCH_DEPTH);

        // Fields set directly are still bounded when searching
        let raw = SearchConfig {
            max_depth: 0,
            use_move_ordering: true,
        };
        assert_eq!(raw.depth(), MIN_SEARCH_DEPTH);

        assert_eq!(SearchConfig::parse_depth("5"), Ok(5));
        assert!(SearchConfig::parse_depth("-1").is_err());
    }
}
