//! Board configuration surface
//!
//! Everything tunable about a game lives here: grid dimensions, the
//! world-space placement, the gem palette refill draws from, the per-step
//! presentation delays, and the RNG seed.

use tui_match_types::{
    GemKind, Point, StepTimings, DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
    pub origin: Point,
    /// Gem kinds available to the initial fill and refill.
    pub palette: Vec<GemKind>,
    pub timings: StepTimings,
    /// Seed for the injectable RNG; fixed seeds make turns reproducible.
    pub seed: u32,
}

impl BoardConfig {
    /// Validate construction-time invariants.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(CoreError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            origin: Point::default(),
            palette: GemKind::ALL.to_vec(),
            timings: StepTimings::default(),
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(BoardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = BoardConfig {
            width: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(CoreError::InvalidDimension { width: 0, height: 8 })
        );
    }

    #[test]
    fn test_rejects_empty_palette() {
        let config = BoardConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(CoreError::EmptyPalette));
    }
}
