use serde::{Deserialize, Serialize};

use crate::error::{RaceError, RaceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins around the plot area.
///
/// The wide left margin is the budget for wrapped product labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 80.0,
            bottom: 60.0,
            left: 420.0,
        }
    }
}

/// Inner drawing region left once margins are subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width_px: f64,
    pub height_px: f64,
}

impl Margins {
    pub fn plot_area(self, viewport: Viewport) -> RaceResult<PlotArea> {
        if !viewport.is_valid() {
            return Err(RaceError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width_px = f64::from(viewport.width) - self.left - self.right;
        let height_px = f64::from(viewport.height) - self.top - self.bottom;
        if width_px <= 0.0 || height_px <= 0.0 {
            return Err(RaceError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(PlotArea {
            width_px,
            height_px,
        })
    }
}
