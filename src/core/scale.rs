use serde::{Deserialize, Serialize};

use crate::error::{RaceError, RaceResult};
use crate::render::Color;

/// Linear value scale from `[0, domain_max]` onto `[0, range_px]`.
///
/// A zero domain degenerates to the constant zero map instead of erroring,
/// which is what an empty ranking renders as.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
    range_px: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64, range_px: f64) -> RaceResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(RaceError::InvalidData(
                "value scale domain must be finite and non-negative".to_owned(),
            ));
        }
        if !range_px.is_finite() || range_px < 0.0 {
            return Err(RaceError::InvalidData(
                "value scale range must be finite and non-negative".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_px,
        })
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn range_px(self) -> f64 {
        self.range_px
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        if self.domain_max <= 0.0 {
            return 0.0;
        }
        (value / self.domain_max) * self.range_px
    }
}

/// Positions `count` horizontal bands over `[0, range_px]` with fractional
/// padding between and around them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    count: usize,
    range_px: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range_px: f64, padding: f64) -> RaceResult<Self> {
        if !range_px.is_finite() || range_px < 0.0 {
            return Err(RaceError::InvalidData(
                "band scale range must be finite and non-negative".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(RaceError::InvalidData(
                "band scale padding must be in [0, 1)".to_owned(),
            ));
        }

        Ok(Self {
            count,
            range_px,
            padding,
        })
    }

    fn step(self) -> f64 {
        self.range_px / (self.count as f64 + self.padding).max(1.0)
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.step() * (1.0 - self.padding)
    }

    /// Top edge of the band at `index`, index 0 nearest the top.
    #[must_use]
    pub fn position(self, index: usize) -> f64 {
        self.step() * (self.padding + index as f64)
    }
}

/// Continuous color over `[0, domain_max]`, interpolated through a fixed
/// stop sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialColorScale {
    domain_max: f64,
    stops: Vec<Color>,
}

impl SequentialColorScale {
    pub fn new(domain_max: f64, stops: Vec<Color>) -> RaceResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(RaceError::InvalidData(
                "color scale domain must be finite and non-negative".to_owned(),
            ));
        }
        if stops.len() < 2 {
            return Err(RaceError::InvalidData(
                "color scale needs at least two stops".to_owned(),
            ));
        }
        for stop in &stops {
            stop.validate()?;
        }

        Ok(Self { domain_max, stops })
    }

    #[must_use]
    pub fn color_at(&self, value: f64) -> Color {
        if self.domain_max <= 0.0 || !value.is_finite() {
            return self.stops[0];
        }

        let t = (value / self.domain_max).clamp(0.0, 1.0);
        let scaled = t * (self.stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = scaled - lower as f64;
        Color::lerp(self.stops[lower], self.stops[lower + 1], frac)
    }
}

#[cfg(test)]
mod tests {
    use super::{BandScale, SequentialColorScale, ValueScale};
    use crate::render::Color;
    use approx::assert_relative_eq;

    #[test]
    fn value_scale_maps_domain_linearly() {
        let scale = ValueScale::new(200.0, 1000.0).expect("scale");
        assert_relative_eq!(scale.to_pixel(0.0), 0.0);
        assert_relative_eq!(scale.to_pixel(50.0), 250.0);
        assert_relative_eq!(scale.to_pixel(200.0), 1000.0);
    }

    #[test]
    fn empty_domain_degenerates_to_zero() {
        let scale = ValueScale::new(0.0, 1000.0).expect("scale");
        assert_eq!(scale.to_pixel(123.0), 0.0);
    }

    #[test]
    fn band_scale_partitions_range() {
        let scale = BandScale::new(4, 415.0, 0.15).expect("scale");
        let step = 415.0 / 4.15;
        assert_relative_eq!(scale.bandwidth(), step * 0.85);
        assert_relative_eq!(scale.position(0), step * 0.15);
        assert_relative_eq!(scale.position(3), step * 3.15);
    }

    #[test]
    fn color_scale_hits_endpoint_stops() {
        let scale = SequentialColorScale::new(
            10.0,
            vec![Color::rgb8(0, 0, 0), Color::rgb8(255, 255, 255)],
        )
        .expect("scale");
        assert_eq!(scale.color_at(0.0), Color::rgb8(0, 0, 0));
        assert_eq!(scale.color_at(10.0), Color::rgb8(255, 255, 255));
        assert_eq!(scale.color_at(5.0), Color::rgb8(128, 128, 128));
    }
}
