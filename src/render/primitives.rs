use serde::{Deserialize, Serialize};

use crate::error::{RaceError, RaceResult};

fn ensure_finite(what: &str, values: &[f64]) -> RaceResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(RaceError::InvalidData(format!("{what} must be finite")))
    }
}

/// CSS-style color: 8-bit channels plus a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Per-channel linear interpolation; `t` is clamped to [0, 1].
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel =
            |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self {
            red: channel(from.red, to.red),
            green: channel(from.green, to.green),
            blue: channel(from.blue, to.blue),
            alpha: from.alpha + (to.alpha - from.alpha) * t,
        }
    }

    /// `rgba(r, g, b, a)` string, the form hosts feed to CSS-like backends.
    #[must_use]
    pub fn to_css_rgba(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.red, self.green, self.blue, self.alpha
        )
    }

    pub fn validate(self) -> RaceResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(RaceError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one vertical grid line spanning the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLinePrimitive {
    pub x_px: f64,
    pub y_top_px: f64,
    pub y_bottom_px: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl GridLinePrimitive {
    #[must_use]
    pub const fn new(
        x_px: f64,
        y_top_px: f64,
        y_bottom_px: f64,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            x_px,
            y_top_px,
            y_bottom_px,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> RaceResult<()> {
        ensure_finite(
            "grid line coordinates",
            &[self.x_px, self.y_top_px, self.y_bottom_px],
        )?;
        if self.y_bottom_px < self.y_top_px {
            return Err(RaceError::InvalidData(
                "grid line must run downward".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RaceError::InvalidData(
                "grid line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled, optionally rounded rectangle.
///
/// Zero width or height is legal: bars animate through it while entering
/// and exiting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
        color: Color,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius,
            color,
        }
    }

    pub fn validate(self) -> RaceResult<()> {
        ensure_finite(
            "rect geometry",
            &[self.x, self.y, self.width, self.height, self.corner_radius],
        )?;
        if self.width < 0.0 || self.height < 0.0 || self.corner_radius < 0.0 {
            return Err(RaceError::InvalidData(
                "rect extents must be >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> RaceResult<()> {
        if self.text.is_empty() {
            return Err(RaceError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite("text coordinates", &[self.x, self.y])?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(RaceError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn lerp_reaches_both_endpoints_exactly() {
        let from = Color::rgb8(251, 207, 232);
        let to = Color::rgb8(245, 158, 11);
        assert_eq!(Color::lerp(from, to, 0.0), from);
        assert_eq!(Color::lerp(from, to, 1.0), to);
        assert_eq!(Color::lerp(from, to, 2.5), to);
    }

    #[test]
    fn css_output_carries_all_channels() {
        let color = Color::rgba8(17, 24, 39, 0.92);
        assert_eq!(color.to_css_rgba(), "rgba(17, 24, 39, 0.920)");
    }
}
