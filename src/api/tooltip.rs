use serde::{Deserialize, Serialize};

use crate::core::dataset::ProductRecord;
use crate::core::format::{format_quantity_tons, format_value_kusd, hs6_code};
use crate::core::types::Viewport;

/// Title rendered when a record carries no display name.
pub const UNKNOWN_PRODUCT: &str = "Unknown product";

/// Pixel box reserved for the hover overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipBox {
    pub width_px: f64,
    pub height_px: f64,
    pub pointer_pad_px: f64,
}

impl Default for TooltipBox {
    fn default() -> Self {
        Self {
            width_px: 260.0,
            height_px: 140.0,
            pointer_pad_px: 14.0,
        }
    }
}

/// Formatted detail lines for one hovered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub hs6: String,
    pub value: String,
    pub quantity: String,
}

impl TooltipContent {
    #[must_use]
    pub fn for_record(record: &ProductRecord) -> Self {
        Self {
            title: record
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_owned()),
            hs6: hs6_code(record.code),
            value: format_value_kusd(record.value_kusd),
            quantity: format_quantity_tons(record.quantity_tons),
        }
    }
}

/// Pointer-anchored overlay state.
///
/// The anchor is offset from the pointer and clamped so the overlay box
/// never extends past the right or bottom viewport edge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    visible: bool,
    x_px: f64,
    y_px: f64,
    content: Option<TooltipContent>,
}

impl TooltipState {
    pub fn show(
        &mut self,
        content: TooltipContent,
        pointer: (f64, f64),
        overlay: TooltipBox,
        viewport: Viewport,
    ) {
        self.content = Some(content);
        self.visible = true;
        self.move_to(pointer, overlay, viewport);
    }

    pub fn move_to(&mut self, pointer: (f64, f64), overlay: TooltipBox, viewport: Viewport) {
        let (x_px, y_px) = clamp_anchor(pointer, overlay, viewport);
        self.x_px = x_px;
        self.y_px = y_px;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.content = None;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn anchor(&self) -> (f64, f64) {
        (self.x_px, self.y_px)
    }

    #[must_use]
    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }
}

fn clamp_anchor(pointer: (f64, f64), overlay: TooltipBox, viewport: Viewport) -> (f64, f64) {
    let max_x = (f64::from(viewport.width) - overlay.width_px).max(0.0);
    let max_y = (f64::from(viewport.height) - overlay.height_px).max(0.0);
    (
        (pointer.0 + overlay.pointer_pad_px).clamp(0.0, max_x),
        (pointer.1 + overlay.pointer_pad_px).clamp(0.0, max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::{TooltipBox, TooltipState, clamp_anchor};
    use crate::core::types::Viewport;

    #[test]
    fn anchor_offsets_from_pointer_inside_the_viewport() {
        let anchor = clamp_anchor((100.0, 80.0), TooltipBox::default(), Viewport::new(1280, 720));
        assert_eq!(anchor, (114.0, 94.0));
    }

    #[test]
    fn anchor_clamps_to_right_and_bottom_edges() {
        let overlay = TooltipBox::default();
        let viewport = Viewport::new(1280, 720);
        let (x_px, y_px) = clamp_anchor((1270.0, 710.0), overlay, viewport);
        assert_eq!(x_px, 1280.0 - overlay.width_px);
        assert_eq!(y_px, 720.0 - overlay.height_px);
    }

    #[test]
    fn hide_clears_content() {
        let mut tooltip = TooltipState::default();
        tooltip.hide();
        assert!(!tooltip.is_visible());
        assert!(tooltip.content().is_none());
    }
}
