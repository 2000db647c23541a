mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, GridLinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::RaceResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from ranking, playback, and interaction
/// logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RaceResult<()>;
}
