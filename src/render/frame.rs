use crate::core::Viewport;
use crate::error::{RaceError, RaceResult};
use crate::render::{GridLinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one draw pass.
///
/// Primitives are ordered back-to-front within each vector; rects draw
/// under texts so value labels and the tooltip stay readable.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<GridLinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: GridLinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    pub fn validate(&self) -> RaceResult<()> {
        if !self.viewport.is_valid() {
            return Err(RaceError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.lines.iter().try_for_each(|line| line.validate())?;
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
