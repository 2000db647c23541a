use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::axis::{VALUE_AXIS_TARGET_TICKS, value_axis_ticks};
use crate::api::playback::{DEFAULT_TICK_INTERVAL, PlaybackController, PlaybackSnapshot};
use crate::api::resize::{DEFAULT_RESIZE_QUIESCENT, ResizeDebouncer};
use crate::api::scene::{BarPhase, BarScene, BarTarget, BarVisual, SceneDelta};
use crate::api::tooltip::{TooltipBox, TooltipContent, TooltipState};
use crate::api::transition::TransitionDurations;
use crate::core::dataset::{ProductRecord, TradeTimeSeries};
use crate::core::format::{format_value_kusd, short_label};
use crate::core::ranking::{DEFAULT_TOP_N, MIN_TOP_N, max_value_kusd, rank_top_n, resolve_top_n};
use crate::core::scale::{BandScale, SequentialColorScale, ValueScale};
use crate::core::types::{Margins, Viewport};
use crate::core::wrap::{EstimatingTextMeasurer, TextMeasurer, wrap_label};
use crate::error::RaceResult;
use crate::render::{
    Color, GridLinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Visual styling defaults carried from the reference design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceStyle {
    pub color_stops: Vec<Color>,
    pub highlight_fill: Color,
    pub bar_opacity: f64,
    pub corner_radius_px: f64,
    pub band_padding: f64,
    /// Multiplier extending the value domain past the ranked maximum.
    pub domain_headroom: f64,
    pub value_label_offset_px: f64,
    pub axis_font_size_px: f64,
    pub label_font_size_px: f64,
    pub value_font_size_px: f64,
    pub watermark_font_size_px: f64,
    /// Pixels of the left margin withheld from the label wrap budget.
    pub label_wrap_reserve_px: f64,
    pub grid_color: Color,
    pub text_color: Color,
    pub watermark_color: Color,
    pub tooltip_fill: Color,
    pub tooltip_text: Color,
    pub durations: TransitionDurations,
    pub overlay: TooltipBox,
}

impl Default for RaceStyle {
    fn default() -> Self {
        Self {
            color_stops: vec![
                Color::rgb8(0xfb, 0xcf, 0xe8),
                Color::rgb8(0xfb, 0x71, 0x85),
                Color::rgb8(0xf5, 0x9e, 0x0b),
            ],
            highlight_fill: Color::rgb8(0xea, 0x58, 0x0c),
            bar_opacity: 0.95,
            corner_radius_px: 8.0,
            band_padding: 0.15,
            domain_headroom: 1.06,
            value_label_offset_px: 8.0,
            axis_font_size_px: 11.0,
            label_font_size_px: 13.0,
            value_font_size_px: 12.0,
            watermark_font_size_px: 48.0,
            label_wrap_reserve_px: 30.0,
            grid_color: Color::rgba8(0, 0, 0, 0.08),
            text_color: Color::rgb8(0x1f, 0x29, 0x37),
            watermark_color: Color::rgba8(0, 0, 0, 0.10),
            tooltip_fill: Color::rgba8(17, 24, 39, 0.92),
            tooltip_text: Color::rgb8(255, 255, 255),
            durations: TransitionDurations::default(),
            overlay: TooltipBox::default(),
        }
    }
}

/// Public engine bootstrap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEngineConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub top_n: usize,
    pub tick_interval: Duration,
    pub resize_quiescent: Duration,
    pub style: RaceStyle,
}

impl RaceEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            top_n: DEFAULT_TOP_N,
            tick_interval: DEFAULT_TICK_INTERVAL,
            resize_quiescent: DEFAULT_RESIZE_QUIESCENT,
            style: RaceStyle::default(),
        }
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RaceStyle) -> Self {
        self.style = style;
        self
    }
}

/// Transient view selection; playing/paused lives in the playback
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub year_index: usize,
    pub top_n: usize,
}

/// Animated ranked-bar engine over one immutable trade time series.
///
/// All time-dependent behavior (playback ticks, tweens, the resize
/// debouncer) advances exclusively through [`RaceEngine::step`].
pub struct RaceEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    margins: Margins,
    style: RaceStyle,
    series: TradeTimeSeries,
    view: ViewState,
    playback: PlaybackController,
    scene: BarScene,
    tooltip: TooltipState,
    debouncer: ResizeDebouncer,
    measurer: Box<dyn TextMeasurer>,
    hovered: Option<u32>,
    ranked: Vec<ProductRecord>,
    value_scale: ValueScale,
    band_scale: BandScale,
    color_scale: SequentialColorScale,
}

impl<R: Renderer> RaceEngine<R> {
    pub fn new(renderer: R, series: TradeTimeSeries, config: RaceEngineConfig) -> RaceResult<Self> {
        config.margins.plot_area(config.viewport)?;

        let mut engine = Self {
            renderer,
            viewport: config.viewport,
            margins: config.margins,
            scene: BarScene::new(config.style.bar_opacity),
            view: ViewState {
                year_index: 0,
                top_n: config.top_n.max(MIN_TOP_N),
            },
            playback: PlaybackController::new(config.tick_interval),
            tooltip: TooltipState::default(),
            debouncer: ResizeDebouncer::new(config.resize_quiescent),
            measurer: Box::new(EstimatingTextMeasurer),
            hovered: None,
            ranked: Vec::new(),
            value_scale: ValueScale::new(0.0, 0.0)?,
            band_scale: BandScale::new(0, 0.0, config.style.band_padding)?,
            color_scale: SequentialColorScale::new(0.0, config.style.color_stops.clone())?,
            style: config.style,
            series,
        };
        engine.apply_current_year()?;
        Ok(engine)
    }

    /// Recomputes the RankedSet, scales, and scene targets for the
    /// current year. The ranking is always derived fresh, never carried
    /// across years.
    fn apply_current_year(&mut self) -> RaceResult<SceneDelta> {
        let area = self.margins.plot_area(self.viewport)?;
        let ranked = rank_top_n(self.series.records_at(self.view.year_index), self.view.top_n);
        let max_value = max_value_kusd(&ranked);

        self.value_scale =
            ValueScale::new(max_value * self.style.domain_headroom, area.width_px)?;
        self.band_scale =
            BandScale::new(ranked.len(), area.height_px, self.style.band_padding)?;
        self.color_scale =
            SequentialColorScale::new(max_value, self.style.color_stops.clone())?;

        let targets: Vec<BarTarget> = ranked
            .iter()
            .enumerate()
            .map(|(rank, record)| BarTarget {
                code: record.code,
                axis_label: short_label(record),
                value_label: format_value_kusd(record.value_kusd),
                visual: BarVisual {
                    y_px: self.band_scale.position(rank),
                    height_px: self.band_scale.bandwidth(),
                    width_px: self.value_scale.to_pixel(record.value_kusd),
                    fill: self.color_scale.color_at(record.value_kusd),
                },
            })
            .collect();

        let delta = self.scene.apply(&targets, &self.style.durations);
        self.ranked = ranked;
        debug!(
            year_index = self.view.year_index,
            entering = delta.entering.len(),
            updating = delta.updating.len(),
            exiting = delta.exiting.len(),
            "reconciled scene"
        );
        Ok(delta)
    }

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Manual year selection: always pauses first, then clamps and
    /// applies the new index.
    pub fn scrub_to(&mut self, year_index: usize) -> RaceResult<SceneDelta> {
        self.playback.pause();
        self.view.year_index = year_index.min(self.series.last_index());
        self.apply_current_year()
    }

    /// Resolves a raw top-N control value and re-renders the current
    /// year. Playback state is untouched.
    pub fn set_top_n_input(&mut self, raw: Option<&str>) -> RaceResult<SceneDelta> {
        self.set_top_n(resolve_top_n(raw))
    }

    pub fn set_top_n(&mut self, top_n: usize) -> RaceResult<SceneDelta> {
        self.view.top_n = top_n.max(MIN_TOP_N);
        self.apply_current_year()
    }

    /// Advances host time: playback ticks, the resize debouncer, and all
    /// scene tweens.
    ///
    /// A tick that would step past the last year pauses playback instead
    /// of wrapping.
    pub fn step(&mut self, elapsed: Duration) -> RaceResult<()> {
        let ticks = self.playback.step(elapsed);
        for _ in 0..ticks {
            if self.view.year_index >= self.series.last_index() {
                self.playback.pause();
                break;
            }
            self.view.year_index += 1;
            self.apply_current_year()?;
        }

        if let Some(viewport) = self.debouncer.step(elapsed) {
            self.apply_resize(viewport)?;
        }

        self.scene.step(elapsed);
        Ok(())
    }

    /// Queues a viewport change; the layout recomputes after the
    /// debouncer's quiescent period elapses in [`RaceEngine::step`].
    pub fn request_resize(&mut self, viewport: Viewport) {
        self.debouncer.request(viewport);
    }

    fn apply_resize(&mut self, viewport: Viewport) -> RaceResult<()> {
        self.margins.plot_area(viewport)?;
        self.viewport = viewport;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "applied debounced resize"
        );
        self.apply_current_year()?;
        Ok(())
    }

    /// Pointer movement in viewport coordinates; drives hover highlight
    /// and the tooltip overlay.
    pub fn pointer_move(&mut self, x_px: f64, y_px: f64) {
        let hit = self
            .scene
            .hit_test(x_px - self.margins.left, y_px - self.margins.top);

        match (hit, self.hovered) {
            (Some(code), Some(previous)) if code == previous => {
                self.tooltip
                    .move_to((x_px, y_px), self.style.overlay, self.viewport);
            }
            (Some(code), previous) => {
                if let Some(previous) = previous {
                    self.scene.unhover(previous, self.style.durations.hover);
                }
                if self
                    .scene
                    .hover(code, self.style.highlight_fill, self.style.durations.hover)
                {
                    match self.ranked.iter().find(|record| record.code == code) {
                        Some(record) => self.tooltip.show(
                            TooltipContent::for_record(record),
                            (x_px, y_px),
                            self.style.overlay,
                            self.viewport,
                        ),
                        None => warn!(code, "hovered bar missing from the ranked set"),
                    }
                    self.hovered = Some(code);
                }
            }
            (None, Some(previous)) => {
                self.scene.unhover(previous, self.style.durations.hover);
                self.tooltip.hide();
                self.hovered = None;
            }
            (None, None) => {}
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some(previous) = self.hovered.take() {
            self.scene.unhover(previous, self.style.durations.hover);
        }
        self.tooltip.hide();
    }

    /// Materializes the current scene into a backend-agnostic frame.
    pub fn build_render_frame(&self) -> RaceResult<RenderFrame> {
        let area = self.margins.plot_area(self.viewport)?;
        let mut frame = RenderFrame::new(self.viewport);
        let origin_x = self.margins.left;
        let origin_y = self.margins.top;

        for tick in value_axis_ticks(self.value_scale, VALUE_AXIS_TARGET_TICKS) {
            frame.push_line(GridLinePrimitive::new(
                origin_x + tick.x_px,
                origin_y,
                origin_y + area.height_px,
                1.0,
                self.style.grid_color,
            ));
            frame.push_text(TextPrimitive::new(
                tick.label,
                origin_x + tick.x_px,
                origin_y + area.height_px + self.style.axis_font_size_px + 6.0,
                self.style.axis_font_size_px,
                self.style.text_color,
                TextHAlign::Center,
            ));
        }

        if let Some(year) = self.series.year_at(self.view.year_index) {
            frame.push_text(TextPrimitive::new(
                year.to_string(),
                origin_x + area.width_px - 10.0,
                origin_y + area.height_px - 14.0,
                self.style.watermark_font_size_px,
                self.style.watermark_color,
                TextHAlign::Right,
            ));
        }

        let wrap_width = (self.margins.left - self.style.label_wrap_reserve_px).max(0.0);
        for bar in self.scene.bars() {
            let opacity = bar.opacity().clamp(0.0, 1.0);
            let fill = bar.fill().with_alpha(bar.fill().alpha * opacity);
            frame.push_rect(RectPrimitive::new(
                origin_x,
                origin_y + bar.y_px(),
                bar.width_px().max(0.0),
                bar.height_px().max(0.0),
                self.style.corner_radius_px,
                fill,
            ));

            let mid_y = origin_y + bar.y_px() + bar.height_px() / 2.0;
            let label_alpha = bar.label_opacity().clamp(0.0, 1.0);
            frame.push_text(TextPrimitive::new(
                bar.value_label(),
                origin_x + bar.width_px() + self.style.value_label_offset_px,
                mid_y,
                self.style.value_font_size_px,
                self.style.text_color.with_alpha(label_alpha),
                TextHAlign::Left,
            ));

            if bar.phase() != BarPhase::Exiting {
                let lines = wrap_label(
                    bar.axis_label(),
                    wrap_width,
                    self.style.label_font_size_px,
                    self.measurer.as_ref(),
                );
                for line in lines {
                    frame.push_text(TextPrimitive::new(
                        line.text,
                        self.margins.left - 10.0,
                        mid_y + line.offset_em * self.style.label_font_size_px,
                        self.style.label_font_size_px,
                        self.style.text_color,
                        TextHAlign::Right,
                    ));
                }
            }
        }

        if let Some(content) = self.tooltip.content().filter(|_| self.tooltip.is_visible()) {
            let (x_px, y_px) = self.tooltip.anchor();
            let overlay = self.style.overlay;
            frame.push_rect(RectPrimitive::new(
                x_px,
                y_px,
                overlay.width_px,
                overlay.height_px,
                10.0,
                self.style.tooltip_fill,
            ));

            let pad = 12.0;
            let title_size = self.style.label_font_size_px;
            let line_size = self.style.value_font_size_px;
            let detail_lines = [
                format!("HS6: {}", content.hs6),
                format!("Value: {} (thousand USD)", content.value),
                format!("Quantity: {}", content.quantity),
            ];
            frame.push_text(TextPrimitive::new(
                content.title.clone(),
                x_px + pad,
                y_px + pad + title_size,
                title_size,
                self.style.tooltip_text,
                TextHAlign::Left,
            ));
            for (index, line) in detail_lines.into_iter().enumerate() {
                frame.push_text(TextPrimitive::new(
                    line,
                    x_px + pad,
                    y_px + pad + title_size + (index as f64 + 1.0) * line_size * 1.4,
                    line_size,
                    self.style.tooltip_text.with_alpha(0.9),
                    TextHAlign::Left,
                ));
            }
        }

        Ok(frame)
    }

    pub fn render(&mut self) -> RaceResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn year_index(&self) -> usize {
        self.view.year_index
    }

    #[must_use]
    pub fn current_year(&self) -> Option<i32> {
        self.series.year_at(self.view.year_index)
    }

    #[must_use]
    pub fn top_n(&self) -> usize {
        self.view.top_n
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    #[must_use]
    pub fn playback_snapshot(&self) -> PlaybackSnapshot {
        self.playback.snapshot()
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    #[must_use]
    pub fn scene(&self) -> &BarScene {
        &self.scene
    }

    #[must_use]
    pub fn series(&self) -> &TradeTimeSeries {
        &self.series
    }

    /// The RankedSet driving the current render pass.
    #[must_use]
    pub fn ranked(&self) -> &[ProductRecord] {
        &self.ranked
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
