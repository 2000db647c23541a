use std::time::Duration;

use indexmap::{IndexMap, IndexSet};

use crate::api::transition::{TransitionDurations, Tween};
use crate::render::Color;

/// Visual target state for one bar, in plot-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarVisual {
    pub y_px: f64,
    pub height_px: f64,
    pub width_px: f64,
    pub fill: Color,
}

/// Reconciliation target for one keyed bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarTarget {
    pub code: u32,
    pub axis_label: String,
    pub value_label: String,
    pub visual: BarVisual,
}

/// Lifecycle phase of a bar within the keyed scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPhase {
    Entering,
    Updating,
    Exiting,
}

/// Keyed diff of the previous bar set against the next one.
///
/// The three groups are disjoint by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneDelta {
    pub entering: Vec<u32>,
    pub updating: Vec<u32>,
    pub exiting: Vec<u32>,
}

#[must_use]
pub fn diff_keys(previous: &[u32], next: &[u32]) -> SceneDelta {
    let previous_set: IndexSet<u32> = previous.iter().copied().collect();
    let next_set: IndexSet<u32> = next.iter().copied().collect();

    SceneDelta {
        entering: next
            .iter()
            .copied()
            .filter(|code| !previous_set.contains(code))
            .collect(),
        updating: next
            .iter()
            .copied()
            .filter(|code| previous_set.contains(code))
            .collect(),
        exiting: previous
            .iter()
            .copied()
            .filter(|code| !next_set.contains(code))
            .collect(),
    }
}

/// One keyed bar with its in-flight tweens and label state.
#[derive(Debug, Clone)]
pub struct SceneBar {
    code: u32,
    phase: BarPhase,
    axis_label: String,
    value_label: String,
    y: Tween<f64>,
    height: Tween<f64>,
    width: Tween<f64>,
    fill: Tween<Color>,
    opacity: Tween<f64>,
    label_opacity: Tween<f64>,
    data_fill: Color,
    data_opacity: f64,
    hovered: bool,
}

impl SceneBar {
    #[must_use]
    pub fn code(&self) -> u32 {
        self.code
    }

    #[must_use]
    pub fn phase(&self) -> BarPhase {
        self.phase
    }

    #[must_use]
    pub fn axis_label(&self) -> &str {
        &self.axis_label
    }

    #[must_use]
    pub fn value_label(&self) -> &str {
        &self.value_label
    }

    #[must_use]
    pub fn y_px(&self) -> f64 {
        self.y.value()
    }

    #[must_use]
    pub fn height_px(&self) -> f64 {
        self.height.value()
    }

    #[must_use]
    pub fn width_px(&self) -> f64 {
        self.width.value()
    }

    #[must_use]
    pub fn fill(&self) -> Color {
        self.fill.value()
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity.value()
    }

    #[must_use]
    pub fn label_opacity(&self) -> f64 {
        self.label_opacity.value()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn step(&mut self, elapsed: Duration) {
        self.y.step(elapsed);
        self.height.step(elapsed);
        self.width.step(elapsed);
        self.fill.step(elapsed);
        self.opacity.step(elapsed);
        self.label_opacity.step(elapsed);
    }

    fn is_retired(&self) -> bool {
        self.phase == BarPhase::Exiting && self.width.is_complete() && self.opacity.is_complete()
    }
}

/// Retained keyed bar collection reconciled against each new ranked set.
///
/// Iteration order is the ranked order, with exiting bars kept at the end
/// until their exit transitions complete.
#[derive(Debug, Clone, Default)]
pub struct BarScene {
    bars: IndexMap<u32, SceneBar>,
    base_opacity: f64,
}

impl BarScene {
    #[must_use]
    pub fn new(base_opacity: f64) -> Self {
        Self {
            bars: IndexMap::new(),
            base_opacity,
        }
    }

    /// Codes currently occupying a ranked slot, in rank order.
    #[must_use]
    pub fn ranked_codes(&self) -> Vec<u32> {
        self.bars
            .values()
            .filter(|bar| bar.phase != BarPhase::Exiting)
            .map(SceneBar::code)
            .collect()
    }

    pub fn bars(&self) -> impl Iterator<Item = &SceneBar> {
        self.bars.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Reconciles the scene against the next ranked set.
    ///
    /// Entering bars grow from zero width at their final position;
    /// updating bars retarget geometry and fill; exiting bars shrink and
    /// fade until [`BarScene::step`] retires them. A bar re-ranked while
    /// still exiting is revived in place as an update.
    pub fn apply(&mut self, targets: &[BarTarget], durations: &TransitionDurations) -> SceneDelta {
        let previous = self.ranked_codes();
        let next: Vec<u32> = targets.iter().map(|target| target.code).collect();
        let delta = diff_keys(&previous, &next);

        let mut reconciled: IndexMap<u32, SceneBar> = IndexMap::with_capacity(targets.len());
        for target in targets {
            match self.bars.shift_remove(&target.code) {
                Some(mut bar) => {
                    bar.phase = BarPhase::Updating;
                    bar.axis_label = target.axis_label.clone();
                    bar.value_label = target.value_label.clone();
                    bar.y.retarget(target.visual.y_px, durations.bar_update);
                    bar.height.retarget(target.visual.height_px, durations.bar_update);
                    bar.width.retarget(target.visual.width_px, durations.bar_update);
                    bar.fill.retarget(target.visual.fill, durations.bar_update);
                    bar.opacity.retarget(self.base_opacity, durations.bar_update);
                    bar.label_opacity
                        .retarget(self.base_opacity, durations.bar_update);
                    bar.data_fill = target.visual.fill;
                    reconciled.insert(target.code, bar);
                }
                None => {
                    reconciled.insert(
                        target.code,
                        SceneBar {
                            code: target.code,
                            phase: BarPhase::Entering,
                            axis_label: target.axis_label.clone(),
                            value_label: target.value_label.clone(),
                            y: Tween::fixed(target.visual.y_px),
                            height: Tween::fixed(target.visual.height_px),
                            width: Tween::new(0.0, target.visual.width_px, durations.bar_enter),
                            fill: Tween::fixed(target.visual.fill),
                            opacity: Tween::fixed(self.base_opacity),
                            label_opacity: Tween::new(0.0, 1.0, durations.label_fade_in),
                            data_fill: target.visual.fill,
                            data_opacity: self.base_opacity,
                            hovered: false,
                        },
                    );
                }
            }
        }

        for (code, mut bar) in self.bars.drain(..) {
            if bar.phase != BarPhase::Exiting {
                bar.phase = BarPhase::Exiting;
                bar.hovered = false;
                bar.width.retarget(0.0, durations.bar_exit);
                bar.opacity.retarget(0.0, durations.bar_exit);
                bar.label_opacity.retarget(0.0, durations.label_fade_out);
            }
            reconciled.insert(code, bar);
        }

        self.bars = reconciled;
        delta
    }

    /// Advances every tween and retires bars whose exit completed.
    pub fn step(&mut self, elapsed: Duration) {
        for bar in self.bars.values_mut() {
            bar.step(elapsed);
        }
        self.bars.retain(|_, bar| !bar.is_retired());
    }

    /// Suspends the bar's in-flight transition and retargets it to the
    /// highlight fill at full opacity.
    pub fn hover(&mut self, code: u32, highlight: Color, duration: Duration) -> bool {
        let Some(bar) = self.bars.get_mut(&code) else {
            return false;
        };
        if bar.phase == BarPhase::Exiting {
            return false;
        }

        bar.y.freeze();
        bar.height.freeze();
        bar.width.freeze();
        bar.fill.retarget(highlight, duration);
        bar.opacity.retarget(1.0, duration);
        bar.hovered = true;
        true
    }

    /// Restores the bar's data-driven fill and opacity after a hover.
    pub fn unhover(&mut self, code: u32, duration: Duration) {
        let Some(bar) = self.bars.get_mut(&code) else {
            return;
        };
        if !bar.hovered {
            return;
        }

        bar.fill.retarget(bar.data_fill, duration);
        bar.opacity.retarget(bar.data_opacity, duration);
        bar.hovered = false;
    }

    /// Topmost non-exiting bar under a plot-area point.
    #[must_use]
    pub fn hit_test(&self, x_px: f64, y_px: f64) -> Option<u32> {
        self.bars
            .values()
            .filter(|bar| bar.phase != BarPhase::Exiting)
            .find(|bar| {
                (0.0..=bar.width_px()).contains(&x_px)
                    && (bar.y_px()..=bar.y_px() + bar.height_px()).contains(&y_px)
            })
            .map(SceneBar::code)
    }
}
