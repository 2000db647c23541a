mod axis;
mod engine;
mod playback;
mod resize;
mod scene;
mod tooltip;
mod transition;

pub use axis::{VALUE_AXIS_TARGET_TICKS, ValueTick, value_axis_ticks};
pub use engine::{RaceEngine, RaceEngineConfig, RaceStyle, ViewState};
pub use playback::{DEFAULT_TICK_INTERVAL, PlaybackController, PlaybackSnapshot};
pub use resize::{DEFAULT_RESIZE_QUIESCENT, ResizeDebouncer};
pub use scene::{BarPhase, BarScene, BarTarget, BarVisual, SceneBar, SceneDelta, diff_keys};
pub use tooltip::{TooltipBox, TooltipContent, TooltipState, UNKNOWN_PRODUCT};
pub use transition::{Lerp, TransitionDurations, Tween};
