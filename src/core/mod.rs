pub mod dataset;
pub mod format;
pub mod ranking;
pub mod scale;
pub mod types;
pub mod wrap;

pub use dataset::{ProductRecord, TradeTimeSeries};
pub use format::{
    NOT_AVAILABLE, format_axis_value_kusd, format_quantity_tons, format_value_kusd, hs6_code,
    short_label,
};
pub use ranking::{DEFAULT_TOP_N, MIN_TOP_N, max_value_kusd, rank_top_n, resolve_top_n};
pub use scale::{BandScale, SequentialColorScale, ValueScale};
pub use types::{Margins, PlotArea, Viewport};
pub use wrap::{EstimatingTextMeasurer, LINE_HEIGHT_EM, LabelLine, TextMeasurer, wrap_label};
