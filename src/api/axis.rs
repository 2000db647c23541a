use crate::core::format::format_axis_value_kusd;
use crate::core::scale::ValueScale;

/// Target tick count for the bottom value axis.
pub const VALUE_AXIS_TARGET_TICKS: usize = 8;

/// One value-axis tick with its grid position and label.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    pub x_px: f64,
    pub label: String,
}

/// Selects round-stepped ticks across the scale domain.
///
/// Steps are 1/2/5 multiples of a power of ten, so labels stay readable
/// while the domain animates between years. A degenerate domain yields the
/// zero tick alone.
#[must_use]
pub fn value_axis_ticks(scale: ValueScale, target_count: usize) -> Vec<ValueTick> {
    let max = scale.domain_max();
    if max <= 0.0 || target_count == 0 {
        return vec![ValueTick {
            value: 0.0,
            x_px: 0.0,
            label: format_axis_value_kusd(0.0),
        }];
    }

    let step = nice_step(max / target_count as f64);
    let count = (max / step).floor() as usize;
    (0..=count)
        .map(|index| {
            let value = step * index as f64;
            ValueTick {
                value,
                x_px: scale.to_pixel(value),
                label: format_axis_value_kusd(value),
            }
        })
        .collect()
}

fn nice_step(raw: f64) -> f64 {
    let power = 10f64.powf(raw.log10().floor());
    let fraction = raw / power;
    let nice = if fraction > 5.0 {
        10.0
    } else if fraction > 2.0 {
        5.0
    } else if fraction > 1.0 {
        2.0
    } else {
        1.0
    };
    nice * power
}

#[cfg(test)]
mod tests {
    use super::{VALUE_AXIS_TARGET_TICKS, nice_step, value_axis_ticks};
    use crate::core::scale::ValueScale;

    #[test]
    fn steps_snap_to_round_multiples() {
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(3.7), 5.0);
        assert_eq!(nice_step(80.0), 100.0);
        assert_eq!(nice_step(1200.0), 2000.0);
    }

    #[test]
    fn ticks_cover_the_domain_in_order() {
        let scale = ValueScale::new(1060.0, 780.0).expect("scale");
        let ticks = value_axis_ticks(scale, VALUE_AXIS_TARGET_TICKS);

        assert!(ticks.len() > 2);
        assert_eq!(ticks[0].value, 0.0);
        assert!(ticks.windows(2).all(|pair| pair[0].value < pair[1].value));
        assert!(ticks.last().map(|tick| tick.value).unwrap_or(f64::MAX) <= 1060.0);
        assert_eq!(ticks[0].label, "0k");
    }

    #[test]
    fn degenerate_domain_yields_the_zero_tick() {
        let scale = ValueScale::new(0.0, 780.0).expect("scale");
        let ticks = value_axis_ticks(scale, VALUE_AXIS_TARGET_TICKS);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].value, 0.0);
    }
}
