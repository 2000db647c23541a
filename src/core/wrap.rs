use smallvec::SmallVec;

/// Line-height between wrapped label lines, in ems.
pub const LINE_HEIGHT_EM: f64 = 1.1;

/// Backend-supplied text measurement.
///
/// Wrapping decisions depend on rendered glyph widths, which only the
/// drawing backend knows exactly. Headless use gets a deterministic
/// estimate from [`EstimatingTextMeasurer`].
pub trait TextMeasurer {
    fn text_width_px(&self, text: &str, font_size_px: f64) -> f64;
}

/// Deterministic, backend-independent width estimate by character class.
#[derive(Debug, Default, Clone, Copy)]
pub struct EstimatingTextMeasurer;

impl TextMeasurer for EstimatingTextMeasurer {
    fn text_width_px(&self, text: &str, font_size_px: f64) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                'i' | 'j' | 'l' | 't' | 'f' | '\'' => 0.30,
                'm' | 'w' => 0.82,
                'M' | 'W' => 0.95,
                'A'..='Z' => 0.72,
                '0'..='9' => 0.60,
                ' ' => 0.32,
                ',' | '.' | ';' | ':' => 0.30,
                _ => 0.54,
            }
        });
        units * font_size_px
    }
}

/// One wrapped line with its vertical offset from the label anchor, in ems.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    pub offset_em: f64,
}

/// Greedy word wrap constrained by pixel width.
///
/// Words accumulate onto the current line; when the measured line exceeds
/// `max_width_px` and already holds at least two words, the last word
/// drops to a new line. A single word wider than the limit stays alone on
/// its line and is never split.
#[must_use]
pub fn wrap_label(
    label: &str,
    max_width_px: f64,
    font_size_px: f64,
    measurer: &dyn TextMeasurer,
) -> SmallVec<[LabelLine; 2]> {
    let mut lines: SmallVec<[LabelLine; 2]> = SmallVec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in label.split_whitespace() {
        current.push(word);
        let joined = current.join(" ");
        if measurer.text_width_px(&joined, font_size_px) > max_width_px && current.len() > 1 {
            current.pop();
            push_line(&mut lines, current.join(" "));
            current.clear();
            current.push(word);
        }
    }
    if !current.is_empty() {
        push_line(&mut lines, current.join(" "));
    }

    lines
}

fn push_line(lines: &mut SmallVec<[LabelLine; 2]>, text: String) {
    let offset_em = lines.len() as f64 * LINE_HEIGHT_EM;
    lines.push(LabelLine { text, offset_em });
}
