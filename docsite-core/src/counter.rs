//! # Counter Animation
//!
//! Counts a number embedded in text up from zero while keeping whatever
//! surrounds it.
//!
//! ```text
//! "$1,200+"  ──parse──►  prefix "$", target 1200, grouped, suffix "+"
//!            ──frames─►  "$0+" … "$598+" … "$1,200+"
//! ```
//!
//! Values are integers in the smallest displayed unit, so `"4.8★"` animates
//! 0 → 48 tenths and renders as `0.0★ … 4.8★`. The last frame is the
//! source text itself, so `"007"` ends as `"007"`. Text without digits counts
//! to zero and finishes on its first frame.

use serde::{Deserialize, Serialize};

use crate::config::CounterConfig;

/// The numeric payload of a counter's text and everything around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterFormat {
    prefix: String,
    suffix: String,
    target: u64,
    decimals: usize,
    grouped: bool,
    /// The parsed text, kept when it held a number.
    source: Option<String>,
}

impl CounterFormat {
    /// Isolate the first number in `text`.
    ///
    /// Text without a usable number yields target 0, keeping the whole text
    /// as the suffix.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let Some((start, end)) = numeric_span(text) else {
            return Self::fallback(text);
        };

        let run = &text[start..end];
        let grouped = run.contains(',');
        let (whole, fraction) = run.split_once('.').unwrap_or((run, ""));
        let digits: String = whole
            .chars()
            .filter(char::is_ascii_digit)
            .chain(fraction.chars())
            .collect();

        if let Ok(target) = digits.parse::<u64>() {
            Self {
                prefix: text[..start].to_string(),
                suffix: text[end..].to_string(),
                target,
                decimals: fraction.len(),
                grouped,
                source: Some(text.to_string()),
            }
        } else {
            tracing::debug!("Counter value out of range: {run}");
            Self::fallback(text)
        }
    }

    fn fallback(text: &str) -> Self {
        Self {
            prefix: String::new(),
            suffix: text.to_string(),
            target: 0,
            decimals: 0,
            grouped: false,
            source: None,
        }
    }

    /// Target in the smallest displayed unit.
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// Text before the number.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the number.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Digits after the decimal point.
    #[must_use]
    pub const fn decimals(&self) -> usize {
        self.decimals
    }

    /// Text shown once the count completes.
    ///
    /// The original text when it held a number, otherwise the rendered
    /// target.
    #[must_use]
    pub fn finished_text(&self) -> String {
        self.source
            .clone()
            .unwrap_or_else(|| self.render(self.target))
    }

    /// Render a value (in the smallest displayed unit) with the original
    /// prefix, suffix, precision and grouping.
    #[must_use]
    pub fn render(&self, value: u64) -> String {
        let mut digits = value.to_string();
        if digits.len() <= self.decimals {
            digits = format!("{}{digits}", "0".repeat(self.decimals + 1 - digits.len()));
        }
        let (whole, fraction) = digits.split_at(digits.len() - self.decimals);
        let whole = if self.grouped {
            group_thousands(whole)
        } else {
            whole.to_string()
        };

        let mut out = String::with_capacity(self.prefix.len() + digits.len() + self.suffix.len() + 4);
        out.push_str(&self.prefix);
        out.push_str(&whole);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// Byte range of the first number: digits, `,` between digits, and at most
/// one `.` followed by a digit.
fn numeric_span(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut end = start;
    let mut seen_point = false;

    while end < bytes.len() {
        let b = bytes[end];
        let next_is_digit = bytes.get(end + 1).is_some_and(u8::is_ascii_digit);
        if b.is_ascii_digit() || (b == b',' && !seen_point && next_is_digit) {
            end += 1;
        } else if b == b'.' && !seen_point && next_is_digit {
            seen_point = true;
            end += 1;
        } else {
            break;
        }
    }
    Some((start, end))
}

fn group_thousands(whole: &str) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Frame-by-frame linear count from zero to a [`CounterFormat`]'s target.
///
/// Yields the text for each tick; the last frame is the source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterAnimation {
    format: CounterFormat,
    steps: u32,
    frame: u32,
}

impl CounterAnimation {
    /// Animation over the configured duration and tick.
    #[must_use]
    pub fn new(format: CounterFormat, config: &CounterConfig) -> Self {
        let tick = config.tick_ms.max(1);
        let steps = if format.target == 0 {
            1
        } else {
            config.duration_ms.div_ceil(tick).max(1)
        };
        Self {
            format,
            steps,
            frame: 0,
        }
    }

    /// Parse `text` and build an animation for it.
    #[must_use]
    pub fn for_text(text: &str, config: &CounterConfig) -> Self {
        Self::new(CounterFormat::parse(text), config)
    }

    /// The parsed format.
    #[must_use]
    pub const fn format(&self) -> &CounterFormat {
        &self.format
    }

    /// Total number of frames.
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether the final frame has been produced.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.frame >= self.steps
    }

    /// Value shown at frame `k` (clamped to the last frame).
    #[must_use]
    pub fn value_at(&self, frame: u32) -> u64 {
        let frame = frame.min(self.steps);
        if frame == self.steps {
            return self.format.target;
        }
        let scaled = u128::from(self.format.target) * u128::from(frame) / u128::from(self.steps);
        u64::try_from(scaled).unwrap_or(self.format.target)
    }

    /// Text of the final frame.
    #[must_use]
    pub fn final_text(&self) -> String {
        self.format.finished_text()
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.frame += 1;
        if self.is_finished() {
            return Some(self.final_text());
        }
        Some(self.format.render(self.value_at(self.frame)))
    }
}
