//! Paragraph flow: greedy word-wrap and justification arithmetic.
//!
//! The wrap is a greedy first-fit over whitespace-split words, measured in em
//! units against the usable text width. Hard `\n` breaks inside a block are
//! honored before wrapping; a doubled `\n` therefore yields a blank line.

use crate::pdf::font_metrics::FontMetricTable;

/// One printed line of a wrapped paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLine {
    pub words: Vec<String>,
    /// Width of the line at normal word spacing, in em units.
    pub natural_width_em: f32,
    /// True for the final line of a hard-break segment. Justification never
    /// stretches these.
    pub ends_segment: bool,
}

impl FlowLine {
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }
}

/// Wraps a block of text into printed lines.
///
/// The text is first split on hard `\n` breaks; each segment is then
/// word-wrapped greedily at `max_width_em`. An empty segment (from a doubled
/// newline, or leading/trailing ones) becomes a blank line.
pub fn wrap_text(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<FlowLine> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, metrics, max_width_em, &mut lines);
    }
    lines
}

fn wrap_segment(
    segment: &str,
    metrics: &FontMetricTable,
    max_width_em: f32,
    out: &mut Vec<FlowLine>,
) {
    let words: Vec<&str> = segment.split_whitespace().collect();
    if words.is_empty() {
        out.push(FlowLine {
            words: vec![],
            natural_width_em: 0.0,
            ends_segment: true,
        });
        return;
    }

    let mut current: Vec<String> = Vec::new();
    let mut current_width = 0.0_f32;

    for word in &words {
        let word_w = metrics.measure_str(word);
        let space_w = if current.is_empty() {
            0.0
        } else {
            metrics.space_width
        };

        if !current.is_empty() && current_width + space_w + word_w > max_width_em {
            // Current line is full; emit it and start a new one.
            out.push(FlowLine {
                words: std::mem::take(&mut current),
                natural_width_em: current_width,
                ends_segment: false,
            });
            current.push((*word).to_string());
            current_width = word_w;
        } else {
            current.push((*word).to_string());
            current_width += space_w + word_w;
        }
    }
    out.push(FlowLine {
        words: current,
        natural_width_em: current_width,
        ends_segment: true,
    });
}

/// Inter-word space width (em) that fills the line out to `max_width_em`.
///
/// Segment-final lines, blank lines, and single-word lines keep the normal
/// space width. The result never shrinks below the normal space width.
pub fn justified_space_em(line: &FlowLine, metrics: &FontMetricTable, max_width_em: f32) -> f32 {
    let gaps = line.words.len().saturating_sub(1);
    if line.ends_segment || gaps == 0 {
        return metrics.space_width;
    }
    let slack = max_width_em - line.natural_width_em;
    (metrics.space_width + slack / gaps as f32).max(metrics.space_width)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
