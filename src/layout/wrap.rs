//! Word wrapping with hyphenation for typed text.

use super::metrics::FontMetrics;

/// Slack allowed when comparing measured widths against the limit.
pub const WIDTH_EPSILON: f32 = 1e-3;

/// Wrap `text` into lines no wider than `max_width` at `font_size`.
///
/// - Newlines are hard breaks; blank input lines are kept as empty lines
/// - Runs of whitespace between words collapse to a single space
/// - A word wider than the line is split at the longest prefix that fits
///   with a trailing hyphen, and the remainder continues on the next line
///
/// Wrapping already-wrapped output at the same width returns it unchanged.
/// Only a single glyph wider than `max_width` can produce an overlong line.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32, metrics: &FontMetrics) -> Vec<String> {
    let fits = |line: &str| metrics.measure(line, font_size) <= max_width + WIDTH_EPSILON;

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut has_words = false;

        for word in paragraph.split_whitespace() {
            has_words = true;

            if !current.is_empty() {
                let candidate_width = metrics.measure(&current, font_size)
                    + metrics.measure(" ", font_size)
                    + metrics.measure(word, font_size);
                if candidate_width <= max_width + WIDTH_EPSILON {
                    current.push(' ');
                    current.push_str(word);
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            let mut rest = word;
            while !fits(rest) && rest.chars().count() > 1 {
                let (head, tail) = split_word(rest, font_size, max_width, metrics);
                lines.push(head);
                rest = tail;
            }
            current.push_str(rest);
        }

        if has_words {
            lines.push(current);
        } else {
            lines.push(String::new());
        }
    }

    lines
}

/// Split an overlong word into a line-sized head and the remaining tail.
///
/// The head is the longest prefix that still fits once a hyphen is appended.
/// When not even one glyph plus hyphen fits, a single glyph is emitted bare.
fn split_word<'a>(
    word: &'a str,
    font_size: f32,
    max_width: f32,
    metrics: &FontMetrics,
) -> (String, &'a str) {
    let boundaries: Vec<usize> = word.char_indices().map(|(i, _)| i).skip(1).collect();
    let prefix_fits = |n: usize| {
        let width = metrics.measure(&word[..boundaries[n - 1]], font_size)
            + metrics.measure("-", font_size);
        width <= max_width + WIDTH_EPSILON
    };

    // Largest n in 1..=boundaries.len() with prefix_fits(n); width grows with n.
    let (mut lo, mut hi) = (0usize, boundaries.len());
    while lo < hi {
        let mid = (lo + hi).div_ceil(2);
        if prefix_fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    if lo == 0 {
        let cut = boundaries[0];
        return (word[..cut].to_string(), &word[cut..]);
    }

    let cut = boundaries[lo - 1];
    (format!("{}-", &word[..cut]), &word[cut..])
}

/// Search bounds for [`fit_text_size`], in the caller's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSearch {
    pub max_size: f32,
    pub min_size: f32,
    pub step: f32,
}

/// Largest font size whose wrapped block fits a `box_width x box_height` box.
///
/// Walks down from `max_size` in `step` decrements and returns the first size
/// where every wrapped line fits the width and the stacked lines fit the
/// height. Falls back to `min_size` when nothing fits.
pub fn fit_text_size(
    text: &str,
    box_width: f32,
    box_height: f32,
    metrics: &FontMetrics,
    search: &FitSearch,
) -> f32 {
    let step = if search.step > 0.0 { search.step } else { 1.0 };
    let mut size = search.max_size;

    while size >= search.min_size {
        let lines = wrap_text(text, size, box_width, metrics);
        let widest = lines
            .iter()
            .map(|l| metrics.measure(l, size))
            .fold(0.0f32, f32::max);
        let height = metrics.block_height(lines.len(), size);
        if widest <= box_width + WIDTH_EPSILON && height <= box_height + WIDTH_EPSILON {
            return size;
        }
        size -= step;
    }

    search.min_size
}
