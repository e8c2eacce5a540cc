//! ASCII artwork: the character grid produced by sampling.

use std::fmt;

/// Rows of palette glyphs. Regenerated, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct AsciiArtwork {
    rows: Vec<String>,
}

/// Rows and columns removed by [`AsciiArtwork::trim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimBounds {
    /// Index of the first kept row in the untrimmed artwork.
    pub top: usize,
    /// Index of the first kept column in the untrimmed artwork.
    pub left: usize,
    /// Number of kept rows.
    pub rows: usize,
    /// Number of kept columns.
    pub columns: usize,
}

impl AsciiArtwork {
    pub fn from_rows(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Parse a newline-separated block. A single trailing newline does not
    /// produce an extra empty row.
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_suffix('\n').unwrap_or(text);
        if text.is_empty() {
            return Self::default();
        }
        Self {
            rows: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row, in characters.
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    /// The longest row, first one wins on ties.
    pub fn longest_row(&self) -> &str {
        let mut longest = "";
        let mut longest_len = 0;
        for row in &self.rows {
            let len = row.chars().count();
            if len > longest_len {
                longest = row;
                longest_len = len;
            }
        }
        longest
    }

    /// True when no row holds a visible glyph.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| is_blank_row(r))
    }

    /// Rows joined by newlines, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }

    /// Strip blank leading/trailing rows, then blank leading/trailing columns.
    ///
    /// Columns are bounded by the leftmost and rightmost visible glyph found in
    /// any kept row, so content anchors to the top-left with no invisible
    /// padding. Trimming trimmed artwork is a no-op.
    pub fn trim(&self) -> (AsciiArtwork, TrimBounds) {
        let Some(top) = self.rows.iter().position(|r| !is_blank_row(r)) else {
            return (AsciiArtwork::default(), TrimBounds::default());
        };
        // A visible row exists, so rposition finds one at or after `top`.
        let bottom = self
            .rows
            .iter()
            .rposition(|r| !is_blank_row(r))
            .unwrap_or(top);

        let kept = &self.rows[top..=bottom];

        let mut left = usize::MAX;
        let mut right = 0usize;
        for row in kept {
            let chars: Vec<char> = row.chars().collect();
            if let Some(first) = chars.iter().position(|c| !c.is_whitespace()) {
                left = left.min(first);
            }
            if let Some(last) = chars.iter().rposition(|c| !c.is_whitespace()) {
                right = right.max(last);
            }
        }

        let rows: Vec<String> = kept
            .iter()
            .map(|row| row.chars().skip(left).take(right + 1 - left).collect())
            .collect();

        let bounds = TrimBounds {
            top,
            left,
            rows: rows.len(),
            columns: right + 1 - left,
        };

        (AsciiArtwork { rows }, bounds)
    }
}

impl fmt::Display for AsciiArtwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn is_blank_row(row: &str) -> bool {
    row.chars().all(char::is_whitespace)
}
