use serde::Serialize;

/// A half-open range `[start, end)` of token indices.
///
/// Positions count tokens, not bytes or characters. `start <= end` always
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TokenSpan {
    start: usize,
    end: usize,
}

impl TokenSpan {
    /// An `end` before `start` yields the empty span at `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Span of `len` tokens beginning at `start`.
    pub fn at(start: usize, len: usize) -> Self {
        Self::new(start, start.saturating_add(len))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a token index falls within this span
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Check if two spans share at least one token index.
    pub fn overlaps(&self, other: &TokenSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
