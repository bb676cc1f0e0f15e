//! Wrap-around index for the insights carousel.

/// Current position in a fixed-length list. Empty lists have no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Start at `index`, wrapped into range.
    pub fn at(len: usize, index: usize) -> Self {
        Self { len, index: if len == 0 { 0 } else { index % len } }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Prev/next arrows are only shown with more than one item.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.current()
    }
}
