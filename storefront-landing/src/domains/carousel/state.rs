//! CarouselState: the visible window over an item list

use std::ops::Range;

/// Window of `visible_count` items starting at `current_index`.
///
/// `current_index` always stays within `0..=max_index()`. Replacing the items
/// or changing the visible count resets it to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<T> {
    items: Vec<T>,
    visible_count: usize,
    current_index: usize,
}

impl<T> CarouselState<T> {
    pub fn new(items: Vec<T>, visible_count: usize) -> Self {
        Self {
            items,
            visible_count: visible_count.max(1),
            current_index: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Last valid window start.
    pub fn max_index(&self) -> usize {
        self.items.len().saturating_sub(self.visible_count)
    }

    /// Whether there is more than one window to show.
    pub fn can_navigate(&self) -> bool {
        self.items.len() > self.visible_count
    }

    pub fn at_start(&self) -> bool {
        self.current_index == 0
    }

    pub fn at_end(&self) -> bool {
        self.current_index >= self.max_index()
    }

    /// Step one item forward. At the last window, `wrap` returns to 0;
    /// otherwise the index stays put. Returns whether the index moved.
    pub fn advance(&mut self, wrap: bool) -> bool {
        let before = self.current_index;
        if self.current_index < self.max_index() {
            self.current_index += 1;
        } else if wrap {
            self.current_index = 0;
        }
        before != self.current_index
    }

    /// Step one item back. At 0, `wrap` jumps to the last window; otherwise
    /// the index stays at 0. Returns whether the index moved.
    pub fn retreat(&mut self, wrap: bool) -> bool {
        let before = self.current_index;
        if self.current_index > 0 {
            self.current_index -= 1;
        } else if wrap {
            self.current_index = self.max_index();
        }
        before != self.current_index
    }

    /// Jump to a window start. Dots only emit valid indices; anything past
    /// the last window is clamped.
    pub fn go_to(&mut self, index: usize) -> bool {
        let before = self.current_index;
        self.current_index = index.min(self.max_index());
        before != self.current_index
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_index = 0;
    }

    /// Returns whether the count actually changed (and the index was reset).
    pub fn set_visible_count(&mut self, count: usize) -> bool {
        let count = count.max(1);
        if count == self.visible_count {
            return false;
        }
        self.visible_count = count;
        self.current_index = 0;
        true
    }

    /// Horizontal track offset in percent of the viewport:
    /// `current_index * (100 / visible_count)`.
    pub fn offset_percent(&self) -> f32 {
        if !self.can_navigate() {
            return 0.0;
        }
        self.current_index as f32 * (100.0 / self.visible_count as f32)
    }

    /// Width of one slide in percent of the viewport.
    pub fn slide_width_percent(&self) -> f32 {
        100.0 / self.visible_count as f32
    }

    /// One dot per valid window start, none when there is only one window.
    pub fn dot_count(&self) -> usize {
        if self.can_navigate() {
            self.max_index() + 1
        } else {
            0
        }
    }

    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_index.min(self.items.len());
        let end = (start + self.visible_count).min(self.items.len());
        start..end
    }

    pub fn visible_items(&self) -> &[T] {
        &self.items[self.visible_range()]
    }
}
