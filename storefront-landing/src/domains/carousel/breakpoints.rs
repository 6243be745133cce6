//! Viewport width to visible-slide count.

use storefront_model::SlidesToShow;

use crate::infra::constants::carousel::breakpoints;

/// Two-tier breakpoint table: widths at or below `mobile_max_width` show
/// `mobile` slides, wider (or unknown) viewports show `desktop` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub mobile_max_width: u32,
    pub mobile: usize,
    pub desktop: usize,
}

impl Breakpoints {
    pub const fn mobile_desktop(mobile: usize, desktop: usize) -> Self {
        Self {
            mobile_max_width: breakpoints::MOBILE_MAX_WIDTH,
            mobile,
            desktop,
        }
    }

    /// Same count at every width.
    pub const fn fixed(count: usize) -> Self {
        Self::mobile_desktop(count, count)
    }

    pub fn with_overrides(self, slides: SlidesToShow) -> Self {
        Self {
            mobile: slides.mobile.unwrap_or(self.mobile),
            desktop: slides.desktop.unwrap_or(self.desktop),
            ..self
        }
    }

    /// Visible count for a viewport width. Never zero.
    pub fn visible_count(&self, width: Option<u32>) -> usize {
        let count = match width {
            Some(w) if w <= self.mobile_max_width => self.mobile,
            _ => self.desktop,
        };
        count.max(1)
    }
}
