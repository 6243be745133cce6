//! Carousel constants
//!
//! Shared defaults for every carousel on the landing page. Tuning should
//! happen here so hero, product and testimonial sliders stay consistent.

/// Breakpoint table inputs.
pub mod breakpoints {
    /// Widths at or below this (px) use the mobile slide count.
    pub const MOBILE_MAX_WIDTH: u32 = 768;
    /// Slide count above the mobile breakpoint, and whenever the viewport
    /// width is unknown.
    pub const DESKTOP_VISIBLE: usize = 4;
    /// Product slider slide count on mobile.
    pub const PRODUCTS_MOBILE_VISIBLE: usize = 2;
    /// Testimonial slider slide count on mobile.
    pub const TESTIMONIALS_MOBILE_VISIBLE: usize = 1;
    /// The hero always shows a single slide.
    pub const HERO_VISIBLE: usize = 1;
}

/// Autoplay defaults.
pub mod autoplay {
    /// Delay between automatic advances (ms).
    pub const DEFAULT_INTERVAL_MS: u64 = 5000;
    /// Shortest delay honored from section config (ms). Smaller values are
    /// raised to this floor.
    pub const MIN_INTERVAL_MS: u64 = 250;
    /// Hero autoplay is on unless the section disables it.
    pub const HERO_ENABLED_BY_DEFAULT: bool = true;
    /// Product and testimonial sliders only autoplay when asked to.
    pub const SLIDER_ENABLED_BY_DEFAULT: bool = false;
}
