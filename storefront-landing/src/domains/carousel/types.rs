//! Shared types for the carousel module

use std::time::Duration;

use storefront_model::{CarouselSettings, SectionId};

use super::breakpoints::Breakpoints;
use crate::infra::constants::carousel::{autoplay, breakpoints};

/// Identifies a carousel on the page. Carrying the owning section's id keeps
/// autoplay ticks and user commands scoped to one section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Hero(SectionId),
    Products(SectionId),
    Testimonials(SectionId),
}

impl CarouselKey {
    pub fn section_id(&self) -> &SectionId {
        match self {
            CarouselKey::Hero(id)
            | CarouselKey::Products(id)
            | CarouselKey::Testimonials(id) => id,
        }
    }
}

impl std::fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselKey::Hero(id) => write!(f, "hero:{id}"),
            CarouselKey::Products(id) => write!(f, "products:{id}"),
            CarouselKey::Testimonials(id) => write!(f, "testimonials:{id}"),
        }
    }
}

/// Boundary behavior of manual prev/next. Autoplay always wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Manual navigation saturates at either end.
    Finite,
    /// Manual navigation wraps around at either end.
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub enabled: bool,
    pub interval: Duration,
}

impl AutoplayConfig {
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            interval: Duration::from_millis(autoplay::DEFAULT_INTERVAL_MS),
        }
    }

    pub fn every(interval_ms: u64) -> Self {
        Self {
            enabled: true,
            interval: Duration::from_millis(
                interval_ms.max(autoplay::MIN_INTERVAL_MS),
            ),
        }
    }
}

/// Static configuration for one carousel instance, derived from a preset
/// and then overridden by the section's config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    pub wrap_mode: WrapMode,
    pub autoplay: AutoplayConfig,
    pub show_navigation: bool,
    pub show_pagination: bool,
}

impl CarouselConfig {
    /// Single full-width slide that wraps on manual and automatic navigation.
    pub fn hero_defaults() -> Self {
        Self {
            breakpoints: Breakpoints::fixed(breakpoints::HERO_VISIBLE),
            wrap_mode: WrapMode::Infinite,
            autoplay: AutoplayConfig {
                enabled: autoplay::HERO_ENABLED_BY_DEFAULT,
                ..AutoplayConfig::every(autoplay::DEFAULT_INTERVAL_MS)
            },
            show_navigation: true,
            show_pagination: true,
        }
    }

    pub fn product_defaults() -> Self {
        Self {
            breakpoints: Breakpoints::mobile_desktop(
                breakpoints::PRODUCTS_MOBILE_VISIBLE,
                breakpoints::DESKTOP_VISIBLE,
            ),
            wrap_mode: WrapMode::Finite,
            autoplay: AutoplayConfig {
                enabled: autoplay::SLIDER_ENABLED_BY_DEFAULT,
                ..AutoplayConfig::every(autoplay::DEFAULT_INTERVAL_MS)
            },
            show_navigation: true,
            show_pagination: true,
        }
    }

    pub fn testimonial_defaults() -> Self {
        Self {
            breakpoints: Breakpoints::mobile_desktop(
                breakpoints::TESTIMONIALS_MOBILE_VISIBLE,
                breakpoints::DESKTOP_VISIBLE,
            ),
            ..Self::product_defaults()
        }
    }

    /// Apply a section's carousel keys on top of a preset.
    ///
    /// `default_delay_ms` is used when the section enables autoplay without
    /// naming a delay.
    pub fn with_settings(
        mut self,
        settings: &CarouselSettings,
        default_delay_ms: u64,
    ) -> Self {
        let enabled = settings.autoplay.unwrap_or(self.autoplay.enabled);
        let delay = settings.autoplay_delay.unwrap_or(default_delay_ms);
        self.autoplay = AutoplayConfig {
            enabled,
            ..AutoplayConfig::every(delay)
        };
        self.show_navigation = settings.show_navigation;
        self.show_pagination = settings.show_pagination;
        if let Some(slides) = settings.slides_to_show {
            self.breakpoints = self.breakpoints.with_overrides(slides);
        }
        self
    }
}
