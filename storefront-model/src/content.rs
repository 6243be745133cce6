//! Content blocks carried inline in section configuration.

use serde::{Deserialize, Serialize};

/// One slide of the hero carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
}

/// Customer quote shown in the testimonials slider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub role: Option<String>,
    pub quote: String,
    /// Star rating, 1-5.
    pub rating: Option<u8>,
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Rating clamped into the displayable 0..=5 range.
    pub fn stars(&self) -> u8 {
        self.rating.unwrap_or(0).min(5)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
