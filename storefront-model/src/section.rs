//! Landing-page sections and their per-type configuration.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::content::{FaqEntry, HeroSlide, Testimonial};
use crate::de::loose_bool;
use crate::error::{ModelError, Result};
use crate::ids::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    #[serde(alias = "hero_slider", alias = "banner")]
    Hero,
    #[serde(alias = "product_grid")]
    Products,
    #[serde(alias = "faqs")]
    Faq,
    Testimonials,
    #[serde(alias = "newsletter", alias = "footer")]
    Subscribe,
    /// Section types this build does not know how to render.
    #[serde(other)]
    Unknown,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Products => "products",
            SectionType::Faq => "faq",
            SectionType::Testimonials => "testimonials",
            SectionType::Subscribe => "subscribe",
            SectionType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_active() -> bool {
    true
}

/// A server-configured block of the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub section_type: SectionType,
    #[serde(default = "default_active", deserialize_with = "loose_bool")]
    pub is_active: bool,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub title: Option<String>,
}

impl Section {
    /// Decode `config` into a typed per-section configuration.
    ///
    /// A missing or `null` config yields `T::default()`. Some admin tools
    /// store the config as a JSON-encoded string; that form is accepted too.
    pub fn config_as<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let invalid = |err: serde_json::Error| ModelError::InvalidConfig {
            section_type: self.section_type.to_string(),
            reason: err.to_string(),
        };
        match &self.config {
            serde_json::Value::Null => Ok(T::default()),
            serde_json::Value::String(raw) if raw.trim().is_empty() => {
                Ok(T::default())
            }
            serde_json::Value::String(raw) => {
                serde_json::from_str(raw).map_err(invalid)
            }
            value => T::deserialize(value).map_err(invalid),
        }
    }
}

/// Slide count override per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidesToShow {
    pub mobile: Option<usize>,
    pub desktop: Option<usize>,
}

/// Carousel-related keys shared by hero, product and testimonial sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselSettings {
    pub autoplay: Option<bool>,
    /// Milliseconds between autoplay advances.
    pub autoplay_delay: Option<u64>,
    pub show_navigation: bool,
    pub show_pagination: bool,
    pub slides_to_show: Option<SlidesToShow>,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay: None,
            autoplay_delay: None,
            show_navigation: true,
            show_pagination: true,
            slides_to_show: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    #[default]
    Grid,
    Slider,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    #[serde(flatten)]
    pub carousel: CarouselSettings,
    pub slides: Vec<HeroSlide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductsConfig {
    #[serde(flatten)]
    pub carousel: CarouselSettings,
    pub display_style: DisplayStyle,
    /// Name of the backend collection to list.
    pub collection: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsConfig {
    #[serde(flatten)]
    pub carousel: CarouselSettings,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscribeConfig {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub placeholder: Option<String>,
    pub button_label: Option<String>,
}
