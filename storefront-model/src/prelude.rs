//! View-layer snapshot of the model surface.
//! Prefer importing from this module when working in presentation code.

pub use super::content::{FaqEntry, HeroSlide, Testimonial};
pub use super::ids::{ProductId, SectionId};
pub use super::price::Price;
pub use super::product::Product;
pub use super::section::{
    CarouselSettings, DisplayStyle, FaqConfig, HeroConfig, ProductsConfig,
    Section, SectionType, SlidesToShow, SubscribeConfig, TestimonialsConfig,
};
pub use super::subscribe::{SubscribeRequest, SubscribeResponse};
