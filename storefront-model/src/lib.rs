//! Core data model definitions shared across storefront crates.
#![allow(missing_docs)]

pub mod content;
pub mod de;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod price;
pub mod prelude;
pub mod product;
pub mod routes;
pub mod section;
pub mod subscribe;

// Intentionally curated re-exports for downstream consumers.
pub use content::{FaqEntry, HeroSlide, Testimonial};
pub use envelope::ApiEnvelope;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ProductId, SectionId};
pub use price::Price;
pub use product::Product;
pub use section::{
    CarouselSettings, DisplayStyle, FaqConfig, HeroConfig, ProductsConfig,
    Section, SectionType, SlidesToShow, SubscribeConfig, TestimonialsConfig,
};
pub use subscribe::{ErrorBody, SubscribeRequest, SubscribeResponse};
