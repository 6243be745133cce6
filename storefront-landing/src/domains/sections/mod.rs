//! Landing-page sections.
//!
//! Each section type owns its own state; carousel-backed sections own a
//! [`CarouselController`](crate::domains::carousel::CarouselController).
//! [`SectionState`] is the closed set the page iterates over.

pub mod faq;
pub mod hero;
pub mod loader;
pub mod products;
pub mod subscribe;
pub mod testimonials;

use storefront_model::{SectionId, SectionType};

use crate::domains::carousel::{
    AutoplayTick, CarouselKey, CarouselMessage, TickSender,
};

pub use faq::FaqSection;
pub use hero::HeroSection;
pub use products::{ProductLayout, ProductsSection};
pub use subscribe::{StatusMessage, SubmitStart, SubscribeError, SubscribeForm};
pub use testimonials::TestimonialsSection;

/// What a section needs from the page when it mounts.
#[derive(Debug, Clone)]
pub struct MountContext {
    pub viewport_width: Option<u32>,
    /// Autoplay tick sink; `None` disables autoplay entirely.
    pub ticks: Option<TickSender>,
    pub default_autoplay_delay_ms: u64,
}

#[derive(Debug)]
pub enum SectionState {
    Hero(HeroSection),
    Products(ProductsSection),
    Faq(FaqSection),
    Testimonials(TestimonialsSection),
    Subscribe(SubscribeForm),
}

impl SectionState {
    pub fn id(&self) -> &SectionId {
        match self {
            SectionState::Hero(s) => &s.id,
            SectionState::Products(s) => &s.id,
            SectionState::Faq(s) => &s.id,
            SectionState::Testimonials(s) => &s.id,
            SectionState::Subscribe(s) => &s.id,
        }
    }

    pub fn section_type(&self) -> SectionType {
        match self {
            SectionState::Hero(_) => SectionType::Hero,
            SectionState::Products(_) => SectionType::Products,
            SectionState::Faq(_) => SectionType::Faq,
            SectionState::Testimonials(_) => SectionType::Testimonials,
            SectionState::Subscribe(_) => SectionType::Subscribe,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            SectionState::Hero(s) => s.title.as_deref(),
            SectionState::Products(s) => s.title.as_deref(),
            SectionState::Faq(s) => s.title.as_deref(),
            SectionState::Testimonials(s) => s.title.as_deref(),
            SectionState::Subscribe(s) => s.title.as_deref(),
        }
    }

    pub fn on_resize(&mut self, width: Option<u32>) {
        match self {
            SectionState::Hero(s) => s.carousel.on_resize(width),
            SectionState::Products(s) => s.on_resize(width),
            SectionState::Testimonials(s) => s.carousel.on_resize(width),
            SectionState::Faq(_) | SectionState::Subscribe(_) => {}
        }
    }

    pub fn on_autoplay_tick(&mut self, tick: &AutoplayTick) -> bool {
        match self {
            SectionState::Hero(s) => s.carousel.on_autoplay_tick(tick),
            SectionState::Products(s) => s
                .carousel_mut()
                .is_some_and(|c| c.on_autoplay_tick(tick)),
            SectionState::Testimonials(s) => {
                s.carousel.on_autoplay_tick(tick)
            }
            SectionState::Faq(_) | SectionState::Subscribe(_) => false,
        }
    }

    /// Route a navigation message to this section's carousel when `key`
    /// names it.
    pub fn update_carousel(
        &mut self,
        key: &CarouselKey,
        message: CarouselMessage,
    ) -> bool {
        match (self, key) {
            (SectionState::Hero(s), CarouselKey::Hero(id)) if *id == s.id => {
                s.carousel.update(message)
            }
            (SectionState::Products(s), CarouselKey::Products(id))
                if *id == s.id =>
            {
                s.carousel_mut().is_some_and(|c| c.update(message))
            }
            (SectionState::Testimonials(s), CarouselKey::Testimonials(id))
                if *id == s.id =>
            {
                s.carousel.update(message)
            }
            _ => false,
        }
    }

    pub fn unmount(&mut self) {
        match self {
            SectionState::Hero(s) => s.carousel.unmount(),
            SectionState::Products(s) => {
                if let Some(c) = s.carousel_mut() {
                    c.unmount();
                }
            }
            SectionState::Testimonials(s) => s.carousel.unmount(),
            SectionState::Faq(_) | SectionState::Subscribe(_) => {}
        }
    }
}
