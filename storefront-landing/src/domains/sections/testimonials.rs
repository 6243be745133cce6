use log::warn;
use storefront_model::{Section, SectionId, Testimonial, TestimonialsConfig};

use super::MountContext;
use crate::domains::carousel::{CarouselConfig, CarouselController, CarouselKey};

#[derive(Debug)]
pub struct TestimonialsSection {
    pub id: SectionId,
    pub title: Option<String>,
    pub carousel: CarouselController<Testimonial>,
}

impl TestimonialsSection {
    pub fn mount(section: &Section, ctx: &MountContext) -> Self {
        let config: TestimonialsConfig =
            section.config_as().unwrap_or_else(|err| {
                warn!("[LandingPage] Section {}: {}", section.id, err);
                TestimonialsConfig::default()
            });
        let items: Vec<Testimonial> = config
            .items
            .into_iter()
            .filter(|t| !t.quote.trim().is_empty())
            .collect();
        let carousel = CarouselController::mount(
            CarouselKey::Testimonials(section.id.clone()),
            CarouselConfig::testimonial_defaults()
                .with_settings(&config.carousel, ctx.default_autoplay_delay_ms),
            items,
            ctx.viewport_width,
            ctx.ticks.clone(),
        );
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            carousel,
        }
    }
}
