use log::warn;
use storefront_model::{HeroConfig, HeroSlide, Section, SectionId};

use super::MountContext;
use crate::domains::carousel::{CarouselConfig, CarouselController, CarouselKey};

/// Full-width rotating banner. Wraps on manual and automatic navigation.
#[derive(Debug)]
pub struct HeroSection {
    pub id: SectionId,
    pub title: Option<String>,
    pub carousel: CarouselController<HeroSlide>,
}

impl HeroSection {
    pub fn mount(section: &Section, ctx: &MountContext) -> Self {
        let config: HeroConfig = section.config_as().unwrap_or_else(|err| {
            warn!("[LandingPage] Section {}: {}", section.id, err);
            HeroConfig::default()
        });
        let carousel_config = CarouselConfig::hero_defaults()
            .with_settings(&config.carousel, ctx.default_autoplay_delay_ms);
        let carousel = CarouselController::mount(
            CarouselKey::Hero(section.id.clone()),
            carousel_config,
            config.slides,
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
