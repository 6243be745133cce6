use log::warn;
use storefront_model::{
    DisplayStyle, Product, ProductsConfig, Section, SectionId,
};

use super::MountContext;
use super::loader;
use crate::domains::carousel::{CarouselConfig, CarouselController, CarouselKey};
use crate::infra::services::StorefrontApi;

/// Products laid out either as a static grid or as a slider.
#[derive(Debug)]
pub enum ProductLayout {
    Grid(Vec<Product>),
    Slider(CarouselController<Product>),
}

#[derive(Debug)]
pub struct ProductsSection {
    pub id: SectionId,
    pub title: Option<String>,
    pub config: ProductsConfig,
    pub layout: ProductLayout,
}

impl ProductsSection {
    pub fn decode_config(section: &Section) -> ProductsConfig {
        section.config_as().unwrap_or_else(|err| {
            warn!("[LandingPage] Section {}: {}", section.id, err);
            ProductsConfig::default()
        })
    }

    /// Fetch the configured collection, then mount.
    pub async fn load(
        section: &Section,
        api: &dyn StorefrontApi,
        ctx: &MountContext,
    ) -> Self {
        let config = Self::decode_config(section);
        let products = loader::load_collection(
            api,
            config.collection.as_deref(),
            config.limit,
        )
        .await;
        Self::mount(section, config, products, ctx)
    }

    pub fn mount(
        section: &Section,
        config: ProductsConfig,
        products: Vec<Product>,
        ctx: &MountContext,
    ) -> Self {
        let layout = match config.display_style {
            DisplayStyle::Grid => ProductLayout::Grid(products),
            DisplayStyle::Slider => {
                ProductLayout::Slider(CarouselController::mount(
                    CarouselKey::Products(section.id.clone()),
                    CarouselConfig::product_defaults().with_settings(
                        &config.carousel,
                        ctx.default_autoplay_delay_ms,
                    ),
                    products,
                    ctx.viewport_width,
                    ctx.ticks.clone(),
                ))
            }
        };
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            config,
            layout,
        }
    }

    pub fn products(&self) -> &[Product] {
        match &self.layout {
            ProductLayout::Grid(products) => products,
            ProductLayout::Slider(carousel) => carousel.state().items(),
        }
    }

    pub fn carousel(&self) -> Option<&CarouselController<Product>> {
        match &self.layout {
            ProductLayout::Slider(carousel) => Some(carousel),
            ProductLayout::Grid(_) => None,
        }
    }

    pub fn carousel_mut(&mut self) -> Option<&mut CarouselController<Product>> {
        match &mut self.layout {
            ProductLayout::Slider(carousel) => Some(carousel),
            ProductLayout::Grid(_) => None,
        }
    }

    /// Swap in a freshly fetched collection; sliders restart at the first
    /// window.
    pub fn replace_products(&mut self, mut products: Vec<Product>) {
        if let Some(limit) = self.config.limit {
            products.truncate(limit);
        }
        match &mut self.layout {
            ProductLayout::Grid(current) => *current = products,
            ProductLayout::Slider(carousel) => carousel.on_data_changed(products),
        }
    }

    pub fn on_resize(&mut self, width: Option<u32>) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.on_resize(width);
        }
    }
}
