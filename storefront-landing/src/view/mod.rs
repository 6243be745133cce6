//! View models: plain snapshots of page state, ready to render.
//!
//! Nothing here mutates state. [`html`] turns a [`PageView`] into markup.

pub mod html;

use storefront_model::prelude::*;

use crate::domains::carousel::{CarouselController, WrapMode};
use crate::domains::sections::{
    FaqSection, ProductLayout, ProductsSection, SectionState, StatusMessage,
    SubscribeForm,
};
use crate::infra::constants::layout::CURRENCY_SYMBOL;

pub use html::render_page;

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub sections: Vec<SectionView>,
}

impl PageView {
    pub fn from_sections(sections: &[SectionState]) -> Self {
        Self {
            sections: sections.iter().map(SectionView::from_state).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub id: SectionId,
    pub title: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Hero {
        slides: Vec<HeroSlide>,
        carousel: Option<CarouselView>,
    },
    ProductGrid {
        products: Vec<ProductCard>,
    },
    ProductSlider {
        products: Vec<ProductCard>,
        carousel: Option<CarouselView>,
    },
    Faq {
        items: Vec<FaqItemView>,
    },
    Testimonials {
        items: Vec<Testimonial>,
        carousel: Option<CarouselView>,
    },
    Subscribe(SubscribeView),
}

impl SectionView {
    fn from_state(state: &SectionState) -> Self {
        let body = match state {
            SectionState::Hero(hero) => SectionBody::Hero {
                slides: hero.carousel.state().items().to_vec(),
                carousel: CarouselView::from_controller(&hero.carousel),
            },
            SectionState::Products(products) => products_body(products),
            SectionState::Faq(faq) => faq_body(faq),
            SectionState::Testimonials(t) => SectionBody::Testimonials {
                items: t.carousel.state().items().to_vec(),
                carousel: CarouselView::from_controller(&t.carousel),
            },
            SectionState::Subscribe(form) => {
                SectionBody::Subscribe(SubscribeView::from_form(form))
            }
        };
        Self {
            id: state.id().clone(),
            title: state.title().map(str::to_string),
            body,
        }
    }
}

fn products_body(section: &ProductsSection) -> SectionBody {
    let products = section.products().iter().map(ProductCard::from).collect();
    match &section.layout {
        ProductLayout::Grid(_) => SectionBody::ProductGrid { products },
        ProductLayout::Slider(carousel) => SectionBody::ProductSlider {
            products,
            carousel: CarouselView::from_controller(carousel),
        },
    }
}

fn faq_body(faq: &FaqSection) -> SectionBody {
    SectionBody::Faq {
        items: faq
            .items()
            .iter()
            .enumerate()
            .map(|(index, entry)| FaqItemView {
                index,
                question: entry.question.clone(),
                answer: entry.answer.clone(),
                open: faq.is_open(index),
            })
            .collect(),
    }
}

/// Geometry and controls of one carousel track.
///
/// The track holds every item in a single row and is translated by
/// `-offset_percent`; items are never removed from the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub key: String,
    pub current_index: usize,
    pub visible_count: usize,
    pub offset_percent: f32,
    pub slide_width_percent: f32,
    /// `None` when arrows are hidden or there is a single window.
    pub controls: Option<CarouselControls>,
    /// One per window start; empty when pagination is hidden or there is a
    /// single window.
    pub dots: Vec<DotView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotView {
    pub index: usize,
    pub active: bool,
}

impl CarouselView {
    /// `None` for an empty carousel, which renders nothing at all.
    pub fn from_controller<T>(controller: &CarouselController<T>) -> Option<Self> {
        let state = controller.state();
        if state.is_empty() {
            return None;
        }
        let config = controller.config();
        let wraps = config.wrap_mode == WrapMode::Infinite;
        let controls = (config.show_navigation && state.can_navigate()).then(|| {
            CarouselControls {
                prev_enabled: wraps || !state.at_start(),
                next_enabled: wraps || !state.at_end(),
            }
        });
        let dots = if config.show_pagination {
            (0..state.dot_count())
                .map(|index| DotView {
                    index,
                    active: index == state.current_index(),
                })
                .collect()
        } else {
            Vec::new()
        };
        Some(Self {
            key: controller.key().to_string(),
            current_index: state.current_index(),
            visible_count: state.visible_count(),
            offset_percent: state.offset_percent(),
            slide_width_percent: state.slide_width_percent(),
            controls,
            dots,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub strike_price: Option<String>,
    pub discount_percent: Option<u8>,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: format_price(product.price),
            strike_price: product.strike_price().map(format_price),
            discount_percent: product.discount_percent(),
            image: product.display_image().map(str::to_string),
            category: product.category.clone(),
        }
    }
}

fn format_price(price: Price) -> String {
    format!("{CURRENCY_SYMBOL}{price}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItemView {
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeView {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub email: String,
    pub placeholder: String,
    pub button_label: String,
    pub submitting: bool,
    pub status: Option<StatusMessage>,
}

impl SubscribeView {
    fn from_form(form: &SubscribeForm) -> Self {
        Self {
            heading: form.config().heading.clone(),
            description: form.config().description.clone(),
            email: form.email().to_string(),
            placeholder: form.placeholder().to_string(),
            button_label: form.button_label().to_string(),
            submitting: form.is_submitting(),
            status: form.status().cloned(),
        }
    }
}
