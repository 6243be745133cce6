//! Server-side markup for a [`PageView`].

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::{
    CarouselView, FaqItemView, PageView, ProductCard, SectionBody, SectionView,
    SubscribeView,
};
use crate::infra::constants::layout::{
    NO_PRODUCTS_MESSAGE, NO_TESTIMONIALS_MESSAGE, TRACK_TRANSITION,
};
use storefront_model::{HeroSlide, Testimonial};

const PAGE_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
.section { padding: 2rem 1rem; }
.carousel { position: relative; overflow: hidden; }
.carousel-track { display: flex; flex-wrap: nowrap; }
.carousel-slide { flex: 0 0 auto; box-sizing: border-box; }
.carousel-dots { display: flex; justify-content: center; gap: .5rem; }
.carousel-dot.active { font-weight: bold; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr)); gap: 1rem; }
.price-old { text-decoration: line-through; opacity: .6; }
.faq-answer[hidden] { display: none; }
.status-error { color: #b00020; }
.status-success { color: #1b5e20; }
"#;

pub fn render_page(view: &PageView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Storefront" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main class="landing" {
                    @for section in &view.sections {
                        (render_section(section))
                    }
                }
            }
        }
    }
}

pub fn render_section(section: &SectionView) -> Markup {
    html! {
        section class="section" id=(format!("section-{}", section.id)) {
            @if let Some(title) = &section.title {
                h2 class="section-title" { (title) }
            }
            @match &section.body {
                SectionBody::Hero { slides, carousel } => {
                    @if let Some(carousel) = carousel {
                        (render_carousel(carousel, slides.iter().map(hero_slide)))
                    }
                },
                SectionBody::ProductGrid { products } => {
                    @if products.is_empty() {
                        p class="empty" { (NO_PRODUCTS_MESSAGE) }
                    } @else {
                        div class="product-grid" {
                            @for product in products {
                                (product_card(product))
                            }
                        }
                    }
                },
                SectionBody::ProductSlider { products, carousel } => {
                    @if let Some(carousel) = carousel {
                        (render_carousel(carousel, products.iter().map(product_card)))
                    } @else {
                        p class="empty" { (NO_PRODUCTS_MESSAGE) }
                    }
                },
                SectionBody::Faq { items } => {
                    div class="faq" {
                        @for item in items {
                            (faq_item(item))
                        }
                    }
                },
                SectionBody::Testimonials { items, carousel } => {
                    @if let Some(carousel) = carousel {
                        (render_carousel(carousel, items.iter().map(testimonial)))
                    } @else {
                        p class="empty" { (NO_TESTIMONIALS_MESSAGE) }
                    }
                },
                SectionBody::Subscribe(form) => {
                    (subscribe_form(form))
                },
            }
        }
    }
}

/// Every slide stays in the track; only the translation changes.
fn render_carousel(
    carousel: &CarouselView,
    slides: impl Iterator<Item = Markup>,
) -> Markup {
    let track_style = format!(
        "transform: translateX(-{}%); transition: {};",
        carousel.offset_percent, TRACK_TRANSITION
    );
    let slide_style = format!("width: {}%;", carousel.slide_width_percent);
    html! {
        div class="carousel" data-carousel=(carousel.key) {
            div class="carousel-track" style=(track_style) {
                @for slide in slides {
                    div class="carousel-slide" style=(slide_style) { (slide) }
                }
            }
            @if let Some(controls) = carousel.controls {
                button type="button" class="carousel-prev" aria-label="Previous"
                    disabled[!controls.prev_enabled] { "‹" }
                button type="button" class="carousel-next" aria-label="Next"
                    disabled[!controls.next_enabled] { "›" }
            }
            @if !carousel.dots.is_empty() {
                div class="carousel-dots" {
                    @for dot in &carousel.dots {
                        button type="button"
                            class=(if dot.active { "carousel-dot active" } else { "carousel-dot" })
                            data-index=(dot.index)
                            aria-label=(format!("Go to slide {}", dot.index + 1)) {}
                    }
                }
            }
        }
    }
}

fn hero_slide(slide: &HeroSlide) -> Markup {
    html! {
        div class="hero-slide" {
            @if let Some(image) = &slide.image {
                img class="hero-image" src=(image) alt=(slide.title);
            }
            h1 { (slide.title) }
            @if let Some(subtitle) = &slide.subtitle {
                p class="hero-subtitle" { (subtitle) }
            }
            @if let (Some(label), Some(href)) = (&slide.cta_label, &slide.cta_href) {
                a class="hero-cta" href=(href) { (label) }
            }
        }
    }
}

fn product_card(product: &ProductCard) -> Markup {
    html! {
        article class="product-card" data-product=(product.id.as_str()) {
            @if let Some(image) = &product.image {
                img src=(image) alt=(product.title) loading="lazy";
            }
            @if let Some(category) = &product.category {
                span class="product-category" { (category) }
            }
            h3 class="product-title" { (product.title) }
            div class="product-price" {
                span class="price" { (product.price) }
                @if let Some(old) = &product.strike_price {
                    " "
                    span class="price-old" { (old) }
                }
                @if let Some(discount) = product.discount_percent {
                    " "
                    span class="discount" { "-" (discount) "%" }
                }
            }
        }
    }
}

fn faq_item(item: &FaqItemView) -> Markup {
    html! {
        div class=(if item.open { "faq-item open" } else { "faq-item" }) {
            button type="button" class="faq-question" data-index=(item.index)
                aria-expanded=(if item.open { "true" } else { "false" }) { (item.question) }
            div class="faq-answer" hidden[!item.open] { (item.answer) }
        }
    }
}

fn testimonial(t: &Testimonial) -> Markup {
    let stars = usize::from(t.stars());
    html! {
        figure class="testimonial" {
            @if stars > 0 {
                div class="rating" aria-label=(format!("{stars} out of 5")) {
                    ("★".repeat(stars))
                }
            }
            blockquote { (t.quote) }
            figcaption {
                strong { (t.name) }
                @if let Some(role) = &t.role {
                    ", " (role)
                }
            }
        }
    }
}

fn subscribe_form(form: &SubscribeView) -> Markup {
    html! {
        div class="subscribe" {
            @if let Some(heading) = &form.heading {
                h3 { (heading) }
            }
            @if let Some(description) = &form.description {
                p { (description) }
            }
            form class="subscribe-form" {
                input type="email" name="email" value=(form.email)
                    placeholder=(form.placeholder) disabled[form.submitting];
                button type="submit" disabled[form.submitting] { (form.button_label) }
            }
            @if let Some(status) = &form.status {
                p class=(format!("status status-{}", status.kind.as_str())) { (status.text) }
            }
        }
    }
}
