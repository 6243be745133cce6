use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use storefront_landing::domains::carousel::{CarouselKey, CarouselMessage};
use storefront_landing::domains::sections::SectionState;
use storefront_landing::infra::api_client::{ApiError, ApiResult};
use storefront_landing::infra::services::{
    Notification, Notifier, StatusKind, StorefrontApi,
};
use storefront_landing::infra::ViewportSignal;
use storefront_landing::view::{SectionBody, render_page};
use storefront_landing::{LandingPage, PageCommand, PageOptions};
use storefront_model::{Product, Section, SectionId, SubscribeResponse};
use tokio::sync::{mpsc, oneshot};

#[derive(Default)]
struct FakeApi {
    sections: Option<Vec<Section>>,
    collections: Mutex<HashMap<String, Vec<Product>>>,
    subscribed: Mutex<Vec<String>>,
}

impl FakeApi {
    fn with_sections(sections: Value) -> Self {
        Self {
            sections: Some(serde_json::from_value(sections).unwrap()),
            ..Self::default()
        }
    }

    fn set_collection(&self, name: &str, count: usize) {
        self.collections
            .lock()
            .unwrap()
            .insert(name.to_string(), products(count));
    }
}

#[async_trait]
impl StorefrontApi for FakeApi {
    async fn fetch_sections(&self) -> ApiResult<Vec<Section>> {
        self.sections.clone().ok_or(ApiError::EmptyPayload)
    }

    async fn fetch_collection(&self, name: &str) -> ApiResult<Vec<Product>> {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or(ApiError::EmptyPayload)
    }

    async fn subscribe(&self, email: &str) -> ApiResult<SubscribeResponse> {
        let mut subscribed = self.subscribed.lock().unwrap();
        let already = subscribed.iter().any(|e| e == email);
        subscribed.push(email.to_string());
        Ok(SubscribeResponse {
            already_subscribed: already,
            message: None,
        })
    }
}

#[derive(Default)]
struct RecordingNotifier(Mutex<Vec<Notification>>);

impl RecordingNotifier {
    fn kinds(&self) -> Vec<StatusKind> {
        self.0.lock().unwrap().iter().map(|n| n.kind).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

fn products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            serde_json::from_value(json!({
                "id": i, "title": format!("Product {i}"), "price": 10 + i
            }))
            .unwrap()
        })
        .collect()
}

fn storefront_sections() -> Value {
    json!([
        { "id": 1, "section_type": "hero", "is_active": true,
          "config": { "slides": [
              { "title": "One" }, { "title": "Two" }, { "title": "Three" }
          ] } },
        { "id": 2, "section_type": "products", "is_active": true,
          "title": "New arrivals",
          "config": { "collection": "new", "displayStyle": "slider" } },
        { "id": 3, "section_type": "countdown", "is_active": true },
        { "id": 4, "section_type": "faq", "is_active": true,
          "config": { "items": [
              { "question": "Shipping?", "answer": "Free over $50" },
              { "question": "Returns?", "answer": "30 days" }
          ] } },
        { "id": 5, "section_type": "testimonials", "is_active": false },
        { "id": 6, "section_type": "subscribe", "is_active": true,
          "config": { "buttonLabel": "Join" } }
    ])
}

fn static_options() -> PageOptions {
    PageOptions {
        autoplay: false,
        ..PageOptions::default()
    }
}

async fn mount(
    api: Arc<FakeApi>,
    notifier: Arc<RecordingNotifier>,
    viewport: &ViewportSignal,
    options: PageOptions,
) -> LandingPage {
    LandingPage::mount(api, notifier, Some(viewport.subscribe()), options).await
}

fn slider_index(page: &LandingPage) -> (usize, usize) {
    match page.section(&SectionId::from("2")) {
        Some(SectionState::Products(p)) => {
            let carousel = p.carousel().unwrap();
            (
                carousel.state().current_index(),
                carousel.state().visible_count(),
            )
        }
        other => panic!("expected products section, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_section_fetch_renders_an_empty_page() {
    let api = Arc::new(FakeApi::default());
    let viewport = ViewportSignal::new(None);
    let page = mount(api, Arc::default(), &viewport, static_options()).await;

    assert!(page.sections().is_empty());
    let html = render_page(&page.view()).into_string();
    assert!(html.contains("<main class=\"landing\"></main>"));
}

#[tokio::test]
async fn keeps_active_known_sections_in_server_order() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    api.set_collection("new", 10);
    let viewport = ViewportSignal::new(Some(1280));
    let page = mount(api, Arc::default(), &viewport, static_options()).await;

    let ids: Vec<&str> =
        page.sections().iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4", "6"]);
    assert_eq!(slider_index(&page), (0, 4));
}

#[tokio::test]
async fn missing_collection_renders_the_fallback() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    let viewport = ViewportSignal::new(None);
    let page = mount(api, Arc::default(), &viewport, static_options()).await;

    let view = page.view();
    let products = view
        .sections
        .iter()
        .find(|s| s.id.as_str() == "2")
        .unwrap();
    assert!(matches!(
        products.body,
        SectionBody::ProductSlider { carousel: None, .. }
    ));
}

#[tokio::test]
async fn viewport_changes_reach_every_carousel() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    api.set_collection("new", 10);
    let viewport = ViewportSignal::new(Some(1280));
    let mut page = mount(api, Arc::default(), &viewport, static_options()).await;

    page.handle_command(PageCommand::Carousel {
        key: CarouselKey::Products(SectionId::from("2")),
        message: CarouselMessage::GoTo(3),
    });
    assert_eq!(slider_index(&page), (3, 4));

    viewport.resize(Some(600));
    page.process_next().await;

    assert_eq!(page.viewport_width(), Some(600));
    assert_eq!(slider_index(&page), (0, 2));
}

#[tokio::test]
async fn commands_only_touch_the_addressed_section() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    api.set_collection("new", 10);
    let viewport = ViewportSignal::new(None);
    let mut page = mount(api, Arc::default(), &viewport, static_options()).await;

    assert!(page.handle_command(PageCommand::Carousel {
        key: CarouselKey::Hero(SectionId::from("1")),
        message: CarouselMessage::Prev,
    }));
    assert_eq!(slider_index(&page), (0, 4));

    // Wrong kind of carousel for that id.
    assert!(!page.handle_command(PageCommand::Carousel {
        key: CarouselKey::Testimonials(SectionId::from("2")),
        message: CarouselMessage::Next,
    }));

    assert!(page.handle_command(PageCommand::ToggleFaq {
        section: SectionId::from("4"),
        index: 1,
    }));
    match page.section(&SectionId::from("4")) {
        Some(SectionState::Faq(faq)) => assert_eq!(faq.open_index(), Some(1)),
        other => panic!("expected faq, got {other:?}"),
    }
    match page.section(&SectionId::from("1")) {
        Some(SectionState::Hero(hero)) => {
            assert_eq!(hero.carousel.state().current_index(), 2)
        }
        other => panic!("expected hero, got {other:?}"),
    }
}

#[tokio::test]
async fn reloading_a_collection_resets_the_slider() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    api.set_collection("new", 10);
    let viewport = ViewportSignal::new(None);
    let mut page =
        mount(api.clone(), Arc::default(), &viewport, static_options()).await;

    page.handle_command(PageCommand::Carousel {
        key: CarouselKey::Products(SectionId::from("2")),
        message: CarouselMessage::GoTo(5),
    });
    api.set_collection("new", 12);
    page.handle_command(PageCommand::ReloadCollection {
        section: SectionId::from("2"),
    });
    // One step for the loaded event, one for the finished task.
    page.process_next().await;
    page.process_next().await;

    assert_eq!(slider_index(&page), (0, 4));
    match page.section(&SectionId::from("2")) {
        Some(SectionState::Products(p)) => assert_eq!(p.products().len(), 12),
        other => panic!("expected products section, got {other:?}"),
    }
}

#[tokio::test]
async fn subscribe_flow_reports_each_outcome() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    let notifier = Arc::new(RecordingNotifier::default());
    let viewport = ViewportSignal::new(None);
    let mut page =
        mount(api.clone(), notifier.clone(), &viewport, static_options()).await;
    let form = SectionId::from("6");

    page.handle_command(PageCommand::SetEmail {
        section: form.clone(),
        email: "not-an-email".into(),
    });
    page.handle_command(PageCommand::Subscribe {
        section: form.clone(),
    });
    assert_eq!(notifier.kinds(), vec![StatusKind::Error]);
    assert!(api.subscribed.lock().unwrap().is_empty());

    for expected in [StatusKind::Success, StatusKind::Info] {
        page.handle_command(PageCommand::SetEmail {
            section: form.clone(),
            email: "ada@example.com".into(),
        });
        page.handle_command(PageCommand::Subscribe {
            section: form.clone(),
        });
        page.process_next().await;
        page.process_next().await;
        assert_eq!(notifier.kinds().last(), Some(&expected));
    }

    match page.section(&form) {
        Some(SectionState::Subscribe(f)) => {
            assert_eq!(f.button_label(), "Join");
            assert_eq!(f.status().map(|s| s.kind), Some(StatusKind::Info));
            assert!(!f.is_submitting());
        }
        other => panic!("expected subscribe form, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn autoplay_advances_the_hero_through_the_loop() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    let viewport = ViewportSignal::new(None);
    let mut page =
        mount(api, Arc::default(), &viewport, PageOptions::default()).await;

    for expected in [1, 2, 0] {
        page.process_next().await;
        match page.section(&SectionId::from("1")) {
            Some(SectionState::Hero(hero)) => {
                assert_eq!(hero.carousel.state().current_index(), expected)
            }
            other => panic!("expected hero, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn run_releases_everything_on_shutdown() {
    let api = Arc::new(FakeApi::with_sections(storefront_sections()));
    let viewport = ViewportSignal::new(None);
    let mut page =
        mount(api, Arc::default(), &viewport, PageOptions::default()).await;
    assert_eq!(viewport.listener_count(), 1);

    let (commands_tx, commands_rx) = mpsc::channel::<PageCommand>(8);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    drop(commands_tx);

    let runner = tokio::spawn(async move {
        page.run(commands_rx, async {
            let _ = stop_rx.await;
        })
        .await;
        page
    });
    tokio::task::yield_now().await;
    stop_tx.send(()).unwrap();
    let page = runner.await.unwrap();

    assert_eq!(viewport.listener_count(), 0);
    assert!(!page.is_watching_viewport());
    match page.section(&SectionId::from("1")) {
        Some(SectionState::Hero(hero)) => assert!(!hero.carousel.is_autoplaying()),
        other => panic!("expected hero, got {other:?}"),
    }
}

#[tokio::test]
async fn dropping_the_page_detaches_from_the_viewport() {
    let api = Arc::new(FakeApi::with_sections(json!([])));
    let viewport = ViewportSignal::new(Some(800));
    let page = mount(api, Arc::default(), &viewport, static_options()).await;
    assert_eq!(viewport.listener_count(), 1);
    drop(page);
    assert_eq!(viewport.listener_count(), 0);
}
