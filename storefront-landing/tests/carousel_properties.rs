use storefront_landing::domains::carousel::{
    AutoplayConfig, AutoplayTick, CarouselConfig, CarouselController,
    CarouselKey, CarouselMessage,
};
use storefront_landing::view::CarouselView;
use storefront_model::SectionId;
use tokio::sync::mpsc;

const DESKTOP: Option<u32> = Some(1280);
const MOBILE: Option<u32> = Some(375);

fn products(n: usize, width: Option<u32>) -> CarouselController<usize> {
    CarouselController::mount(
        CarouselKey::Products(SectionId::from("products")),
        CarouselConfig::product_defaults(),
        (0..n).collect(),
        width,
        None,
    )
}

fn assert_in_bounds(c: &CarouselController<usize>) {
    let state = c.state();
    let max = state.len().saturating_sub(state.visible_count());
    assert!(
        state.current_index() <= max,
        "index {} past {} (n={}, visible={})",
        state.current_index(),
        max,
        state.len(),
        state.visible_count()
    );
}

#[test]
fn index_stays_in_bounds_under_any_operation_sequence() {
    let widths = [None, Some(320), Some(768), Some(769), Some(1920)];
    // Small LCG so every run walks the same sequences.
    let mut seed: u64 = 0x5eed;
    let mut roll = |bound: u64| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (seed >> 33) % bound
    };

    for n in 0..10 {
        let mut c = products(n, DESKTOP);
        for _ in 0..200 {
            match roll(5) {
                0 => {
                    c.next();
                }
                1 => {
                    c.prev();
                }
                2 => {
                    let max = c.state().max_index() as u64;
                    c.go_to(roll(max + 1) as usize);
                }
                3 => c.on_resize(widths[roll(widths.len() as u64) as usize]),
                _ => c.on_visible_count_changed(roll(6) as usize + 1),
            }
            assert_in_bounds(&c);
        }
    }
}

#[test]
fn manual_next_saturates_at_the_last_window() {
    let mut c = products(6, DESKTOP);
    assert!(c.update(CarouselMessage::GoTo(2)));
    assert!(!c.next());
    assert_eq!(c.state().current_index(), 2);
}

#[test]
fn prev_floors_at_zero() {
    let mut c = products(6, DESKTOP);
    assert!(!c.prev());
    assert_eq!(c.state().current_index(), 0);
}

#[test]
fn hero_wraps_on_manual_navigation() {
    let mut c = CarouselController::mount(
        CarouselKey::Hero(SectionId::from("hero")),
        CarouselConfig::hero_defaults(),
        vec!["a", "b", "c"],
        DESKTOP,
        None,
    );
    assert_eq!(c.state().visible_count(), 1);
    assert!(c.prev());
    assert_eq!(c.state().current_index(), 2);
    assert!(c.next());
    assert_eq!(c.state().current_index(), 0);
}

#[test]
fn resize_to_mobile_resets_position() {
    let mut c = CarouselController::mount(
        CarouselKey::Testimonials(SectionId::from("t")),
        CarouselConfig::testimonial_defaults(),
        (0..8).collect::<Vec<usize>>(),
        DESKTOP,
        None,
    );
    c.go_to(3);
    c.on_resize(MOBILE);
    assert_eq!(c.state().visible_count(), 1);
    assert_eq!(c.state().current_index(), 0);
}

#[test]
fn resize_within_the_same_tier_keeps_position() {
    let mut c = products(10, Some(1024));
    c.go_to(3);
    c.on_resize(Some(1440));
    assert_eq!(c.state().current_index(), 3);
}

#[test]
fn breakpoint_boundary_is_inclusive() {
    assert_eq!(products(10, Some(768)).state().visible_count(), 2);
    assert_eq!(products(10, Some(769)).state().visible_count(), 4);
}

#[test]
fn new_items_reset_position() {
    let mut c = products(10, DESKTOP);
    c.go_to(5);
    c.on_data_changed((0..12).collect());
    assert_eq!(c.state().current_index(), 0);
    assert_eq!(c.state().len(), 12);
}

#[test]
fn short_lists_never_navigate_or_offset() {
    for n in 0..=4 {
        let mut c = products(n, DESKTOP);
        c.next();
        c.go_to(0);
        assert_eq!(c.state().current_index(), 0);
        assert_eq!(c.state().offset_percent(), 0.0);
        assert_eq!(c.state().dot_count(), 0);
        if let Some(view) = CarouselView::from_controller(&c) {
            assert!(view.controls.is_none());
            assert!(view.dots.is_empty());
        }
    }
}

#[test]
fn offset_follows_the_index() {
    let mut c = products(10, DESKTOP);
    c.go_to(3);
    assert_eq!(c.state().offset_percent(), 75.0);
    c.on_resize(MOBILE);
    c.go_to(3);
    assert_eq!(c.state().offset_percent(), 150.0);
}

#[tokio::test(start_paused = true)]
async fn autoplay_tick_wraps_where_manual_next_saturates() {
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    let mut config = CarouselConfig::product_defaults();
    config.autoplay = AutoplayConfig::every(5_000);
    let mut c = CarouselController::mount(
        CarouselKey::Products(SectionId::from("products")),
        config,
        (0..6).collect::<Vec<usize>>(),
        DESKTOP,
        Some(tx),
    );
    c.go_to(2);
    c.next();
    assert_eq!(c.state().current_index(), 2);

    let tick = rx.recv().await.unwrap();
    assert!(c.on_autoplay_tick(&tick));
    assert_eq!(c.state().current_index(), 0);
}
