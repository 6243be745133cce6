//! CarouselController: state + breakpoints + autoplay for one section

use log::debug;

use super::autoplay::{Autoplay, AutoplayPlan, AutoplayTick, TickSender};
use super::messages::CarouselMessage;
use super::state::CarouselState;
use super::types::{AutoplayConfig, CarouselConfig, CarouselKey, WrapMode};

#[derive(Debug)]
pub struct CarouselController<T> {
    key: CarouselKey,
    config: CarouselConfig,
    state: CarouselState<T>,
    viewport_width: Option<u32>,
    autoplay: Autoplay,
    ticks: Option<TickSender>,
}

impl<T> CarouselController<T> {
    /// Create the controller for a freshly mounted section.
    ///
    /// `ticks` is where autoplay delivers its ticks; pass `None` for a static
    /// render that never runs an event loop.
    pub fn mount(
        key: CarouselKey,
        config: CarouselConfig,
        items: Vec<T>,
        viewport_width: Option<u32>,
        ticks: Option<TickSender>,
    ) -> Self {
        let visible = config.breakpoints.visible_count(viewport_width);
        let mut controller = Self {
            key,
            config,
            state: CarouselState::new(items, visible),
            viewport_width,
            autoplay: Autoplay::new(),
            ticks,
        };
        controller.sync_autoplay();
        debug!(
            "[Carousel] {} mounted: {} items, {} visible, autoplay={}",
            controller.key,
            controller.state.len(),
            controller.state.visible_count(),
            controller.autoplay.is_running()
        );
        controller
    }

    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState<T> {
        &self.state
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn autoplay_generation(&self) -> u64 {
        self.autoplay.generation()
    }

    fn wraps_manually(&self) -> bool {
        self.config.wrap_mode == WrapMode::Infinite
    }

    /// Manual next. Saturates at the last window unless the carousel wraps.
    pub fn next(&mut self) -> bool {
        let wrap = self.wraps_manually();
        self.state.advance(wrap)
    }

    /// Manual previous. Floors at 0 unless the carousel wraps.
    pub fn prev(&mut self) -> bool {
        let wrap = self.wraps_manually();
        self.state.retreat(wrap)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.state.go_to(index)
    }

    pub fn update(&mut self, message: CarouselMessage) -> bool {
        match message {
            CarouselMessage::Next => self.next(),
            CarouselMessage::Prev => self.prev(),
            CarouselMessage::GoTo(index) => self.go_to(index),
        }
    }

    /// Autoplay advance. Always wraps back to the first window. Ticks from a
    /// replaced or stopped timer are ignored.
    pub fn on_autoplay_tick(&mut self, tick: &AutoplayTick) -> bool {
        if tick.key != self.key || !self.autoplay.accepts(tick) {
            debug!(
                "[Carousel] {} ignoring stale tick (generation {}, current {})",
                self.key,
                tick.generation,
                self.autoplay.generation()
            );
            return false;
        }
        self.state.advance(true)
    }

    /// Viewport resize: recompute the visible count from the breakpoints.
    pub fn on_resize(&mut self, width: Option<u32>) {
        self.viewport_width = width;
        let count = self.config.breakpoints.visible_count(width);
        self.on_visible_count_changed(count);
    }

    /// Changing the visible count resets the window to the start.
    pub fn on_visible_count_changed(&mut self, count: usize) {
        if self.state.set_visible_count(count) {
            debug!(
                "[Carousel] {} visible count now {}",
                self.key,
                self.state.visible_count()
            );
            self.sync_autoplay();
        }
    }

    /// New items reset the window to the start.
    pub fn on_data_changed(&mut self, items: Vec<T>) {
        self.state.set_items(items);
        debug!("[Carousel] {} data changed: {} items", self.key, self.state.len());
        self.sync_autoplay();
    }

    pub fn set_autoplay(&mut self, autoplay: AutoplayConfig) {
        self.config.autoplay = autoplay;
        self.sync_autoplay();
    }

    /// Stop the timer and stop delivering ticks. State stays readable.
    pub fn unmount(&mut self) {
        self.autoplay.stop();
        self.ticks = None;
        debug!("[Carousel] {} unmounted", self.key);
    }

    fn sync_autoplay(&mut self) {
        let plan = AutoplayPlan::for_config(
            &self.config.autoplay,
            self.state.len(),
            self.state.visible_count(),
        );
        if self.autoplay.reconcile(&self.key, plan, self.ticks.as_ref()) {
            debug!(
                "[Carousel] {} autoplay {} (generation {})",
                self.key,
                if self.autoplay.is_running() {
                    "restarted"
                } else {
                    "stopped"
                },
                self.autoplay.generation()
            );
        }
    }
}
