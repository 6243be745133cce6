//! LandingPage: section lifecycle and the single event loop
//!
//! Every state change funnels through the page: viewport changes, autoplay
//! ticks, user commands and the results of background requests are applied
//! one at a time. Timers and requests run as tokio tasks that only send
//! messages back, so no state is shared across tasks.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info, warn};
use storefront_model::{Product, Section, SectionId, SectionType, SubscribeResponse};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::domains::carousel::{AutoplayTick, CarouselKey, CarouselMessage, TickSender};
use crate::domains::sections::{
    FaqSection, HeroSection, MountContext, ProductsSection, SectionState,
    SubmitStart, SubscribeForm, TestimonialsSection, loader,
};
use crate::infra::api_client::ApiResult;
use crate::infra::config::LandingConfig;
use crate::infra::constants::carousel::autoplay;
use crate::infra::services::{Notifier, StorefrontApi};
use crate::infra::viewport::ViewportWatch;
use crate::view::PageView;

/// Page-level knobs taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub default_autoplay_delay_ms: u64,
    /// When false no timers are started; used for one-shot renders.
    pub autoplay: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            default_autoplay_delay_ms: autoplay::DEFAULT_INTERVAL_MS,
            autoplay: true,
        }
    }
}

impl PageOptions {
    pub fn from_config(config: &LandingConfig) -> Self {
        Self {
            default_autoplay_delay_ms: config.default_autoplay_delay_ms,
            ..Self::default()
        }
    }
}

/// User interactions the host forwards to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    Carousel {
        key: CarouselKey,
        message: CarouselMessage,
    },
    ToggleFaq {
        section: SectionId,
        index: usize,
    },
    SetEmail {
        section: SectionId,
        email: String,
    },
    Subscribe {
        section: SectionId,
    },
    /// Refetch a products section's collection.
    ReloadCollection {
        section: SectionId,
    },
}

/// Results of background work, delivered back to the loop.
#[derive(Debug)]
pub enum PageEvent {
    SubscribeFinished {
        section: SectionId,
        result: ApiResult<SubscribeResponse>,
    },
    CollectionLoaded {
        section: SectionId,
        products: Vec<Product>,
    },
}

pub struct LandingPage {
    api: Arc<dyn StorefrontApi>,
    notifier: Arc<dyn Notifier>,
    options: PageOptions,
    sections: Vec<SectionState>,
    viewport: Option<ViewportWatch>,
    viewport_width: Option<u32>,
    ticks_tx: TickSender,
    ticks_rx: mpsc::UnboundedReceiver<AutoplayTick>,
    events_tx: mpsc::UnboundedSender<PageEvent>,
    events_rx: mpsc::UnboundedReceiver<PageEvent>,
    tasks: JoinSet<()>,
}

impl std::fmt::Debug for LandingPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LandingPage")
            .field("options", &self.options)
            .field("sections", &self.sections)
            .field("viewport_width", &self.viewport_width)
            .field("pending_tasks", &self.tasks.len())
            .finish()
    }
}

impl LandingPage {
    /// Fetch the section list, then build every section. Product
    /// collections are fetched concurrently; the page keeps server order.
    ///
    /// Backend failures never surface here: a page whose sections could not
    /// be loaded is simply empty.
    pub async fn mount(
        api: Arc<dyn StorefrontApi>,
        notifier: Arc<dyn Notifier>,
        mut viewport: Option<ViewportWatch>,
        options: PageOptions,
    ) -> Self {
        let viewport_width =
            viewport.as_mut().and_then(|rx| *rx.borrow_and_update());
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let ctx = MountContext {
            viewport_width,
            ticks: options.autoplay.then(|| ticks_tx.clone()),
            default_autoplay_delay_ms: options.default_autoplay_delay_ms,
        };

        let active = loader::load_active_sections(api.as_ref()).await;
        let sections: Vec<SectionState> = join_all(
            active
                .iter()
                .map(|section| mount_section(section, api.as_ref(), &ctx)),
        )
        .await
        .into_iter()
        .flatten()
        .collect();

        info!(
            "[LandingPage] Mounted {} sections (viewport {:?})",
            sections.len(),
            viewport_width
        );

        Self {
            api,
            notifier,
            options,
            sections,
            viewport,
            viewport_width,
            ticks_tx,
            ticks_rx,
            events_tx,
            events_rx,
            tasks: JoinSet::new(),
        }
    }

    pub fn options(&self) -> PageOptions {
        self.options
    }

    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    pub fn section(&self, id: &SectionId) -> Option<&SectionState> {
        self.sections.iter().find(|s| s.id() == id)
    }

    fn section_mut(&mut self, id: &SectionId) -> Option<&mut SectionState> {
        self.sections.iter_mut().find(|s| s.id() == id)
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    /// Whether the page still follows a viewport signal.
    pub fn is_watching_viewport(&self) -> bool {
        self.viewport.is_some()
    }

    /// Sender that feeds this page's autoplay tick queue.
    pub fn tick_sender(&self) -> TickSender {
        self.ticks_tx.clone()
    }

    pub fn view(&self) -> PageView {
        PageView::from_sections(&self.sections)
    }

    pub fn apply_resize(&mut self, width: Option<u32>) {
        if width == self.viewport_width {
            return;
        }
        debug!(
            "[LandingPage] Viewport {:?} -> {:?}",
            self.viewport_width, width
        );
        self.viewport_width = width;
        for section in &mut self.sections {
            section.on_resize(width);
        }
    }

    pub fn handle_tick(&mut self, tick: &AutoplayTick) -> bool {
        match self.section_mut(tick.key.section_id()) {
            Some(section) => section.on_autoplay_tick(tick),
            None => false,
        }
    }

    /// Apply one user command. Returns whether visible state changed
    /// immediately; requests started here report back through
    /// [`PageEvent`]s.
    pub fn handle_command(&mut self, command: PageCommand) -> bool {
        match command {
            PageCommand::Carousel { key, message } => {
                match self.section_mut(key.section_id()) {
                    Some(section) => section.update_carousel(&key, message),
                    None => {
                        debug!("[LandingPage] No carousel for {}", key);
                        false
                    }
                }
            }
            PageCommand::ToggleFaq { section, index } => {
                match self.section_mut(&section) {
                    Some(SectionState::Faq(faq)) => {
                        faq.toggle(index);
                        true
                    }
                    _ => false,
                }
            }
            PageCommand::SetEmail { section, email } => {
                match self.section_mut(&section) {
                    Some(SectionState::Subscribe(form)) => {
                        form.set_email(email);
                        true
                    }
                    _ => false,
                }
            }
            PageCommand::Subscribe { section } => self.start_subscribe(section),
            PageCommand::ReloadCollection { section } => {
                self.start_reload(section)
            }
        }
    }

    pub fn handle_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::SubscribeFinished { section, result } => {
                let notifier = Arc::clone(&self.notifier);
                if let Some(SectionState::Subscribe(form)) =
                    self.section_mut(&section)
                {
                    notifier.notify(form.finish_submit(result));
                }
            }
            PageEvent::CollectionLoaded { section, products } => {
                if let Some(SectionState::Products(products_section)) =
                    self.section_mut(&section)
                {
                    products_section.replace_products(products);
                }
            }
        }
    }

    fn start_subscribe(&mut self, section: SectionId) -> bool {
        let notifier = Arc::clone(&self.notifier);
        let Some(SectionState::Subscribe(form)) = self.section_mut(&section)
        else {
            return false;
        };
        match form.begin_submit() {
            SubmitStart::Busy => false,
            SubmitStart::Invalid(notification) => {
                notifier.notify(notification);
                true
            }
            SubmitStart::Send(email) => {
                let api = Arc::clone(&self.api);
                let events = self.events_tx.clone();
                self.tasks.spawn(async move {
                    let result = api.subscribe(&email).await;
                    let _ = events
                        .send(PageEvent::SubscribeFinished { section, result });
                });
                true
            }
        }
    }

    fn start_reload(&mut self, section: SectionId) -> bool {
        let Some(SectionState::Products(products)) = self.section(&section)
        else {
            return false;
        };
        let collection = products.config.collection.clone();
        let limit = products.config.limit;
        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        self.tasks.spawn(async move {
            let products =
                loader::load_collection(api.as_ref(), collection.as_deref(), limit)
                    .await;
            let _ = events.send(PageEvent::CollectionLoaded { section, products });
        });
        false
    }

    /// Wait for the next tick, background result or viewport change and
    /// apply it. User commands are not read here; see [`LandingPage::run`].
    pub async fn process_next(&mut self) {
        tokio::select! {
            Some(tick) = self.ticks_rx.recv() => {
                self.handle_tick(&tick);
            }
            Some(event) = self.events_rx.recv() => self.handle_event(event),
            width = viewport_changed(&mut self.viewport) => self.on_viewport(width),
            Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => {
                log_join(joined);
            }
        }
    }

    /// Drive the page until `shutdown` resolves, then unmount.
    pub async fn run<F>(
        &mut self,
        mut commands: mpsc::Receiver<PageCommand>,
        shutdown: F,
    ) where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut commands_open = true;
        info!("[LandingPage] Event loop started");
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                Some(tick) = self.ticks_rx.recv() => {
                    self.handle_tick(&tick);
                }
                Some(event) = self.events_rx.recv() => self.handle_event(event),
                width = viewport_changed(&mut self.viewport) => self.on_viewport(width),
                command = commands.recv(), if commands_open => match command {
                    Some(command) => {
                        self.handle_command(command);
                    }
                    None => {
                        debug!("[LandingPage] Command channel closed");
                        commands_open = false;
                    }
                },
                Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    log_join(joined);
                }
            }
        }
        self.unmount();
        info!("[LandingPage] Event loop stopped");
    }

    fn on_viewport(&mut self, width: Option<Option<u32>>) {
        match width {
            Some(width) => self.apply_resize(width),
            None => {
                debug!("[LandingPage] Viewport signal closed");
                self.viewport = None;
            }
        }
    }

    /// Stop every timer, abort background requests and release the
    /// viewport subscription.
    pub fn unmount(&mut self) {
        for section in &mut self.sections {
            section.unmount();
        }
        self.tasks.abort_all();
        self.viewport = None;
    }
}

impl Drop for LandingPage {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn mount_section(
    section: &Section,
    api: &dyn StorefrontApi,
    ctx: &MountContext,
) -> Option<SectionState> {
    let state = match section.section_type {
        SectionType::Hero => SectionState::Hero(HeroSection::mount(section, ctx)),
        SectionType::Products => SectionState::Products(
            ProductsSection::load(section, api, ctx).await,
        ),
        SectionType::Faq => SectionState::Faq(FaqSection::mount(section)),
        SectionType::Testimonials => {
            SectionState::Testimonials(TestimonialsSection::mount(section, ctx))
        }
        SectionType::Subscribe => {
            SectionState::Subscribe(SubscribeForm::mount(section))
        }
        SectionType::Unknown => return None,
    };
    Some(state)
}

/// Resolves with the new width, or `None` once the signal's sender is gone.
/// Never resolves when there is no signal.
async fn viewport_changed(
    viewport: &mut Option<ViewportWatch>,
) -> Option<Option<u32>> {
    match viewport {
        Some(rx) => match rx.changed().await {
            Ok(()) => Some(*rx.borrow_and_update()),
            Err(_) => None,
        },
        None => std::future::pending().await,
    }
}

fn log_join(joined: Result<(), tokio::task::JoinError>) {
    if let Err(err) = joined {
        if !err.is_cancelled() {
            warn!("[LandingPage] Background task failed: {}", err);
        }
    }
}
