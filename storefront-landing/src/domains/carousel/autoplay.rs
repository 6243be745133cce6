//! Autoplay timer lifecycle.
//!
//! The timer never touches carousel state. It only sends [`AutoplayTick`]s
//! to the page's event loop, stamped with the generation of the timer that
//! produced them. Every (re)start bumps the generation, so a tick queued by a
//! timer that has since been replaced is recognised and dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::types::{AutoplayConfig, CarouselKey};

pub type TickSender = mpsc::UnboundedSender<AutoplayTick>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTick {
    pub key: CarouselKey,
    pub generation: u64,
}

/// Inputs a running timer was created for. Any change recreates the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayPlan {
    pub interval: Duration,
    pub total: usize,
    pub visible: usize,
}

impl AutoplayPlan {
    /// `None` when autoplay is off or there is nothing to advance through.
    pub fn for_config(
        config: &AutoplayConfig,
        total: usize,
        visible: usize,
    ) -> Option<Self> {
        (config.enabled && total > visible).then_some(Self {
            interval: config.interval,
            total,
            visible,
        })
    }
}

#[derive(Debug, Default)]
pub struct Autoplay {
    generation: u64,
    plan: Option<AutoplayPlan>,
    task: Option<JoinHandle<()>>,
}

impl Autoplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn plan(&self) -> Option<AutoplayPlan> {
        self.plan
    }

    /// Bring the timer in line with `plan`. Leaves a matching timer alone,
    /// otherwise aborts the current one and starts a fresh one when `plan`
    /// and `sink` are both present. Returns whether anything changed.
    pub fn reconcile(
        &mut self,
        key: &CarouselKey,
        plan: Option<AutoplayPlan>,
        sink: Option<&TickSender>,
    ) -> bool {
        let plan = plan.filter(|_| sink.is_some());
        if plan == self.plan && self.task.is_some() == plan.is_some() {
            return false;
        }
        let was_running = self.is_running();
        self.stop();

        let (Some(plan), Some(sink)) = (plan, sink) else {
            return was_running;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::warn!("[Carousel] {key}: no async runtime, autoplay disabled");
            return was_running;
        };

        self.generation += 1;
        let generation = self.generation;
        let key = key.clone();
        let sink = sink.clone();
        self.task = Some(runtime.spawn(async move {
            let mut ticker =
                time::interval_at(Instant::now() + plan.interval, plan.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let tick = AutoplayTick {
                    key: key.clone(),
                    generation,
                };
                if sink.send(tick).is_err() {
                    break;
                }
            }
        }));
        self.plan = Some(plan);
        true
    }

    /// Abort the timer, if any.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.plan = None;
    }

    /// Whether `tick` came from the timer that is currently running.
    pub fn accepts(&self, tick: &AutoplayTick) -> bool {
        self.task.is_some() && tick.generation == self.generation
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}
