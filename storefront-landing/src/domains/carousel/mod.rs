//! Carousel
//!
//! One parameterized controller shared by the hero, product and testimonial
//! sliders. State (window arithmetic), breakpoints (viewport width to slide
//! count), autoplay (timer lifecycle) and the controller that ties them to a
//! section are kept apart so each can be tested on its own.

pub mod autoplay;
pub mod breakpoints;
pub mod controller;
pub mod messages;
pub mod state;
pub mod types;

pub use autoplay::{Autoplay, AutoplayPlan, AutoplayTick, TickSender};
pub use breakpoints::Breakpoints;
pub use controller::CarouselController;
pub use messages::CarouselMessage;
pub use state::CarouselState;
pub use types::*;
