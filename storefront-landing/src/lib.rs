//! Storefront landing page library
//!
//! A server-driven landing page: the backend lists sections, each section
//! mounts its own state (carousels, accordion, signup form) and the page
//! applies viewport changes, autoplay ticks and user commands on a single
//! event loop. The `storefront-landing` binary mounts the page against a
//! backend and renders it to HTML.
//!
//! Notes
//! - The library is exposed mainly so the binary and the integration tests
//!   can share it; public items may still change.

pub mod domains;
pub mod infra;
pub mod view;

pub use domains::{LandingPage, PageCommand, PageEvent, PageOptions};
