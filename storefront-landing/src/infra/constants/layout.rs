//! Layout constants for the rendered page.

/// Transition applied to carousel tracks when the offset changes.
pub const TRACK_TRANSITION: &str = "transform 0.5s ease-in-out";
/// Currency symbol prefixed to product prices.
pub const CURRENCY_SYMBOL: &str = "$";
/// Message rendered by data-backed sections that received nothing.
pub const NO_PRODUCTS_MESSAGE: &str = "No products available right now.";
pub const NO_TESTIMONIALS_MESSAGE: &str = "No testimonials yet.";
