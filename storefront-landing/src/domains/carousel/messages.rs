//! User navigation messages for a carousel

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    /// Next arrow.
    Next,
    /// Previous arrow.
    Prev,
    /// Pagination dot for the given window start.
    GoTo(usize),
}
