//! Service seams between the page and its external collaborators.

pub mod api;
pub mod notify;

pub use api::StorefrontApi;
pub use notify::{LogNotifier, Notification, Notifier, StatusKind};
