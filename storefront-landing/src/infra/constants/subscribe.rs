//! Copy and timing for the email signup form.

use std::time::Duration;

/// How long a subscribe notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

pub const SUCCESS_MESSAGE: &str = "Thanks for subscribing!";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "You're already subscribed.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Subscription failed. Please try again later.";
pub const DEFAULT_PLACEHOLDER: &str = "Enter your email";
pub const DEFAULT_BUTTON_LABEL: &str = "Subscribe";
