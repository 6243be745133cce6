//! Email signup form.
//!
//! Submission is split into [`SubscribeForm::begin_submit`] and
//! [`SubscribeForm::finish_submit`] so the page can run the request off its
//! event loop and apply the outcome when it arrives. [`SubscribeForm::submit`]
//! does both in one call for hosts that can simply await.

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use storefront_model::{Section, SectionId, SubscribeConfig, SubscribeResponse};
use thiserror::Error;

use crate::infra::api_client::{ApiError, ApiResult};
use crate::infra::constants::subscribe as copy;
use crate::infra::services::{Notification, Notifier, StatusKind, StorefrontApi};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("Invalid email address")]
    InvalidEmail,

    /// The backend refused the address and said why.
    #[error("Subscription rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubscribeError {
    /// Text shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            SubscribeError::InvalidEmail => copy::INVALID_EMAIL_MESSAGE.into(),
            SubscribeError::Rejected(message) => message.clone(),
            SubscribeError::Api(_) => copy::GENERIC_FAILURE_MESSAGE.into(),
        }
    }

    fn from_api(err: ApiError) -> Self {
        match err.server_message() {
            Some(message) => SubscribeError::Rejected(message.to_string()),
            None => SubscribeError::Api(err),
        }
    }
}

/// Inline status line under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Result of [`SubscribeForm::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Send this address to the backend.
    Send(String),
    /// Rejected locally; nothing to send.
    Invalid(Notification),
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone)]
pub struct SubscribeForm {
    pub id: SectionId,
    pub title: Option<String>,
    config: SubscribeConfig,
    email: String,
    submitting: bool,
    status: Option<StatusMessage>,
}

impl SubscribeForm {
    pub fn mount(section: &Section) -> Self {
        let config: SubscribeConfig =
            section.config_as().unwrap_or_else(|err| {
                warn!("[LandingPage] Section {}: {}", section.id, err);
                SubscribeConfig::default()
            });
        Self::new(section.id.clone(), section.title.clone(), config)
    }

    pub fn new(
        id: SectionId,
        title: Option<String>,
        config: SubscribeConfig,
    ) -> Self {
        Self {
            id,
            title,
            config,
            email: String::new(),
            submitting: false,
            status: None,
        }
    }

    pub fn config(&self) -> &SubscribeConfig {
        &self.config
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn placeholder(&self) -> &str {
        self.config
            .placeholder
            .as_deref()
            .unwrap_or(copy::DEFAULT_PLACEHOLDER)
    }

    pub fn button_label(&self) -> &str {
        self.config
            .button_label
            .as_deref()
            .unwrap_or(copy::DEFAULT_BUTTON_LABEL)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Validate the field and mark the form busy.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.submitting {
            debug!("[Subscribe] Submission already in flight");
            return SubmitStart::Busy;
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            let notification =
                self.record(StatusKind::Error, SubscribeError::InvalidEmail.user_message());
            return SubmitStart::Invalid(notification);
        }
        let email = email.to_string();
        self.submitting = true;
        self.status = None;
        SubmitStart::Send(email)
    }

    /// Apply the backend's answer and return the notification to raise.
    pub fn finish_submit(
        &mut self,
        result: ApiResult<SubscribeResponse>,
    ) -> Notification {
        self.submitting = false;
        match result {
            Ok(response) if response.already_subscribed => {
                info!("[Subscribe] Address already subscribed");
                self.record(
                    StatusKind::Info,
                    copy::ALREADY_SUBSCRIBED_MESSAGE.to_string(),
                )
            }
            Ok(_) => {
                info!("[Subscribe] Subscribed");
                self.email.clear();
                self.record(StatusKind::Success, copy::SUCCESS_MESSAGE.to_string())
            }
            Err(err) => {
                warn!("[Subscribe] Failed: {}", err);
                let err = SubscribeError::from_api(err);
                self.record(StatusKind::Error, err.user_message())
            }
        }
    }

    /// Validate, send and apply in one step. Returns `None` when a
    /// submission was already in flight.
    pub async fn submit(
        &mut self,
        api: &dyn StorefrontApi,
        notifier: &dyn Notifier,
    ) -> Option<Notification> {
        let notification = match self.begin_submit() {
            SubmitStart::Busy => return None,
            SubmitStart::Invalid(notification) => notification,
            SubmitStart::Send(email) => {
                let result = api.subscribe(&email).await;
                self.finish_submit(result)
            }
        };
        notifier.notify(notification.clone());
        Some(notification)
    }

    fn record(&mut self, kind: StatusKind, text: String) -> Notification {
        self.status = Some(StatusMessage {
            kind,
            text: text.clone(),
        });
        Notification {
            kind,
            text,
            ttl: copy::NOTIFICATION_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::services::api::MockStorefrontApi;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Notification>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn form() -> SubscribeForm {
        SubscribeForm::new(SectionId::from("s"), None, SubscribeConfig::default())
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("  ada@example.co.uk "));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.io"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn invalid_email_never_starts_a_request() {
        let mut f = form();
        f.set_email("nope");
        match f.begin_submit() {
            SubmitStart::Invalid(n) => assert_eq!(n.kind, StatusKind::Error),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!f.is_submitting());
        assert_eq!(f.email(), "nope");
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let mut f = form();
        f.set_email("ada@example.com");
        assert_eq!(f.begin_submit(), SubmitStart::Send("ada@example.com".into()));
        assert_eq!(f.begin_submit(), SubmitStart::Busy);
    }

    #[tokio::test]
    async fn success_clears_the_field_and_notifies() {
        let mut api = MockStorefrontApi::new();
        api.expect_subscribe()
            .withf(|email| email.to_string() == "ada@example.com")
            .times(1)
            .returning(|_| Ok(SubscribeResponse::default()));
        let notifier = Recorder::default();

        let mut f = form();
        f.set_email(" ada@example.com ");
        let n = f.submit(&api, &notifier).await.unwrap();

        assert_eq!(n.kind, StatusKind::Success);
        assert_eq!(f.email(), "");
        assert_eq!(f.status().unwrap().kind, StatusKind::Success);
        assert_eq!(notifier.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn already_subscribed_is_info_and_keeps_the_field() {
        let mut f = form();
        f.set_email("ada@example.com");
        f.begin_submit();
        let n = f.finish_submit(Ok(SubscribeResponse {
            already_subscribed: true,
            message: None,
        }));
        assert_eq!(n.kind, StatusKind::Info);
        assert_eq!(f.email(), "ada@example.com");
        assert!(!f.is_submitting());
    }

    #[test]
    fn server_message_is_surfaced_otherwise_generic() {
        let mut f = form();
        f.set_email("ada@example.com");
        f.begin_submit();
        let n = f.finish_submit(Err(ApiError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Domain not allowed".into(),
        }));
        assert_eq!(n.text, "Domain not allowed");

        f.begin_submit();
        let n = f.finish_submit(Err(ApiError::EmptyPayload));
        assert_eq!(n.kind, StatusKind::Error);
        assert_eq!(n.text, copy::GENERIC_FAILURE_MESSAGE);
    }
}
