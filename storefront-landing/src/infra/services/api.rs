//! Backend API service trait and its HTTP implementation

use async_trait::async_trait;
use log::info;
use reqwest::StatusCode;
use storefront_model::routes::v1;
use storefront_model::{
    Product, Section, SubscribeRequest, SubscribeResponse,
};

use crate::infra::api_client::{ApiClient, ApiError, ApiResult};

/// Everything the landing page needs from the storefront backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// All landing-page sections, in display order.
    async fn fetch_sections(&self) -> ApiResult<Vec<Section>>;

    /// Products of a named collection.
    async fn fetch_collection(&self, name: &str) -> ApiResult<Vec<Product>>;

    /// Register an email address for the newsletter.
    async fn subscribe(&self, email: &str) -> ApiResult<SubscribeResponse>;
}

#[async_trait]
impl StorefrontApi for ApiClient {
    async fn fetch_sections(&self) -> ApiResult<Vec<Section>> {
        self.get(v1::landing::SECTIONS).await
    }

    async fn fetch_collection(&self, name: &str) -> ApiResult<Vec<Product>> {
        let url = self.build_url_from_segments(
            v1::collections::PREFIX
                .into_iter()
                .chain([name, v1::collections::PRODUCTS_SUFFIX]),
        )?;
        self.get_url(url.as_str()).await
    }

    async fn subscribe(&self, email: &str) -> ApiResult<SubscribeResponse> {
        let body = SubscribeRequest {
            email: email.to_string(),
        };
        match self.post(v1::subscribe::SUBSCRIBE, &body).await {
            // Some deployments answer a duplicate sign-up with 409 instead of
            // a 200 carrying `already_subscribed`.
            Err(ApiError::Status {
                status: StatusCode::CONFLICT,
                message,
            }) => {
                info!("[ApiClient] Subscribe conflict treated as duplicate");
                Ok(SubscribeResponse {
                    already_subscribed: true,
                    message: Some(message).filter(|m| !m.is_empty()),
                })
            }
            // 200 with an empty body is a plain success.
            Err(ApiError::EmptyPayload) => Ok(SubscribeResponse::default()),
            other => other,
        }
    }
}
